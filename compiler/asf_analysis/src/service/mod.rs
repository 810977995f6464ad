//! Editor queries built on analysis results.
//!
//! These are the pieces a host editor calls between passes: which brace
//! pairs with the one at the caret, what a `.` is selecting a member of,
//! and what to offer for completion.

use asf_ir::declarations::{
    is_sampling_variable, DEALLOCATION_KEYWORDS, SAMPLING_VARIABLES, SETTABLE_VARIABLES, TIME_INTERVALS,
};
use asf_ir::{signatures, Formula, SignatureTable, Token, TokenKind};
use asf_lexer::Lexer;
use rustc_hash::FxHashSet;

use crate::braces::BraceMatch;

/// The pair with a delimiter at `offset`, or else at `offset - 1` (the caret
/// sitting just after a delimiter).
pub fn brace_match_at(braces: &[BraceMatch], offset: usize) -> Option<BraceMatch> {
    let at = |position: usize| {
        braces
            .iter()
            .find(|pair| pair.left == position || pair.right == position)
            .copied()
    };
    at(offset).or_else(|| offset.checked_sub(1).and_then(at))
}

/// The identifier whose member is being selected at `caret`.
///
/// Looks at the significant tokens before the caret for `name .` or
/// `name . partial`. Returns `None` when the caret is not on a char
/// boundary.
pub fn member_target_at(source: &str, caret: usize) -> Option<Token<'_>> {
    let prefix = source.get(..caret.min(source.len()))?;
    let significant: Vec<Token<'_>> = Lexer::new(prefix).tokens().filter(|t| !t.is_trivia()).collect();
    let target = match significant.as_slice() {
        [.., target, dot] if dot.kind == TokenKind::Dot => *target,
        [.., target, dot, partial]
            if dot.kind == TokenKind::Dot && partial.kind == TokenKind::Identifier =>
        {
            *target
        }
        _ => return None,
    };
    (target.kind == TokenKind::Identifier).then_some(target)
}

/// Assigned names in first-assignment order, without repeats.
pub fn user_identifiers(formula: &Formula) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    formula
        .assignments
        .iter()
        .map(|assignment| assignment.identifier.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionKind {
    Variable,
    SamplingVariable,
    ServiceVariable,
    TimeInterval,
    Function,
    Method,
    Keyword,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, serde::Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CompletionItem {
    fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        CompletionItem {
            label: label.into(),
            kind,
            detail: None,
        }
    }

    #[must_use]
    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Everything that can appear in expression position: the user's own
/// variables followed by the built-in declarations.
pub fn completion_items(formula: &Formula) -> Vec<CompletionItem> {
    let builtin: FxHashSet<&str> = SAMPLING_VARIABLES
        .iter()
        .chain(SETTABLE_VARIABLES)
        .copied()
        .collect();

    let mut items: Vec<CompletionItem> = user_identifiers(formula)
        .into_iter()
        .filter(|name| !builtin.contains(name))
        .map(|name| CompletionItem::new(name, CompletionKind::Variable))
        .collect();

    let fixed = [
        (SAMPLING_VARIABLES, CompletionKind::SamplingVariable),
        (SETTABLE_VARIABLES, CompletionKind::ServiceVariable),
        (TIME_INTERVALS, CompletionKind::TimeInterval),
        (DEALLOCATION_KEYWORDS, CompletionKind::Keyword),
    ];
    for (names, kind) in fixed {
        items.extend(names.iter().map(|name| CompletionItem::new(*name, kind)));
    }
    items.extend(signature_items(signatures::functions(), CompletionKind::Function));
    items
}

/// Sampling methods when the caret follows `$Variable.`, otherwise nothing.
pub fn member_completions(source: &str, caret: usize) -> Vec<CompletionItem> {
    match member_target_at(source, caret) {
        Some(target) if is_sampling_variable(target.text) => {
            signature_items(signatures::methods(), CompletionKind::Method).collect()
        }
        _ => Vec::new(),
    }
}

fn signature_items(table: &SignatureTable, kind: CompletionKind) -> impl Iterator<Item = CompletionItem> + '_ {
    table.entries().iter().map(move |(name, overloads)| {
        let item = CompletionItem::new(*name, kind);
        match overloads.first() {
            Some(first) => item.with_detail(first.label()),
            None => item,
        }
    })
}

#[cfg(test)]
mod tests;
