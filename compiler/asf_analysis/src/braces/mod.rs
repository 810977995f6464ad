//! Brace matching for highlight-matching-brace.
//!
//! Two strategies produce the same [`BraceMatch`] shape:
//!
//! - [`match_syntax`] walks the tree and pairs the delimiters recorded on
//!   parenthesized expressions, calls and invocations. Traversal is
//!   post-order, so an inner pair always comes before the pair enclosing it.
//! - [`match_tokens`] runs a stack over the raw `(`/`)` tokens. It works on
//!   text that does not parse, but cannot tell grouping from call parens.

mod syntax;
mod tokens;

pub use syntax::{match_syntax, SyntaxBraceMatcher};
pub use tokens::match_tokens;

use asf_ir::Delimiters;

/// Offsets of a matched opening and closing delimiter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, serde::Serialize)]
pub struct BraceMatch {
    pub left: usize,
    pub right: usize,
}

impl BraceMatch {
    pub const fn new(left: usize, right: usize) -> Self {
        BraceMatch { left, right }
    }

    pub const fn contains(&self, offset: usize) -> bool {
        self.left <= offset && offset <= self.right
    }
}

impl From<Delimiters> for BraceMatch {
    fn from(parens: Delimiters) -> Self {
        BraceMatch::new(parens.open.start_index(), parens.close.start_index())
    }
}

/// Which matcher an analysis pass uses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum BraceStrategy {
    /// Syntax tree when the text parsed cleanly, token stack otherwise.
    #[default]
    Auto,
    Syntax,
    Tokens,
}

impl BraceStrategy {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "auto" => Some(BraceStrategy::Auto),
            "syntax" => Some(BraceStrategy::Syntax),
            "tokens" => Some(BraceStrategy::Tokens),
            _ => None,
        }
    }

    /// Whether this strategy walks the tree for a parse with or without errors.
    pub fn uses_syntax(self, parsed_cleanly: bool) -> bool {
        match self {
            BraceStrategy::Auto => parsed_cleanly,
            BraceStrategy::Syntax => true,
            BraceStrategy::Tokens => false,
        }
    }
}
