//! One full analysis pass over a formula text.

use asf_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use asf_ir::{Formula, Token};
use asf_lexer::tokenize;
use asf_parse::parse;

use crate::braces::{match_syntax, match_tokens, BraceMatch, BraceStrategy};
use crate::rules::RuleRegistry;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub brace_strategy: BraceStrategy,
    pub config: DiagnosticConfig,
}

/// Everything an editor needs from one pass.
#[derive(Clone, Debug)]
pub struct Analysis<'src> {
    /// Covering token list, `End` excluded.
    pub tokens: Vec<Token<'src>>,
    /// Statements that parsed; broken ones are absent.
    pub formula: Formula,
    /// Parse errors, then semantic diagnostics, each by start index.
    pub diagnostics: Vec<Diagnostic>,
    pub braces: Vec<BraceMatch>,
    /// Errors dropped by the configured error limit.
    pub suppressed: usize,
}

impl Analysis<'_> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

/// Tokenize, parse, run every rule and match braces.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn analyze<'src>(source: &'src str, options: &AnalysisOptions) -> Analysis<'src> {
    analyze_with(source, options, &RuleRegistry::new())
}

/// [`analyze`] with a caller-chosen rule set.
pub fn analyze_with<'src>(
    source: &'src str,
    options: &AnalysisOptions,
    rules: &RuleRegistry,
) -> Analysis<'src> {
    let tokens = tokenize(source);
    let output = parse(source);
    let parsed_cleanly = !output.has_errors();

    let mut queue = DiagnosticQueue::with_config(options.config);
    queue.extend(output.diagnostics());
    queue.extend(rules.run(&output.formula));
    let diagnostics = queue.flush();
    let suppressed = queue.suppressed();

    let braces = if options.brace_strategy.uses_syntax(parsed_cleanly) {
        match_syntax(&output.formula)
    } else {
        match_tokens(&tokens)
    };

    tracing::debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        braces = braces.len(),
        suppressed,
        "analysis finished"
    );

    Analysis {
        tokens,
        formula: output.formula,
        diagnostics,
        braces,
        suppressed,
    }
}

#[cfg(test)]
mod tests;
