//! Static analysis for autoscale formulas.
//!
//! - [`rules`]: semantic diagnostic rules and the engine that runs them
//! - [`braces`]: syntax-tree and token-stack brace matchers
//! - [`analyze`]: one full pass from text to tokens, tree, diagnostics and
//!   brace pairs
//! - [`service`]: caret queries and completion lists for editors

mod analysis;
pub mod braces;
pub mod rules;
pub mod service;

pub use analysis::{analyze, analyze_with, Analysis, AnalysisOptions};
pub use braces::{match_syntax, match_tokens, BraceMatch, BraceStrategy};
pub use rules::{run_rules, Rule, RuleEngine, RuleRegistry};
pub use service::{
    brace_match_at, completion_items, member_completions, member_target_at, user_identifiers,
    CompletionItem, CompletionKind,
};

#[cfg(test)]
mod tests;
