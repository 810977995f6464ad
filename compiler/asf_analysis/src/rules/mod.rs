//! Semantic diagnostic rules.
//!
//! Each rule looks at one node at a time and reports into its own list.
//! The [`RuleEngine`] walks the tree once, hands every node to every rule,
//! then concatenates the lists in registration order. Rules never see each
//! other's output.

mod deallocation;
mod names;
mod signatures;
mod target;

use asf_diagnostic::{Diagnostic, ErrorCode};
use asf_ir::{Formula, Node, Visitor};

pub use deallocation::{InvalidAssignmentFromKeyword, InvalidAssignmentToDeallocationOption};
pub use names::{UnknownFunctionName, UnknownMethodName};
pub use signatures::{InvalidFunctionSignature, InvalidMethodSignature};
pub use target::InvalidMethodInvocationTarget;

/// A semantic check over single nodes.
pub trait Rule: Send + Sync {
    /// The catalog code this rule reports.
    fn code(&self) -> ErrorCode;

    /// Inspect `node`, pushing any findings onto `out`.
    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>);
}

/// Ordered list of rules. The order fixes the order of the output.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Every built-in rule.
    pub fn new() -> Self {
        RuleRegistry {
            rules: vec![
                Box::new(UnknownFunctionName),
                Box::new(UnknownMethodName),
                Box::new(InvalidFunctionSignature),
                Box::new(InvalidMethodSignature),
                Box::new(InvalidMethodInvocationTarget),
                Box::new(InvalidAssignmentToDeallocationOption),
                Box::new(InvalidAssignmentFromKeyword),
            ],
        }
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        RuleRegistry { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `formula`.
    #[tracing::instrument(level = "debug", skip_all, fields(rules = self.rules.len()))]
    pub fn run(&self, formula: &Formula) -> Vec<Diagnostic> {
        let mut engine = RuleEngine::new(self);
        formula.accept(&mut engine);
        let diagnostics = engine.finish();
        tracing::debug!(count = diagnostics.len(), "rules finished");
        diagnostics
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Traversal client that fans nodes out to the registered rules.
pub struct RuleEngine<'r> {
    rules: &'r [Box<dyn Rule>],
    found: Vec<Vec<Diagnostic>>,
}

impl<'r> RuleEngine<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        RuleEngine {
            rules: &registry.rules,
            found: registry.rules.iter().map(|_| Vec::new()).collect(),
        }
    }

    /// Diagnostics grouped by rule in registration order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.found.into_iter().flatten().collect()
    }
}

impl<'ast> Visitor<'ast> for RuleEngine<'_> {
    fn visit(&mut self, node: Node<'ast>) {
        for (rule, out) in self.rules.iter().zip(&mut self.found) {
            rule.check(node, out);
        }
    }
}

/// Run the built-in rules over `formula`.
pub fn run_rules(formula: &Formula) -> Vec<Diagnostic> {
    RuleRegistry::new().run(formula)
}

#[cfg(test)]
mod tests;
