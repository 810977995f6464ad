use asf_diagnostic::{Diagnostic, ErrorCode};
use asf_ir::declarations::is_sampling_variable;
use asf_ir::{ExprKind, Node};

use super::Rule;

/// A method invoked on something other than a sampling variable.
pub struct InvalidMethodInvocationTarget;

impl Rule for InvalidMethodInvocationTarget {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidMethodInvocationTarget
    }

    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>) {
        let Node::Expr(expr) = node else { return };
        let ExprKind::MethodInvocation { object, .. } = &expr.kind else {
            return;
        };
        if !is_sampling_variable(&object.name) {
            out.push(
                Diagnostic::new(
                    self.code(),
                    format!("`{}` is not a sampling variable", object.name),
                    object.span,
                )
                .with_note("methods can only be invoked on sampling variables such as `$CPUPercent`"),
            );
        }
    }
}
