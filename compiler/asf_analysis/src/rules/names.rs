//! Calls to names missing from the signature tables.

use asf_diagnostic::{Diagnostic, ErrorCode};
use asf_ir::{signatures, ExprKind, Node};

use super::Rule;

/// A function call whose name is not a built-in function.
pub struct UnknownFunctionName;

impl Rule for UnknownFunctionName {
    fn code(&self) -> ErrorCode {
        ErrorCode::UnknownFunctionName
    }

    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>) {
        let Node::Expr(expr) = node else { return };
        let ExprKind::FunctionCall { function, .. } = &expr.kind else {
            return;
        };
        if !signatures::functions().contains(&function.name) {
            out.push(Diagnostic::new(
                self.code(),
                format!("unknown function `{}`", function.name),
                function.span,
            ));
        }
    }
}

/// A method invocation whose method is not a sampling method.
pub struct UnknownMethodName;

impl Rule for UnknownMethodName {
    fn code(&self) -> ErrorCode {
        ErrorCode::UnknownMethodName
    }

    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>) {
        let Node::Expr(expr) = node else { return };
        let ExprKind::MethodInvocation { method, .. } = &expr.kind else {
            return;
        };
        if !signatures::methods().contains(&method.name) {
            out.push(Diagnostic::new(
                self.code(),
                format!("unknown method `{}`", method.name),
                method.span,
            ));
        }
    }
}
