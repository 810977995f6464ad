//! Argument counts against the overloads of a known name.
//!
//! Arity is checked by membership only: a call is valid when its argument
//! count equals the parameter count of at least one overload. Unknown names
//! are left to the name rules.

use asf_diagnostic::{Diagnostic, ErrorCode};
use asf_ir::{signatures, ExprKind, Node, SignatureTable, Span};

use super::Rule;

pub struct InvalidFunctionSignature;

impl Rule for InvalidFunctionSignature {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidFunctionSignature
    }

    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>) {
        let Node::Expr(expr) = node else { return };
        let ExprKind::FunctionCall {
            function,
            arguments,
            ..
        } = &expr.kind
        else {
            return;
        };
        if let Some(diagnostic) = check_arity(
            self.code(),
            signatures::functions(),
            "function",
            &function.name,
            arguments.len(),
            expr.span,
        ) {
            out.push(diagnostic);
        }
    }
}

pub struct InvalidMethodSignature;

impl Rule for InvalidMethodSignature {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidMethodSignature
    }

    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>) {
        let Node::Expr(expr) = node else { return };
        let ExprKind::MethodInvocation {
            method, arguments, ..
        } = &expr.kind
        else {
            return;
        };
        if let Some(diagnostic) = check_arity(
            self.code(),
            signatures::methods(),
            "method",
            &method.name,
            arguments.len(),
            expr.span,
        ) {
            out.push(diagnostic);
        }
    }
}

fn check_arity(
    code: ErrorCode,
    table: &SignatureTable,
    what: &str,
    name: &str,
    count: usize,
    span: Span,
) -> Option<Diagnostic> {
    let overloads = table.get(name)?;
    if table.parameter_counts(name)?.contains(&count) {
        return None;
    }
    let diagnostic = Diagnostic::new(
        code,
        format!(
            "{what} `{name}` does not take {count} argument{}",
            if count == 1 { "" } else { "s" }
        ),
        span,
    );
    Some(
        overloads
            .iter()
            .fold(diagnostic, |d, overload| d.with_note(format!("expected `{}`", overload.label()))),
    )
}
