//! Parser tests.
//!
//! - `parser`: trees, precedence and spans for valid input
//! - `recovery`: statement-level error recovery
//! - `properties`: totality and span invariants on arbitrary input

mod properties;

use asf_ir::{Expr, ExprKind, UnaryOp};

/// Compact prefix rendering of an expression tree.
pub(crate) fn sexpr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Ternary {
            condition,
            true_value,
            false_value,
        } => format!("(? {} {} {})", sexpr(condition), sexpr(true_value), sexpr(false_value)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.symbol(), sexpr(left), sexpr(right))
        }
        ExprKind::Unary { op, operand } => {
            let name = match op {
                UnaryOp::Negate => "neg",
                UnaryOp::Not => "not",
            };
            format!("({name} {})", sexpr(operand))
        }
        ExprKind::FunctionCall {
            function,
            arguments,
            ..
        } => with_arguments(format!("(call {}", function.name), arguments),
        ExprKind::MethodInvocation {
            object,
            method,
            arguments,
            ..
        } => with_arguments(format!("(invoke {} {}", object.name, method.name), arguments),
        ExprKind::Parenthesized { inner, .. } => format!("(paren {})", sexpr(inner)),
        ExprKind::Identifier(name) => name.clone(),
        ExprKind::Keyword(name) => format!("kw:{name}"),
        ExprKind::Double(value) => value.to_string(),
        ExprKind::String(text) => format!("{text:?}"),
    }
}

fn with_arguments(mut head: String, arguments: &[Expr]) -> String {
    for argument in arguments {
        head.push(' ');
        head.push_str(&sexpr(argument));
    }
    head.push(')');
    head
}
