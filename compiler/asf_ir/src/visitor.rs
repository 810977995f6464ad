//! Post-order traversal of the syntax tree.
//!
//! The tree is a closed set of node shapes, so traversal is one exhaustive
//! `match` in [`walk`] rather than a method per node type. A [`Visitor`]
//! receives every node exactly once, always after all of that node's
//! descendants. Analyses that depend on nesting order (brace matching emits
//! inner pairs before outer ones) rely on this.
//!
//! Child order is source order: assignment target before value, callee or
//! receiver and method name before arguments, arguments left to right.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit(&mut self, node: Node<'ast>) {
//!         if let Node::Expr(Expr { kind: ExprKind::FunctionCall { .. }, .. }) = node {
//!             self.0 += 1;
//!         }
//!     }
//! }
//! ```

use asf_stack::ensure_sufficient_stack;

use crate::ast::{Assignment, Expr, ExprKind, Formula, Identifier};
use crate::Span;

/// A borrowed reference to any node in the tree.
#[derive(Copy, Clone, Debug)]
pub enum Node<'ast> {
    Formula(&'ast Formula),
    Assignment(&'ast Assignment),
    Identifier(&'ast Identifier),
    Expr(&'ast Expr),
}

impl Node<'_> {
    pub fn span(&self) -> Span {
        match self {
            Node::Formula(formula) => formula.span,
            Node::Assignment(assignment) => assignment.span,
            Node::Identifier(identifier) => identifier.span,
            Node::Expr(expr) => expr.span,
        }
    }
}

/// Receives nodes in post-order.
///
/// The visitor may mutate its own state; the tree is immutable.
pub trait Visitor<'ast> {
    fn visit(&mut self, node: Node<'ast>);
}

/// Traverse `node` and its descendants, children before parents.
pub fn walk<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: Node<'ast>) {
    ensure_sufficient_stack(|| {
        match node {
            Node::Formula(formula) => {
                for assignment in &formula.assignments {
                    walk(visitor, Node::Assignment(assignment));
                }
            }
            Node::Assignment(assignment) => {
                walk(visitor, Node::Identifier(&assignment.identifier));
                walk(visitor, Node::Expr(&assignment.expression));
            }
            Node::Identifier(_) => {}
            Node::Expr(expr) => walk_expr_children(visitor, expr),
        }
        visitor.visit(node);
    });
}

fn walk_expr_children<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match &expr.kind {
        ExprKind::Ternary {
            condition,
            true_value,
            false_value,
        } => {
            walk(visitor, Node::Expr(condition));
            walk(visitor, Node::Expr(true_value));
            walk(visitor, Node::Expr(false_value));
        }
        ExprKind::Binary { left, right, .. } => {
            walk(visitor, Node::Expr(left));
            walk(visitor, Node::Expr(right));
        }
        ExprKind::Unary { operand, .. } => walk(visitor, Node::Expr(operand)),
        ExprKind::FunctionCall {
            function,
            arguments,
            ..
        } => {
            walk(visitor, Node::Identifier(function));
            for argument in arguments {
                walk(visitor, Node::Expr(argument));
            }
        }
        ExprKind::MethodInvocation {
            object,
            method,
            arguments,
            ..
        } => {
            walk(visitor, Node::Identifier(object));
            walk(visitor, Node::Identifier(method));
            for argument in arguments {
                walk(visitor, Node::Expr(argument));
            }
        }
        ExprKind::Parenthesized { inner, .. } => walk(visitor, Node::Expr(inner)),
        ExprKind::Identifier(_)
        | ExprKind::Keyword(_)
        | ExprKind::Double(_)
        | ExprKind::String(_) => {}
    }
}

impl Formula {
    /// Dispatch every node of this formula to `visitor` in post-order.
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        walk(visitor, Node::Formula(self));
    }
}
