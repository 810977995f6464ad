//! Syntax tree for autoscale formulas.
//!
//! Every node owns its children. Equality is structural and includes
//! spans, so two trees compare equal only when they were parsed from
//! identically positioned text.

use std::{fmt, mem};

use asf_stack::ensure_sufficient_stack;

use crate::Span;

/// Root node: one complete formula text.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Formula {
    pub assignments: Vec<Assignment>,
    pub span: Span,
}

impl Formula {
    pub fn new(assignments: Vec<Assignment>, span: Span) -> Self {
        Formula { assignments, span }
    }
}

/// `identifier = expression`
#[derive(Clone, PartialEq, Debug)]
pub struct Assignment {
    pub identifier: Identifier,
    pub expression: Expr,
    pub span: Span,
}

impl Assignment {
    pub fn new(identifier: Identifier, expression: Expr) -> Self {
        let span = identifier.span.merge(expression.span);
        Assignment {
            identifier,
            expression,
            span,
        }
    }
}

/// A name in name position: assignment target, callee, receiver or method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

/// Spans of a matched `(` `)` pair.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Delimiters {
    pub open: Span,
    pub close: Span,
}

/// An expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Whether this expression is a bare deallocation keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(self.kind, ExprKind::Keyword(_))
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// `condition ? true_value : false_value`
    Ternary {
        condition: Box<Expr>,
        true_value: Box<Expr>,
        false_value: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `function(arguments)`
    FunctionCall {
        function: Identifier,
        arguments: Vec<Expr>,
        parens: Delimiters,
    },
    /// `object.method(arguments)`
    MethodInvocation {
        object: Identifier,
        method: Identifier,
        arguments: Vec<Expr>,
        parens: Delimiters,
    },
    /// `(inner)`
    Parenthesized {
        inner: Box<Expr>,
        parens: Delimiters,
    },
    Identifier(String),
    Keyword(String),
    Double(f64),
    /// String literal contents without the quotes.
    String(String),
}

/// Tears the tree down with an explicit work list so that dropping a deeply
/// nested expression does not recurse on the caller's stack.
impl Drop for Expr {
    fn drop(&mut self) {
        if !self.kind.has_children() {
            return;
        }
        let mut pending = vec![mem::replace(&mut self.kind, ExprKind::Double(0.0))];
        while let Some(kind) = pending.pop() {
            match kind {
                ExprKind::Ternary {
                    condition,
                    true_value,
                    false_value,
                } => pending.extend([condition, true_value, false_value].map(|mut e| e.take_kind())),
                ExprKind::Binary { left, right, .. } => {
                    pending.extend([left, right].map(|mut e| e.take_kind()));
                }
                ExprKind::Unary { operand: mut child, .. } | ExprKind::Parenthesized { inner: mut child, .. } => {
                    pending.push(child.take_kind());
                }
                ExprKind::FunctionCall { arguments, .. } | ExprKind::MethodInvocation { arguments, .. } => {
                    pending.extend(arguments.into_iter().map(|mut e| e.take_kind()));
                }
                ExprKind::Identifier(_) | ExprKind::Keyword(_) | ExprKind::Double(_) | ExprKind::String(_) => {}
            }
        }
    }
}

impl Expr {
    fn take_kind(&mut self) -> ExprKind {
        mem::replace(&mut self.kind, ExprKind::Double(0.0))
    }
}

impl ExprKind {
    fn has_children(&self) -> bool {
        match self {
            ExprKind::FunctionCall { arguments, .. } | ExprKind::MethodInvocation { arguments, .. } => {
                !arguments.is_empty()
            }
            ExprKind::Ternary { .. } | ExprKind::Binary { .. } | ExprKind::Unary { .. } | ExprKind::Parenthesized { .. } => {
                true
            }
            ExprKind::Identifier(_) | ExprKind::Keyword(_) | ExprKind::Double(_) | ExprKind::String(_) => false,
        }
    }
}

/// Source-like rendering, one `name = expr;` per line.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for assignment in &self.assignments {
            writeln!(f, "{assignment};")?;
        }
        Ok(())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.identifier.name, self.expression)
    }
}

/// Renders with single spaces around operators. Grouping comes only from
/// `Parenthesized` nodes, so a parsed tree prints back to equivalent source.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match &self.kind {
            ExprKind::Ternary {
                condition,
                true_value,
                false_value,
            } => write!(f, "{condition} ? {true_value} : {false_value}"),
            ExprKind::Binary { op, left, right } => write!(f, "{left} {} {right}", op.symbol()),
            ExprKind::Unary { op, operand } => write!(f, "{}{operand}", op.symbol()),
            ExprKind::FunctionCall {
                function,
                arguments,
                ..
            } => {
                write!(f, "{}", function.name)?;
                write_arguments(f, arguments)
            }
            ExprKind::MethodInvocation {
                object,
                method,
                arguments,
                ..
            } => {
                write!(f, "{}.{}", object.name, method.name)?;
                write_arguments(f, arguments)
            }
            ExprKind::Parenthesized { inner, .. } => write!(f, "({inner})"),
            ExprKind::Identifier(name) | ExprKind::Keyword(name) => f.write_str(name),
            ExprKind::Double(value) => write!(f, "{value}"),
            ExprKind::String(text) => write!(f, "\"{text}\""),
        })
    }
}

fn write_arguments(f: &mut fmt::Formatter<'_>, arguments: &[Expr]) -> fmt::Result {
    f.write_str("(")?;
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{argument}")?;
    }
    f.write_str(")")
}

/// Binary operators, grouped by precedence level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Or,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Binding strength; higher binds tighter. All levels are left-associative.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Equal | BinaryOp::NotEqual => 3,
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => 4,
            BinaryOp::Add | BinaryOp::Subtract => 5,
            BinaryOp::Multiply | BinaryOp::Divide => 6,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

/// Prefix operators. Both bind tighter than any binary operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}
