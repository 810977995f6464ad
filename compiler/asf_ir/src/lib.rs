//! Shared data model for the autoscale formula front-end.
//!
//! - [`Span`]: half-open byte range into the source
//! - [`Token`] and [`TokenKind`]: lexer output
//! - [`ast`]: the syntax tree, with post-order traversal in [`visitor`]
//! - [`signatures`]: built-in function and method overloads
//! - [`declarations`]: built-in variable, constant and keyword names

pub mod ast;
pub mod declarations;
pub mod signatures;
mod span;
pub mod token;
pub mod visitor;

pub use ast::{
    Assignment, BinaryOp, Delimiters, Expr, ExprKind, Formula, Identifier, UnaryOp,
};
pub use signatures::{MethodSignatureInfo, ParameterInfo, SignatureTable};
pub use span::{Span, SpanError};
pub use token::{Token, TokenClass, TokenInfo, TokenKind, TokenTriggers};
pub use visitor::{walk, Node, Visitor};
