//! Expression parsing.
//!
//! ```text
//! expression = binary [ "?" expression ":" expression ]
//! binary     = unary { BINARY_OP unary }      (precedence climbing)
//! unary      = ( "-" | "!" ) unary | primary
//! ```
//!
//! - `mod.rs`: entry point, ternary and the binary precedence loop
//! - `operators.rs`: operator matching
//! - `primary.rs`: literals, names, calls, invocations, parentheses

mod operators;
mod primary;

use asf_ir::{Expr, ExprKind, TokenKind};
use asf_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

/// Lowest binary precedence (`||`).
const MIN_PRECEDENCE: u8 = 1;

impl Parser<'_> {
    /// Parse an expression, including a trailing conditional.
    ///
    /// Wrapped in `ensure_sufficient_stack` for deeply nested input.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_ternary())
    }

    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_binary(MIN_PRECEDENCE)?;
        if !self.check(TokenKind::Question) {
            return Ok(condition);
        }
        self.bump();

        let true_value = self
            .parse_expr()
            .map_err(|e| e.in_context(ErrorContext::Ternary))?;
        self.expect(TokenKind::Colon)
            .map_err(|e| e.in_context(ErrorContext::Ternary))?;
        // Right-associative: the else branch is a full expression.
        let false_value = self
            .parse_expr()
            .map_err(|e| e.in_context(ErrorContext::Ternary))?;

        let span = condition.span.merge(false_value.span);
        Ok(Expr::new(
            ExprKind::Ternary {
                condition: Box::new(condition),
                true_value: Box::new(true_value),
                false_value: Box::new(false_value),
            },
            span,
        ))
    }

    /// Precedence climbing over [`BinaryOp::precedence`](asf_ir::BinaryOp::precedence).
    /// Operators at or above `min_precedence` are folded left-associatively.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_binary_op() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.bump();
            let right = self.parse_binary(precedence + 1)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_primary();
        };
        let op_token = self.bump();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = op_token.span.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }
}
