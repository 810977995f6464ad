//! Statement-level grammar.
//!
//! ```text
//! formula    = { assignment ( ";" | END ) }
//! assignment = IDENTIFIER "=" expression
//! ```

mod expr;

use asf_ir::{Assignment, Formula, Identifier, TokenKind};

use crate::recovery::{synchronize, STATEMENT_END};
use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_formula(&mut self) -> Formula {
        let mut assignments = Vec::new();

        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::End => break,
                TokenKind::Semicolon => {
                    self.errors.push(
                        ParseError::expected(TokenKind::Identifier.display_name(), &token)
                            .in_context(ErrorContext::Assignment),
                    );
                    self.bump();
                }
                _ => match self.parse_assignment() {
                    Ok(assignment) => {
                        assignments.push(assignment);
                        self.finish_statement();
                    }
                    Err(error) => {
                        tracing::trace!(%error, "dropping statement");
                        self.errors.push(error.in_context(ErrorContext::Assignment));
                        self.recover_statement();
                    }
                },
            }
        }

        Formula::new(assignments, self.source_span())
    }

    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let name = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Equal)?;
        let expression = self.parse_expr()?;
        Ok(Assignment::new(Identifier::new(name.text, name.span), expression))
    }

    /// After a complete assignment: require `;` or end of input.
    fn finish_statement(&mut self) {
        let token = self.peek();
        match token.kind {
            TokenKind::Semicolon => {
                self.bump();
            }
            TokenKind::End => {}
            _ => {
                self.errors.push(ParseError::expected_one_of(
                    &[TokenKind::Semicolon, TokenKind::End],
                    &token,
                ));
                self.recover_statement();
            }
        }
    }

    fn recover_statement(&mut self) {
        let skipped = synchronize(&mut self.lexer, STATEMENT_END);
        tracing::trace!(skipped, offset = self.lexer.offset(), "resynchronized");
        self.lexer.eat(TokenKind::Semicolon);
    }
}
