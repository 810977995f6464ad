//! Recursive descent parser for autoscale formulas.
//!
//! Produces an owned [`Formula`] plus the list of syntax errors. Errors are
//! recovered at statement granularity: a broken statement is reported,
//! skipped up to the next `;`, and parsing continues.

mod error;
mod grammar;
mod recovery;

pub use error::{ErrorContext, ParseError};
pub use recovery::{synchronize, TokenSet, STATEMENT_END};

use asf_diagnostic::Diagnostic;
use asf_ir::{Formula, Span, Token, TokenKind};
use asf_lexer::Lexer;

/// Result of parsing one formula text.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub formula: Formula,
    /// Syntax errors in source order.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parser state.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            errors: Vec::new(),
        }
    }

    /// Parse the whole source.
    pub fn parse(mut self) -> ParseOutput {
        let formula = self.parse_formula();
        ParseOutput {
            formula,
            errors: self.errors,
        }
    }

    #[inline]
    fn peek(&mut self) -> Token<'src> {
        self.lexer.peek_significant()
    }

    #[inline]
    fn check(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    #[inline]
    fn bump(&mut self) -> Token<'src> {
        self.lexer.bump()
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        Ok(self.lexer.consume(kind)?)
    }

    fn source_span(&self) -> Span {
        Span::from_range(0..self.lexer.source().len())
    }
}

/// Parse `source` into a formula and its syntax errors.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> ParseOutput {
    let output = Parser::new(source).parse();
    tracing::debug!(
        assignments = output.formula.assignments.len(),
        errors = output.errors.len(),
        "parsed"
    );
    output
}

#[cfg(test)]
mod tests;
