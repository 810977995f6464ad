//! Parse errors.
//!
//! A `ParseError` carries a message naming what was expected and what was
//! found, plus an optional `ErrorContext` for "while parsing X" notes.

use std::fmt;

use asf_diagnostic::{Diagnostic, ErrorCode};
use asf_ir::{Span, Token, TokenKind};
use asf_lexer::{describe, UnexpectedToken};

/// The construct being parsed when an error occurred.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorContext {
    Assignment,
    Expression,
    ArgumentList,
    MethodInvocation,
    Parenthesized,
    Ternary,
}

impl ErrorContext {
    /// Phrase for "while parsing {description}".
    pub const fn description(self) -> &'static str {
        match self {
            ErrorContext::Assignment => "an assignment",
            ErrorContext::Expression => "an expression",
            ErrorContext::ArgumentList => "an argument list",
            ErrorContext::MethodInvocation => "a method invocation",
            ErrorContext::Parenthesized => "a parenthesized expression",
            ErrorContext::Ternary => "a conditional expression",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub span: Span,
    pub message: String,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        ParseError {
            span,
            message: message.into(),
            context: None,
        }
    }

    /// "expected {what}, found {token}" at the found token.
    #[cold]
    pub fn expected(what: &str, found: &Token<'_>) -> Self {
        ParseError::new(found.span, format!("expected {what}, found {}", describe(found)))
    }

    /// Like [`ParseError::expected`], listing the alternative kinds.
    #[cold]
    pub fn expected_one_of(kinds: &[TokenKind], found: &Token<'_>) -> Self {
        let names: Vec<&str> = kinds.iter().map(|kind| kind.display_name()).collect();
        let what = match names.as_slice() {
            [] => "something else".to_string(),
            [one] => (*one).to_string(),
            [init @ .., last] => format!("{} or {last}", init.join(", ")),
        };
        ParseError::expected(&what, found)
    }

    /// Attach a context unless a more specific one is already set.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::new(ErrorCode::ParseError, self.message.clone(), self.span);
        match self.context {
            Some(context) => diagnostic.with_note(format!("while parsing {}", context.description())),
            None => diagnostic,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(context) = self.context {
            write!(f, " (while parsing {})", context.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<UnexpectedToken<'_>> for ParseError {
    fn from(error: UnexpectedToken<'_>) -> Self {
        ParseError::new(error.found.span, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn caret() -> Token<'static> {
        Token::new(TokenKind::Unknown, Span::new(48, 49), "^")
    }

    #[test]
    fn test_expected_one_of_message() {
        let error = ParseError::expected_one_of(&[TokenKind::Semicolon, TokenKind::End], &caret());
        assert_eq!(error.message, "expected `;` or end of input, found `^`");
        assert_eq!(error.span, Span::new(48, 49));
    }

    #[test]
    fn test_expected_three_kinds() {
        let error = ParseError::expected_one_of(
            &[TokenKind::Comma, TokenKind::RightParen, TokenKind::End],
            &caret(),
        );
        assert_eq!(error.message, "expected `,`, `)` or end of input, found `^`");
    }

    #[test]
    fn test_found_end_uses_kind_name() {
        let end = Token::new(TokenKind::End, Span::point(7), "");
        let error = ParseError::expected("expression", &end);
        assert_eq!(error.message, "expected expression, found end of input");
    }

    #[test]
    fn test_from_unexpected_token() {
        let error = ParseError::from(UnexpectedToken {
            expected: TokenKind::Equal,
            found: caret(),
        });
        assert_eq!(error.message, "expected `=`, found `^`");
        assert_eq!(error.span, Span::new(48, 49));
    }

    #[test]
    fn test_context_is_kept_innermost() {
        let error = ParseError::new(Span::point(0), "x")
            .in_context(ErrorContext::ArgumentList)
            .in_context(ErrorContext::Assignment);
        assert_eq!(error.context, Some(ErrorContext::ArgumentList));
        assert_eq!(error.to_string(), "x (while parsing an argument list)");
    }

    #[test]
    fn test_to_diagnostic() {
        let diagnostic = ParseError::new(Span::new(3, 4), "bad")
            .in_context(ErrorContext::Parenthesized)
            .to_diagnostic();
        assert_eq!(diagnostic.code, ErrorCode::ParseError);
        assert_eq!(diagnostic.message, "bad");
        assert_eq!(diagnostic.notes, vec!["while parsing a parenthesized expression".to_string()]);
    }
}
