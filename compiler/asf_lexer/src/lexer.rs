//! Cursor-style lexer driven by the parser.
//!
//! The lexer keeps only an offset. `peek` re-scans from it, `skip` moves
//! past the last peeked token, and `consume` skips trivia and asserts the
//! kind of the next significant token.

use asf_ir::{Token, TokenKind};

use crate::scanner::scan;

/// `consume` found a different token than the one required.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("expected {}, found {}", .expected.display_name(), describe(.found))]
pub struct UnexpectedToken<'src> {
    pub expected: TokenKind,
    pub found: Token<'src>,
}

/// How a token is named in messages: its text in backticks, or the kind
/// name when there is no text.
pub fn describe(token: &Token<'_>) -> String {
    if token.text.is_empty() {
        token.kind.display_name().to_string()
    } else {
        format!("`{}`", token.text.escape_debug())
    }
}

#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    offset: usize,
    peeked: Option<Token<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            offset: 0,
            peeked: None,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The token at the current offset, trivia included. Does not advance.
    pub fn peek(&mut self) -> Token<'src> {
        if let Some(token) = self.peeked {
            return token;
        }
        let token = scan(self.source, self.offset);
        self.peeked = Some(token);
        token
    }

    /// Advance past the token `peek` returns. A no-op at `End`.
    pub fn skip(&mut self) {
        let token = self.peek();
        self.offset = token.span.end as usize;
        self.peeked = None;
    }

    /// Advance past whitespace and comments.
    pub fn skip_trivia(&mut self) {
        while self.peek().is_trivia() {
            self.skip();
        }
    }

    /// The next significant token, after skipping trivia.
    pub fn peek_significant(&mut self) -> Token<'src> {
        self.skip_trivia();
        self.peek()
    }

    /// Skip trivia and take the next token if it has kind `expected`.
    /// On mismatch nothing past the trivia is consumed.
    pub fn consume(&mut self, expected: TokenKind) -> Result<Token<'src>, UnexpectedToken<'src>> {
        let found = self.peek_significant();
        if found.kind == expected {
            self.skip();
            Ok(found)
        } else {
            Err(UnexpectedToken { expected, found })
        }
    }

    /// Take the next significant token if it has kind `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        self.consume(kind).ok()
    }

    /// Take the next significant token, whatever it is.
    pub fn bump(&mut self) -> Token<'src> {
        let token = self.peek_significant();
        self.skip();
        token
    }

    /// Every remaining token in order, trivia included, `End` excluded.
    pub fn tokens(self) -> Tokens<'src> {
        Tokens { lexer: self }
    }
}

/// Iterator returned by [`Lexer::tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.peek();
        if token.kind == TokenKind::End {
            return None;
        }
        self.lexer.skip();
        Some(token)
    }
}
