//! Stateless scanner: the token starting at a given offset.
//!
//! Scanning never fails. Characters outside the language and the opening
//! quote of an unterminated string become [`TokenKind::Unknown`]. At end of input the result is an
//! empty [`TokenKind::End`] token, however many times it is requested.

use asf_ir::declarations::is_deallocation_keyword;
use asf_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;

/// Scan the token that starts at byte `offset` of `source`.
///
/// `offset` must be a character boundary; offsets past the end yield `End`.
pub fn scan(source: &str, offset: usize) -> Token<'_> {
    let mut cursor = Cursor::new(source, offset);
    let start = cursor.pos();
    let kind = next_kind(&mut cursor);
    let end = cursor.pos();
    let text = source.get(start..end).unwrap_or_default();
    Token::new(kind, Span::from_range(start..end), text)
}

fn next_kind(cursor: &mut Cursor<'_>) -> TokenKind {
    let Some(first) = cursor.current_char() else {
        return TokenKind::End;
    };

    match first {
        c if c.is_whitespace() => {
            cursor.eat_while(char::is_whitespace);
            TokenKind::Whitespace
        }
        c if is_identifier_start(c) => identifier(cursor),
        '0'..='9' => number(cursor),
        '"' => string(cursor),
        '/' => slash_or_comment(cursor),
        '&' => doubled(cursor, b'&', TokenKind::AmpersandAmpersand),
        '|' => doubled(cursor, b'|', TokenKind::PipePipe),
        '<' => with_equal(cursor, TokenKind::Less, TokenKind::LessEqual),
        '>' => with_equal(cursor, TokenKind::Greater, TokenKind::GreaterEqual),
        '=' => with_equal(cursor, TokenKind::Equal, TokenKind::EqualEqual),
        '!' => with_equal(cursor, TokenKind::Bang, TokenKind::BangEqual),
        c => {
            cursor.advance_char();
            u8::try_from(c)
                .ok()
                .and_then(TokenKind::from_single_byte)
                .unwrap_or(TokenKind::Unknown)
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn identifier(cursor: &mut Cursor<'_>) -> TokenKind {
    let start = *cursor;
    cursor.advance_char();
    cursor.eat_while(is_identifier_continue);
    let text = start.slice_to(cursor);
    if is_deallocation_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

/// Digits, optionally `.` and at least one more digit.
fn number(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.eat_while(|c| c.is_ascii_digit());
    if cursor.current() == b'.' && cursor.peek().is_ascii_digit() {
        cursor.advance();
        cursor.eat_while(|c| c.is_ascii_digit());
    }
    TokenKind::Number
}

/// `"..."` with no escapes. Without a closing quote only the opening `"`
/// is taken, as an unknown token, and scanning resumes right after it.
fn string(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.advance();
    if cursor.eat_until(b'"') {
        cursor.advance();
        TokenKind::String
    } else {
        TokenKind::Unknown
    }
}

fn slash_or_comment(cursor: &mut Cursor<'_>) -> TokenKind {
    if cursor.peek() == b'/' {
        cursor.eat_through_newline();
        TokenKind::LineComment
    } else {
        cursor.advance();
        TokenKind::Slash
    }
}

/// `&&` and `||` only exist as pairs; a lone `&` or `|` is unknown.
fn doubled(cursor: &mut Cursor<'_>, byte: u8, kind: TokenKind) -> TokenKind {
    cursor.advance();
    if cursor.current() == byte {
        cursor.advance();
        kind
    } else {
        TokenKind::Unknown
    }
}

fn with_equal(cursor: &mut Cursor<'_>, single: TokenKind, double: TokenKind) -> TokenKind {
    cursor.advance();
    if cursor.current() == b'=' {
        cursor.advance();
        double
    } else {
        single
    }
}
