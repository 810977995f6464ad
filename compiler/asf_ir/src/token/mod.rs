//! Tokens of the autoscale formula language.

mod kind;
mod triggers;

pub use kind::TokenKind;
pub use triggers::{TokenClass, TokenTriggers};

use std::fmt;

use super::Span;

/// A token borrowed from its source text.
///
/// Invariant: `text == &source[span.to_range()]`. The `End` token has an
/// empty span at `source.len()` and empty text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Token { kind, span, text }
    }

    /// Index of the first byte.
    #[inline]
    pub const fn start_index(&self) -> usize {
        self.span.start_index()
    }

    /// Index of the last byte (inclusive).
    #[inline]
    pub const fn end_index(&self) -> usize {
        self.span.end_index()
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Editor-facing summary of this token.
    pub fn info(&self) -> TokenInfo {
        TokenInfo {
            start_index: self.start_index(),
            end_index: self.end_index(),
            kind: self.kind,
            class: self.kind.class(),
            triggers: self.kind.triggers(),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

/// Owned token record handed to syntax coloring: `(start, end, kind, color, triggers)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenInfo {
    pub start_index: usize,
    pub end_index: usize,
    pub kind: TokenKind,
    pub class: TokenClass,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_triggers"))]
    pub triggers: TokenTriggers,
}

#[cfg(feature = "serde")]
fn serialize_triggers<S: serde::Serializer>(
    triggers: &TokenTriggers,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(triggers.bits())
}
