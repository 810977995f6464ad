use asf_ir::{Token, TokenKind};

use super::BraceMatch;

/// Pair `(`/`)` tokens with a stack, ignoring everything else.
///
/// A `)` with nothing open and a `(` never closed produce no pair. Pairs are
/// emitted when they close, so inner pairs precede outer ones.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn match_tokens(tokens: &[Token<'_>]) -> Vec<BraceMatch> {
    let mut open = Vec::new();
    let mut matches = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open.push(token.start_index()),
            TokenKind::RightParen => {
                if let Some(left) = open.pop() {
                    matches.push(BraceMatch::new(left, token.start_index()));
                }
            }
            _ => {}
        }
    }
    matches
}
