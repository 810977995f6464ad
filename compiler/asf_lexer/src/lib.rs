//! Tokenizer for autoscale formulas.
//!
//! Lexing is total: every input, including empty or malformed text, yields
//! a token list whose texts concatenate back to the input. Problems are
//! encoded as [`TokenKind::Unknown`](asf_ir::TokenKind::Unknown) tokens,
//! never as errors.
//!
//! - [`scan`]: the single token at an offset
//! - [`Lexer`]: `peek`/`skip`/`consume` protocol for the parser
//! - [`tokenize`]/[`tokenize_line`]: whole-text scans for editors and tools

mod cursor;
mod lexer;
mod scanner;

use asf_ir::{Token, TokenInfo};

pub use lexer::{describe, Lexer, Tokens, UnexpectedToken};
pub use scanner::scan;

/// All tokens of `source` in order, trivia included, without `End`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Lexer::new(source).tokens().collect();
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

/// Coloring records for one line of text, offsets relative to the line.
pub fn tokenize_line(line: &str) -> Vec<TokenInfo> {
    Lexer::new(line).tokens().map(|token| token.info()).collect()
}
