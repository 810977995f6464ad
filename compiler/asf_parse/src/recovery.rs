//! Token sets and statement-level resynchronization.

use asf_ir::TokenKind;
use asf_lexer::Lexer;

/// Set of token kinds as a bitset over
/// [`TokenKind::discriminant_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

const _: () = assert!(TokenKind::COUNT <= 64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Where a statement may end.
pub const STATEMENT_END: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::End);

/// Skip significant tokens until one in `recovery` (or `End`) is next.
///
/// Returns the number of tokens skipped.
pub fn synchronize(lexer: &mut Lexer<'_>, recovery: TokenSet) -> usize {
    let mut skipped = 0;
    loop {
        let token = lexer.peek_significant();
        if token.kind == TokenKind::End || recovery.contains(token.kind) {
            return skipped;
        }
        lexer.skip();
        skipped += 1;
    }
}
