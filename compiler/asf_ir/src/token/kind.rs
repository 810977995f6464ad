//! Token kinds and their editor presentation.

use super::triggers::{TokenClass, TokenTriggers};

/// Kind of a lexed token.
///
/// Payload-free: the token text lives on [`Token`](super::Token), so kinds
/// stay `Copy` and fit the recovery bitsets in the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Trivia
    Whitespace,
    LineComment,

    // Words and literals
    Identifier,
    Keyword,
    Number,
    String,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    AmpersandAmpersand,
    PipePipe,
    Question,
    Colon,

    // Delimiters
    LeftParen,
    RightParen,
    Comma,
    Dot,
    Semicolon,

    /// Invalid character or unterminated string.
    Unknown,
    /// Stream exhaustion. Never covers source bytes.
    End,
}

impl TokenKind {
    /// Number of token kinds; bounds the parser's `u64` recovery sets.
    pub const COUNT: usize = 29;

    /// Dense index of this kind, used for bitset membership.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Whitespace and comments, skipped transparently by the parser.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::LineComment)
    }

    /// Single-character delimiters and operators resolved by direct lookup.
    ///
    /// Characters that may start a two-character operator (`<`, `>`, `=`,
    /// `!`, `&`, `|`) and `/` are handled by the scanner before this table.
    pub const fn from_single_byte(byte: u8) -> Option<TokenKind> {
        Some(match byte {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'?' => TokenKind::Question,
            b':' => TokenKind::Colon,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b';' => TokenKind::Semicolon,
            _ => return None,
        })
    }

    /// Human-readable name used in parse error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Bang => "`!`",
            TokenKind::BangEqual => "`!=`",
            TokenKind::Equal => "`=`",
            TokenKind::EqualEqual => "`==`",
            TokenKind::Less => "`<`",
            TokenKind::LessEqual => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEqual => "`>=`",
            TokenKind::AmpersandAmpersand => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::Question => "`?`",
            TokenKind::Colon => "`:`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Unknown => "unknown token",
            TokenKind::End => "end of input",
        }
    }

    /// Display-color category for syntax coloring.
    pub const fn class(self) -> TokenClass {
        match self {
            TokenKind::Whitespace | TokenKind::End => TokenClass::Text,
            TokenKind::LineComment => TokenClass::Comment,
            TokenKind::Identifier => TokenClass::Identifier,
            TokenKind::Keyword => TokenClass::Keyword,
            TokenKind::Number => TokenClass::Number,
            TokenKind::String => TokenClass::String,
            TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Comma
            | TokenKind::Dot
            | TokenKind::Semicolon => TokenClass::Delimiter,
            TokenKind::Unknown => TokenClass::Error,
            _ => TokenClass::Operator,
        }
    }

    /// Editor triggers fired when the caret passes this token.
    pub const fn triggers(self) -> TokenTriggers {
        match self {
            TokenKind::Dot => TokenTriggers::MEMBER_SELECT,
            TokenKind::LeftParen => TokenTriggers::MATCH_BRACES.union(TokenTriggers::PARAMETER_START),
            TokenKind::RightParen => TokenTriggers::MATCH_BRACES.union(TokenTriggers::PARAMETER_END),
            TokenKind::Comma => TokenTriggers::PARAMETER_NEXT,
            _ => TokenTriggers::empty(),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
