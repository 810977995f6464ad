//! Presentation metadata consumed by syntax coloring.

use bitflags::bitflags;

/// Display-color category of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenClass {
    Text,
    Comment,
    Identifier,
    Keyword,
    Number,
    String,
    Operator,
    Delimiter,
    Error,
}

bitflags! {
    /// Editor actions a token can trigger.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenTriggers: u8 {
        /// `.` after a sampling variable opens the method list.
        const MEMBER_SELECT = 1 << 0;
        /// Parentheses highlight their partner.
        const MATCH_BRACES = 1 << 1;
        const PARAMETER_START = 1 << 2;
        const PARAMETER_NEXT = 1 << 3;
        const PARAMETER_END = 1 << 4;
    }
}
