//! Byte cursor over the source text.
//!
//! Reads past the end yield `0`, so scanning loops terminate without explicit
//! bounds checks as long as their predicates reject `0`. The cursor is
//! `Copy`, which makes checkpointing free.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, pos: usize) -> Self {
        Cursor {
            source,
            pos: pos.min(source.len()),
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Byte at the cursor, `0` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the cursor, `0` past end of input.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Full character at the cursor.
    #[inline]
    pub(crate) fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.source.len());
    }

    /// Advance past one full character.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.pos = (self.pos + width).min(self.source.len());
    }

    /// Advance while `pred` holds for the current character.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance past the next `\n`, or to end of input if there is none.
    pub(crate) fn eat_through_newline(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        self.pos = match memchr::memchr(b'\n', rest) {
            Some(offset) => self.pos + offset + 1,
            None => self.source.len(),
        };
    }

    /// Text between this checkpoint and a later cursor over the same source.
    pub(crate) fn slice_to(&self, later: &Cursor<'a>) -> &'a str {
        self.source.get(self.pos..later.pos).unwrap_or_default()
    }

    /// Advance to the next `byte`. Returns `false` without moving if there
    /// is none.
    pub(crate) fn eat_until(&mut self, byte: u8) -> bool {
        let rest = &self.source.as_bytes()[self.pos..];
        match memchr::memchr(byte, rest) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => false,
        }
    }
}
