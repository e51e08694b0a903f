//! Bounds-checked byte cursor over a source string.
//!
//! All classification in the scanner is ASCII-only, so the cursor walks
//! bytes. Non-ASCII input is only ever skipped as a whole UTF-8 scalar
//! (see [`Cursor::eat_char`]), which keeps `pos` on a character boundary
//! at all times.

/// Forward-only cursor over source text.
///
/// The cursor is [`Copy`], so a scanner can snapshot it before trying a
/// longer match and fall back to the snapshot on failure.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Source text of length `len` starting at the current position.
    ///
    /// Returns `None` if the range runs past EOF or would split a UTF-8
    /// scalar. Never advances.
    pub fn lookahead(&self, len: usize) -> Option<&'a str> {
        self.source.get(self.pos..self.pos + len)
    }

    /// Source text from `start` to the current position.
    ///
    /// # Contract
    ///
    /// `start` must be a position this cursor has previously occupied.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        &self.source[start..self.pos]
    }

    /// Advance while `pred` returns `true` for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Consume up to `max` consecutive copies of `byte` and return how
    /// many were consumed.
    pub fn eat_run(&mut self, byte: u8, max: usize) -> usize {
        let mut count = 0;
        while count < max && self.current() == Some(byte) {
            self.pos += 1;
            count += 1;
        }
        count
    }

    /// Advance to the next occurrence of `byte`, leaving the cursor on it.
    ///
    /// Moves to EOF if `byte` does not occur again.
    pub fn eat_until(&mut self, byte: u8) {
        let rest = &self.source.as_bytes()[self.pos..];
        match memchr::memchr(byte, rest) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Consume the whole character at the current position and return it.
    ///
    /// Returns `None` at EOF.
    pub fn eat_char(&mut self) -> Option<char> {
        let ch = self.source.get(self.pos..)?.chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}

#[cfg(test)]
mod tests;
