//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor reads bytes, but every public movement either steps over ASCII
//! or over a whole UTF-8 sequence, so its position is always a character
//! boundary of the source. EOF is positional: the cursor is at EOF once
//! `pos >= source_len`. A NUL byte before that point is an interior NUL
//! character, not the end.

/// Returns the earliest of two optional offsets.
///
/// `memchr3` handles at most three needles; string scanning needs five.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cheap, copyable cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// # Invariant
///
/// `buf` holds the source text followed by at least three NUL bytes, so
/// [`peek`](Self::peek) and [`peek2`](Self::peek2) are valid at every
/// position up to and including EOF.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source text plus sentinel and padding.
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the source text in bytes.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            source_len as usize + 2 < buf.len(),
            "lookahead padding must follow the source"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.as_bytes()[pos as usize]
    }

    /// The byte under the cursor; `0x00` at EOF and on interior NULs.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// The byte one position ahead.
    ///
    /// When the current byte is ASCII this is the first byte of the next
    /// character.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// The byte two positions ahead.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Advance past one ASCII byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance past `n` ASCII bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Number of bytes in the UTF-8 sequence introduced by `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full character, whatever its encoded width.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` once the whole source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Returns `true` if the byte `offset` positions ahead is past the source.
    #[inline]
    pub fn is_eof_at(&self, offset: u32) -> bool {
        self.pos + offset >= self.source_len
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current offset counted in Unicode scalar values.
    ///
    /// Walks the consumed prefix, so this is linear in the position.
    pub fn char_pos(&self) -> u32 {
        let count = self.slice_from_start().chars().count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn slice_from_start(&self) -> &'a str {
        self.slice(0, self.pos.min(self.source_len))
    }

    /// Length of the source text in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` lies within the source and on character boundaries,
    /// which holds for any pair of positions the cursor itself produced.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must be `false` so the sentinel stops the loop. A predicate
    /// that accepts a lead byte `>= 0x80` must also accept continuation bytes,
    /// otherwise the cursor would stop inside a character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past a run of CSS whitespace: space, tab, `\n`, `\r`, form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t' | b'\n' | b'\r' | 0x0C) {
            self.pos += 1;
        }
    }

    /// Advance past ordinary string content to the next byte that matters
    /// inside a string quoted with `quote`. Returns that byte, or `0` at EOF.
    ///
    /// Interesting bytes: `quote`, `\`, `\n`, `\r`, form feed. Interior NULs
    /// are ordinary content and are skipped.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let end = self.source_len as usize;
        let start = (self.pos as usize).min(end);
        let remaining = &self.buf.as_bytes()[start..end];
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let secondary = memchr::memchr2(b'\r', 0x0C, remaining);

        if let Some(offset) = earliest_of(primary, secondary) {
            self.pos = start as u32 + offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }
}
