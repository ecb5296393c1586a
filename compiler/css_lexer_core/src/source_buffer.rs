//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer keeps a NUL sentinel after the source text, followed by NUL
//! padding up to the next 64-byte boundary. The scanner can therefore look
//! one or two bytes past the current position at any point without checking
//! the length first.
//!
//! # Encoding Issues
//!
//! Construction also records a few advisory [`EncodingIssue`]s:
//! - a UTF-8 byte-order mark at the start of the text
//! - NUL characters inside the text
//!
//! They never influence tokenization (a BOM scans as an identifier start, an
//! interior NUL as an unmatched character). Drivers decide whether to warn.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// NUL bytes guaranteed after the source: the sentinel plus two bytes of
/// lookahead for `peek()` and `peek2()` at EOF.
const TAIL: usize = 3;

/// Sentinel-terminated copy of a style sheet.
///
/// # Layout
///
/// ```text
/// [source text..., '\0', '\0' padding...]
///  ^               ^     ^
///  0               |     rounded up to 64-byte boundary
///             source_len (sentinel)
/// ```
///
/// The buffer is stored as a `String`: NUL is a valid one-byte UTF-8
/// character, so every prefix ending on a source character boundary is a
/// valid `&str` and token text can be sliced out without re-validation.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: source text, NUL sentinel, NUL padding.
    buf: String,
    /// Length of the source text in bytes (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What was found.
    pub kind: EncodingIssueKind,
    /// Byte position in the source.
    pub pos: u32,
    /// Byte length of the offending sequence.
    pub len: u32,
}

/// Kind of [`EncodingIssue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 byte-order mark (`EF BB BF`) at the start of the text.
    Utf8Bom,
    /// NUL character (U+0000) inside the text.
    InteriorNull,
}

impl EncodingIssueKind {
    /// Human-readable description, used by drivers in warnings.
    pub fn describe(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "byte-order mark at start of input",
            EncodingIssueKind::InteriorNull => "NUL character in input",
        }
    }
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes saturate the recorded length;
    /// style sheets of that size are not a supported input.
    pub fn new(source: &str) -> Self {
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + TAIL bytes).
        let padded_len = (source_len + TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source.as_bytes(), &mut encoding_issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// The source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// The source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// The whole buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source text in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source text is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }

    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
