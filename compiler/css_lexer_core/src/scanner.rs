//! Hand-written CSS scanner producing [`Token`]s.
//!
//! One call to [`Scanner::next_token`] consumes one token by maximal munch.
//! The main dispatch looks at the byte under the cursor; because the cursor
//! only rests on character boundaries, that byte is either an ASCII character
//! or the lead byte of a non-ASCII one (which always starts an identifier).
//!
//! Every path consumes at least one character, except at end of input, where
//! the scanner keeps returning [`TokenKind::Eof`] without moving. Malformed
//! input becomes [`TokenKind::BadString`] or [`TokenKind::Unmatched`] tokens;
//! nothing here returns an error.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::tag::{Token, TokenKind};
use crate::SourceBuffer;

/// Form feed; CSS treats it as both whitespace and a newline.
const FORM_FEED: u8 = 0x0C;

/// Scanner over one source buffer.
///
/// Holds nothing but its cursor. Create one per input and drop it after the
/// end-of-input token.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Offset of the next token in Unicode scalar values.
    pub fn char_pos(&self) -> u32 {
        self.cursor.char_pos()
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with empty text once the source is exhausted, and on
    /// every call after that.
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Token::new(TokenKind::Eof, "");
        }

        let kind = match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' | FORM_FEED => self.whitespace(),
            quote @ (b'"' | b'\'') => self.string(quote),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b':' => self.single(TokenKind::Colon),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b'#' if is_ident_start_byte(self.cursor.peek()) => {
                self.prefixed_name(TokenKind::Hash)
            }
            b'@' if is_ident_start_byte(self.cursor.peek()) => {
                self.prefixed_name(TokenKind::AtKeyword)
            }
            b if is_ident_start_byte(b) => self.identifier(start),
            b'0'..=b'9' => self.number(),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(),
            _ => self.unmatched(),
        };

        let token = Token::new(kind, self.cursor.slice_from(start));
        if kind.is_soft_error() {
            debug!(kind = %kind, pos = start, text = ?token.text, "soft failure");
        } else {
            trace!(kind = %kind, pos = start, len = token.text.len(), "token");
        }
        token
    }

    // ─── Single characters ─────────────────────────────────────────────

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn unmatched(&mut self) -> TokenKind {
        self.cursor.advance_char();
        TokenKind::Unmatched
    }

    // ─── Whitespace ────────────────────────────────────────────────────

    fn whitespace(&mut self) -> TokenKind {
        self.cursor.eat_whitespace();
        TokenKind::Whitespace
    }

    // ─── Names ─────────────────────────────────────────────────────────

    /// `#name` or `@name`; the caller has checked that a name follows.
    fn prefixed_name(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance(); // consume '#' or '@'
        self.eat_ident();
        kind
    }

    /// Identifier, function name or `url`.
    ///
    /// The `(` is left for the next call. A name counts as a function when
    /// `(` is the character right after it or one character further on, so
    /// both `rgb(0)` and `rgb (0)` start a function.
    fn identifier(&mut self, start: u32) -> TokenKind {
        self.eat_ident();
        if self.cursor.current() != b'(' && self.cursor.peek() != b'(' {
            return TokenKind::Ident;
        }
        if self.cursor.slice_from(start).eq_ignore_ascii_case("url") {
            TokenKind::Url
        } else {
            TokenKind::Function
        }
    }

    #[inline]
    fn eat_ident(&mut self) {
        self.cursor.eat_while(is_ident_continue_byte);
    }

    // ─── Numbers ───────────────────────────────────────────────────────

    /// Number, percentage or dimension.
    ///
    /// Entered on a digit, or on `.` followed by a digit.
    fn number(&mut self) -> TokenKind {
        self.eat_digits();
        if self.cursor.current() == b'.' {
            self.cursor.advance(); // consume '.'
            self.eat_digits();
        }

        if self.cursor.current() == b'%' {
            self.cursor.advance();
            TokenKind::Percentage
        } else if is_ident_continue_byte(self.cursor.current()) {
            self.eat_ident();
            TokenKind::Dimension
        } else {
            TokenKind::Number
        }
    }

    #[inline]
    fn eat_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }

    // ─── Strings ───────────────────────────────────────────────────────

    /// String quoted with `quote`, which is under the cursor.
    ///
    /// A raw newline before the closing quote is consumed and turns the
    /// token into `BadString`. Reaching end of input yields a plain `String`.
    fn string(&mut self, quote: u8) -> TokenKind {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b'\\' => {
                    if self.cursor.is_eof_at(1) {
                        // Trailing backslash is left for the next token.
                        return TokenKind::String;
                    }
                    if is_newline_byte(self.cursor.peek()) {
                        self.cursor.advance_n(2); // escaped newline
                    } else {
                        self.consume_escape();
                        self.cursor.advance(); // backslash as plain content
                    }
                }
                b'\n' | b'\r' | FORM_FEED => {
                    self.cursor.advance();
                    return TokenKind::BadString;
                }
                0 => return TokenKind::String,
                _ => {
                    self.cursor.advance(); // closing quote
                    return TokenKind::String;
                }
            }
        }
    }

    /// Escape-sequence consumer. Consumes nothing.
    ///
    /// Hex escapes (`\26 B`) and escaped delimiters (`\"`) are not decoded:
    /// the caller then takes the backslash as ordinary content, so the
    /// escaped character is scanned as if it were unescaped.
    // TODO: decode hex and single-character escapes once a consumer needs
    // unescaped values; token text must stay verbatim either way.
    #[allow(
        clippy::unused_self,
        reason = "stub keeps the sub-scanner signature of the other consumers"
    )]
    fn consume_escape(&mut self) {}
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

/// Tokenize a whole buffer, excluding the final `Eof`.
///
/// For streaming access, construct a [`Scanner`] directly.
pub fn tokenize(buf: &SourceBuffer) -> Vec<Token<'_>> {
    Scanner::new(buf.cursor()).collect()
}

// ─── Classification ────────────────────────────────────────────────────

/// 256-entry table for identifier bytes: ASCII letters, digits, `_`, `-`,
/// and every byte of a non-ASCII character. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-' | 0x80..=0xFF
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue_byte(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Byte form of [`is_ident_start`], valid on character boundaries.
#[inline]
fn is_ident_start_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_newline_byte(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | FORM_FEED)
}

/// ASCII letter, `_`, or any character outside ASCII.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Identifier start, ASCII digit, or `-`.
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

/// Space, tab, line feed, carriage return, form feed.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Line feed, carriage return, form feed.
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0C')
}
