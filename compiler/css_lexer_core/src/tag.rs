//! Token kinds and the token record.
//!
//! [`TokenKind`] is a one-byte tag. Discriminants are grouped into ranges so
//! a kind's family is visible from its value:
//!
//! | Range   | Family                               |
//! |---------|--------------------------------------|
//! | 0–15    | names and numeric values             |
//! | 32–47   | punctuation                          |
//! | 64–79   | trivia                               |
//! | 80–95   | reserved comment-delimiter markers   |
//! | 240–254 | soft failures                        |
//! | 255     | end of input                         |

use std::fmt;

/// Kind of a CSS token.
///
/// `Comment`, `At`, `Cdo` and `Cdc` are part of the vocabulary but the
/// scanner never produces them: comments and `<!--`/`-->` currently scan as
/// their component characters, and a lone `@` is [`Unmatched`](Self::Unmatched).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Names & Values (0-15) ===
    /// `color`, `-webkit-box`, `é`
    Ident = 0,
    /// Identifier followed by `(`: `rgba`, `calc`
    Function = 1,
    /// `@media`
    AtKeyword = 2,
    /// `#fff`, `#main`
    Hash = 3,
    /// `"text"`, `'text'`, or a string cut off by end of input
    String = 4,
    /// `url` followed by `(`
    Url = 5,
    /// `5`, `5.2`, `.25`
    Number = 6,
    /// `20px`, `1.5em`
    Dimension = 7,
    /// `100%`
    Percentage = 8,

    // === Punctuation (32-47) ===
    /// `(`
    LeftParen = 32,
    /// `)`
    RightParen = 33,
    /// `{`
    LeftBrace = 34,
    /// `}`
    RightBrace = 35,
    /// `:`
    Colon = 36,
    /// `;`
    Semicolon = 37,
    /// `,`
    Comma = 38,
    /// `@` (reserved)
    At = 39,

    // === Trivia (64-79) ===
    /// Run of spaces, tabs, newlines, carriage returns and form feeds
    Whitespace = 64,
    /// `/* ... */` (reserved)
    Comment = 65,

    // === Reserved markers (80-95) ===
    /// `<!--` (reserved)
    Cdo = 80,
    /// `-->` (reserved)
    Cdc = 81,

    // === Soft failures (240-254) ===
    /// String broken by a raw newline before its closing quote
    BadString = 240,
    /// Single character the dispatch table does not classify
    Unmatched = 241,

    // === Control ===
    /// End of input; empty text
    Eof = 255,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 24] = [
        TokenKind::Ident,
        TokenKind::Function,
        TokenKind::AtKeyword,
        TokenKind::Hash,
        TokenKind::String,
        TokenKind::Url,
        TokenKind::Number,
        TokenKind::Dimension,
        TokenKind::Percentage,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::At,
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::Cdo,
        TokenKind::Cdc,
        TokenKind::BadString,
        TokenKind::Unmatched,
        TokenKind::Eof,
    ];

    /// Stable name of the kind.
    ///
    /// Highlighters key their style tables on these names, so they must not
    /// change between releases.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "Ident",
            TokenKind::Function => "Function",
            TokenKind::AtKeyword => "AtKeyword",
            TokenKind::Hash => "Hash",
            TokenKind::String => "String",
            TokenKind::Url => "Url",
            TokenKind::Number => "Number",
            TokenKind::Dimension => "Dimension",
            TokenKind::Percentage => "Percentage",
            TokenKind::LeftParen => "LeftParenthesis",
            TokenKind::RightParen => "RightParenthesis",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::At => "At",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Comment => "Comment",
            TokenKind::Cdo => "CDO",
            TokenKind::Cdc => "CDC",
            TokenKind::BadString => "BadString",
            TokenKind::Unmatched => "Unmatched",
            TokenKind::Eof => "EOF",
        }
    }

    /// Fixed source text for kinds that always cover the same characters.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Colon => Some(":"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Comma => Some(","),
            TokenKind::At => Some("@"),
            TokenKind::Cdo => Some("<!--"),
            TokenKind::Cdc => Some("-->"),
            TokenKind::Eof => Some(""),
            _ => None,
        }
    }

    /// Whitespace and comments: kinds that carry no meaning of their own.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// `BadString` and `Unmatched`: malformed input that was still tokenized.
    pub fn is_soft_error(self) -> bool {
        matches!(self, TokenKind::BadString | TokenKind::Unmatched)
    }

    /// Kinds in the vocabulary that the scanner never produces.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::At | TokenKind::Comment | TokenKind::Cdo | TokenKind::Cdc
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind and the exact source text it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Verbatim slice of the input. Never normalized or unescaped.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for the zero-length end-of-input token.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests;
