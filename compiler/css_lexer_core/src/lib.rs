//! Low-level CSS tokenizer.
//!
//! Converts style-sheet source text into a stream of [`Token`]s, each a
//! [`TokenKind`] plus the exact slice of source it covers. The scanner is
//! total: it never fails, it always makes progress, and concatenating every
//! token's text reproduces the input byte for byte.
//!
//! # Usage
//!
//! ```
//! use css_lexer_core::{Scanner, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("color: red;");
//! let mut scanner = Scanner::new(buf.cursor());
//! let first = scanner.next_token();
//! assert_eq!(first.kind, TokenKind::Ident);
//! assert_eq!(first.text, "color");
//! ```
//!
//! # Tracing
//!
//! Soft failures (`BadString`, `Unmatched`) are reported at `debug` level and
//! every produced token at `trace` level, under the `css_lexer_core` target.
//! The crate never installs a subscriber itself.

mod cursor;
mod scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use scanner::{
    is_ident_continue, is_ident_start, is_newline, is_whitespace, tokenize, Scanner,
};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{Token, TokenKind};
