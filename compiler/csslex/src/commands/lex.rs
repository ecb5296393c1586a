//! `csslex lex`: print the token stream.

use std::io::{self, Write};

use css_lexer_core::{Scanner, SourceBuffer};
use tracing::debug;

/// Options for [`lex_source`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LexOptions {
    /// Leave whitespace (and other trivia) out of the listing.
    pub skip_trivia: bool,
}

/// Write one line per token: byte offset, kind name, and the text as a Rust
/// debug string so whitespace and control characters stay visible.
///
/// Returns the number of tokens written.
pub fn lex_source(source: &str, options: LexOptions, out: &mut impl Write) -> io::Result<usize> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut written = 0;

    loop {
        let offset = scanner.pos();
        let tok = scanner.next_token();
        if tok.is_eof() {
            break;
        }
        if options.skip_trivia && tok.kind.is_trivia() {
            continue;
        }
        writeln!(out, "{offset:>6} {:<16} {:?}", tok.kind.name(), tok.text)?;
        written += 1;
    }

    debug!(tokens = written, skip_trivia = options.skip_trivia, "lex finished");
    Ok(written)
}
