//! Command handlers for the `csslex` CLI.
//!
//! Each submodule implements one command. Input reading and line/column
//! tracking are shared and live here.

use std::io::Read;

use tracing::debug;

use crate::CliError;

mod check;
mod lex;

pub use check::{check_source, CheckReport, EncodingFinding, TokenFinding};
pub use lex::{lex_source, LexOptions};

/// Read a style sheet from `path`, or from standard input when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, CliError> {
    let read = if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };

    let content = read.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!(path, bytes = content.len(), "read input");
    Ok(content)
}

/// 1-based line and column; columns count Unicode scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Tracks line and column while walking token text in order.
///
/// Line breaks are `\n`, `\r`, `\r\n` (one break) and form feed, matching the
/// characters the scanner treats as newlines. A `\r\n` pair split across two
/// tokens still counts once.
#[derive(Clone, Debug)]
pub(crate) struct LineTracker {
    line: u32,
    column: u32,
    after_cr: bool,
}

impl LineTracker {
    pub(crate) fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            after_cr: false,
        }
    }

    pub(crate) fn position(&self) -> LineCol {
        LineCol {
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn advance(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' if self.after_cr => {}
                '\n' | '\r' | '\x0C' => {
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
            self.after_cr = c == '\r';
        }
    }
}
