//! Driver errors.
//!
//! Tokenization itself cannot fail; these cover the process boundary only:
//! bad arguments, unreadable input, and a closed output stream.

use std::io;

/// Error that stops a `csslex` command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Missing or malformed command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Input file (or standard input) could not be read as UTF-8 text.
    #[error("{}", read_message(.path, .source))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing the report to standard output failed.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error. Soft failures found by `check`
    /// use status 1, so errors use 2.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

fn read_message(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
