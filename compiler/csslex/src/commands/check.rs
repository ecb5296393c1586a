//! `csslex check`: report soft failures and verify lossless reconstruction.

use std::io::{self, Write};

use css_lexer_core::{EncodingIssueKind, Scanner, SourceBuffer, TokenKind};
use tracing::{debug, warn};

use super::{LineCol, LineTracker};

/// A `BadString` or `Unmatched` token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenFinding {
    pub kind: TokenKind,
    /// Byte offset of the token.
    pub offset: u32,
    pub at: LineCol,
    pub text: String,
}

/// An advisory encoding issue from the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingFinding {
    pub kind: EncodingIssueKind,
    pub offset: u32,
}

/// Result of checking one input.
#[derive(Clone, Debug, Default)]
pub struct CheckReport {
    /// Tokens produced, excluding end of input.
    pub tokens: usize,
    pub findings: Vec<TokenFinding>,
    pub encoding: Vec<EncodingFinding>,
    /// Whether the concatenated token text equals the input.
    pub lossless: bool,
}

impl CheckReport {
    /// No soft failures and an exact round trip. Encoding issues are
    /// warnings and do not make a report dirty.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.lossless
    }

    /// Write the report in `path:line:column: kind text` form.
    pub fn write_to(&self, path: &str, out: &mut impl Write) -> io::Result<()> {
        for issue in &self.encoding {
            writeln!(
                out,
                "{path}: warning: {} (byte {})",
                issue.kind.describe(),
                issue.offset
            )?;
        }
        for finding in &self.findings {
            writeln!(
                out,
                "{path}:{}:{}: {} {:?}",
                finding.at.line,
                finding.at.column,
                finding.kind.name(),
                finding.text
            )?;
        }
        if !self.lossless {
            writeln!(out, "{path}: error: token text does not reproduce the input")?;
        }
        writeln!(
            out,
            "{path}: {} tokens, {} soft failures",
            self.tokens,
            self.findings.len()
        )
    }
}

/// Tokenize `source` and collect its soft failures.
pub fn check_source(source: &str) -> CheckReport {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut lines = LineTracker::new();
    let mut rebuilt = String::with_capacity(source.len());
    let mut report = CheckReport::default();

    loop {
        let offset = scanner.pos();
        let tok = scanner.next_token();
        if tok.is_eof() {
            break;
        }
        if tok.kind.is_soft_error() {
            report.findings.push(TokenFinding {
                kind: tok.kind,
                offset,
                at: lines.position(),
                text: tok.text.to_owned(),
            });
        }
        lines.advance(tok.text);
        rebuilt.push_str(tok.text);
        report.tokens += 1;
    }

    report.encoding = buf
        .encoding_issues()
        .iter()
        .map(|issue| EncodingFinding {
            kind: issue.kind,
            offset: issue.pos,
        })
        .collect();
    report.lossless = rebuilt == source;

    if !report.lossless {
        warn!(
            input_len = source.len(),
            rebuilt_len = rebuilt.len(),
            "token text does not reproduce the input"
        );
    }
    debug!(
        tokens = report.tokens,
        findings = report.findings.len(),
        encoding_issues = report.encoding.len(),
        "check finished"
    );
    report
}
