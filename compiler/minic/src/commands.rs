//! Command handlers for the `mini` CLI.

use std::io::{self, Write};

use mini_lexer::{ScanError, Scanner};
use tracing::debug;

/// Failure while dumping tokens.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

/// Scan `source` and write one `<kind, lexeme>` line per token to `out`.
///
/// Stops at the first [`ScanError`]. Lines already written stay written.
pub fn lex_source(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let mut scanner = Scanner::new(source);
    let mut count = 0usize;
    while scanner.next() {
        writeln!(out, "{}", scanner.curr()?)?;
        count += 1;
    }
    debug!(
        tokens = count,
        warnings = scanner.warnings().len(),
        "lex finished"
    );
    Ok(())
}

/// Read a source file, describing the failure in user terms.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
