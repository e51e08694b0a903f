//! Library half of the `mini` command-line harness.
//!
//! The binary only parses arguments; everything testable lives here.

pub mod commands;

use std::io::IsTerminal;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output.
///
/// Call this once at startup. Safe to call multiple times.
/// Illegal-character warnings are shown by default; override with
/// `RUST_LOG`, e.g. `RUST_LOG=mini_lexer=trace` to see every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
