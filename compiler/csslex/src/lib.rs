//! Command-line driver for `css_lexer_core`.
//!
//! The binary is a thin argument parser over [`commands`]; everything that
//! touches tokens lives here so it can be tested without spawning processes.
//!
//! # Tracing
//!
//! Logging is off unless `RUST_LOG` is set:
//! - `RUST_LOG=csslex=debug`: command-level events (input size, findings).
//! - `RUST_LOG=css_lexer_core=debug`: every soft-failure token.
//! - `RUST_LOG=css_lexer_core=trace`: every token (very verbose).

use std::sync::Once;

pub mod commands;
mod error;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Call this once at startup. Safe to call multiple times. Does nothing when
/// `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(HierarchicalLayer::new(2).with_targets(true))
                .try_init();
        }
    });
}
