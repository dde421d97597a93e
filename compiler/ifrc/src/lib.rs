//! IFR command-line host.
//!
//! Loads a class catalog from JSON, maps the requested classes into a
//! repository, finishes it, and prints what was asked for: the definition
//! tree, repository-ID lookups, or node descriptions.

pub mod commands;
mod error;
pub mod render;

use std::sync::Once;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `IFR_LOG=ifr_repository=debug` (or `RUST_LOG`); set
/// `IFR_LOG_TREE=1` for indented span trees instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if a filter is set
        let directives = std::env::var("IFR_LOG").or_else(|_| std::env::var("RUST_LOG"));
        let Ok(directives) = directives else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var_os("IFR_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
