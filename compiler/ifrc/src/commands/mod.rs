//! Command handlers for the IFR CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` live here in the module root.

pub mod build;

pub use build::{
    build_repository, load_catalog, parse_build_options, print_views, run_build, BuildOptions,
};

use crate::CliError;

/// Read a file to a string, naming the path on failure.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}
