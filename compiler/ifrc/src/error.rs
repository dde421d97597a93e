//! Errors of the command-line host.

use ifr_core::AnalysisError;
use ifr_repository::IrError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{path}` is not a valid class catalog: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    BadArgument(String),

    #[error("`{0}` is not in the repository")]
    NotFound(String),

    #[error(transparent)]
    Ir(#[from] IrError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
