//! Errors raised while building or querying a repository.

use ifr_core::{AnalysisError, DefinitionKind, TcKind};

/// A failure of the repository itself.
///
/// Every variant except [`IrError::ReadOnly`] aborts a build: a registry
/// that reported one of them is not a valid end state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IrError {
    #[error("name `{name}` is already defined in `{container}`")]
    DuplicateName { container: String, name: String },

    #[error("definition belongs to another repository")]
    ForeignRepository,

    #[error("`{0}` is not a container")]
    NotAContainer(String),

    #[error("`{name}` is not defined in `{container}`")]
    NotDefinedIn { container: String, name: String },

    #[error("`{referrer}` refers to `{id}`, which is not in the repository")]
    Unresolved { referrer: String, id: String },

    #[error("`{referrer}` refers to `{id}`, a {found} where a {expected} is required")]
    WrongKind {
        referrer: String,
        id: String,
        expected: DefinitionKind,
        found: DefinitionKind,
    },

    #[error("type code of kind {kind:?} cannot be resolved to a definition")]
    MalformedTypeCode { kind: TcKind },

    #[error("package `{package}` collides with `{existing}`, which is not a module")]
    NameCollision { package: String, existing: String },

    #[error("no type code is known for `{0}`")]
    MissingTypeCode(String),

    #[error("the repository is read-only: cannot {0}")]
    ReadOnly(&'static str),

    #[error(transparent)]
    Violation(#[from] AnalysisError),
}

impl IrError {
    /// Whether the error is the read-only rejection of a mutator.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        matches!(self, IrError::ReadOnly(_))
    }
}
