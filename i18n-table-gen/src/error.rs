use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a generator run.
///
/// Each variant names the offending file so the diagnostic can be acted on
/// without re-running in verbose mode.
#[derive(Error, Debug)]
pub enum GenError {
    /// Filesystem read or write failure
    #[error("failed to {op} '{}': {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON object of `{ id: { form: text } }` entries
    #[error("malformed translation file '{}': {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file name does not map to a recognized language tag
    #[error("unsupported language '{tag}' for file '{}': {reason}", path.display())]
    UnsupportedLanguage {
        path: PathBuf,
        tag: String,
        reason: String,
    },

    /// Two files canonicalize to the same language tag
    #[error(
        "language '{tag}' is defined twice: '{}' and '{}'",
        first.display(),
        second.display()
    )]
    DuplicateLanguage {
        tag: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("empty message id in '{}'", path.display())]
    EmptyIdentifier { path: PathBuf },

    #[error("message '{id}' in '{}' has no '{form}' form", path.display())]
    MissingDefaultForm {
        path: PathBuf,
        id: String,
        form: &'static str,
    },

    /// Raised only when strict form checking is enabled
    #[error("message '{id}' in '{}' has unexpected form '{form}': {reason}", path.display())]
    UnexpectedForm {
        path: PathBuf,
        id: String,
        form: String,
        reason: String,
    },

    /// The configured runtime crate path is not a Rust path
    #[error("invalid runtime crate path '{path}': {source}")]
    InvalidRuntimePath {
        path: String,
        #[source]
        source: syn::Error,
    },

    /// Check mode found generated output that differs from the sources
    #[error("'{}' is out of date; rerun i18n-table-gen", path.display())]
    Stale { path: PathBuf },
}

impl GenError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;
