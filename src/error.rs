//! Error taxonomy for passforge.
//!
//! Generation and validation errors surface immediately to the caller;
//! file-level errors carry the failing operation and the underlying cause.
//! No variant ever embeds a plaintext secret in its message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by the passforge core.
#[derive(Debug, Error)]
pub enum Error {
    /// Generator length bounds violate `4 <= min <= max <= 128`.
    #[error("invalid generator configuration: {0}")]
    InvalidConfiguration(String),

    /// A caller-supplied password length is outside the accepted range.
    #[error("password length must be between 4 and 128 characters (got {0})")]
    InvalidLength(usize),

    /// An entry was constructed with a blank name or empty secret.
    #[error("invalid entry: {0}")]
    InvalidEntry(&'static str),

    /// An entry with the same name (case-insensitive) already exists.
    #[error("an entry named '{0}' already exists")]
    DuplicateName(String),

    /// The store could not be initialized (directory creation or initial load).
    #[error("failed to initialize store at {path}: {source}")]
    StoreInit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write, delete, or reload against the backing file failed.
    #[error("failed to {op}: {source}")]
    Persistence {
        op: String,
        #[source]
        source: io::Error,
    },

    /// An export snapshot could not be written.
    #[error("failed to export to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an I/O error with the operation that failed.
    pub(crate) fn persistence(op: impl Into<String>, source: io::Error) -> Self {
        Error::Persistence {
            op: op.into(),
            source,
        }
    }
}
