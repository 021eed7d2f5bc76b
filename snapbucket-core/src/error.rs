//! Error type shared by every pipeline step.
//!
//! Each variant maps to one way a run can end early. None of them are retried:
//! the first error aborts the pipeline and is surfaced at the CLI boundary.

use std::path::PathBuf;

/// Boxed error returned by external collaborators (object store, clipboard).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be resolved, e.g. `~` without a home directory.
    #[error("config error: {0}")]
    Config(String),

    /// The screenshot directory is empty or could not be listed.
    #[error("no files in dir: {dir:?}")]
    NotFound { dir: PathBuf },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to upload {key:?} to {bucket:?}: {source}")]
    Upload {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    /// The upload already happened when this is returned; nothing is rolled back.
    #[error("failed to copy URL to clipboard: {source}")]
    Clipboard {
        #[source]
        source: BoxError,
    },
}
