//! Error types for tree, filesystem, and provisioning operations.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem-boundary failures.
///
/// Raised by the materializer, the importer, and the streaming renderer.
/// Always propagated immediately; local disk I/O is never retried.
#[derive(Debug, Error)]
pub enum FsError {
    /// The materializer's target `parent/name` is already occupied
    #[error("target already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Import or render source path does not exist
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Import or render source path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Underlying I/O failure, with the offending path
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wrap an `io::Error` with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Environment-provisioner failures.
///
/// Soft failures from the template assembler's point of view: reported as a
/// warning, never fatal to a scaffolding run whose tree is already on disk.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The provisioning tool is not installed for the given interpreter
    #[error("`virtualenv` is not available; install it with `{0} -m pip install virtualenv`")]
    ToolMissing(String),

    /// The provisioning tool ran but exited non-zero
    #[error("virtualenv exited with status {0}")]
    Failed(std::process::ExitStatus),

    /// The interpreter itself could not be spawned
    #[error("failed to invoke interpreter: {0}")]
    Spawn(#[from] std::io::Error),
}
