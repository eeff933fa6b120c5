//! Artifact resolution errors.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while resolving or reading an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// The resolved path does not exist.
    #[error("artifact not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Name is empty, contains a separator or points outside its root.
    #[error("invalid artifact name: {0:?}")]
    InvalidArtifactName(String),

    /// The file exists but could not be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    /// Name is not offered by the menu or the current spreadsheet listing.
    #[error("not in catalog: {0}")]
    NotInCatalog(String),
}

impl ArtifactError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            ArtifactError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactError::Io {
                path: path.to_path_buf(),
                reason: error.to_string(),
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ArtifactError::NotFound { .. } | ArtifactError::NotInCatalog(_)
        )
    }
}

/// Result alias for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;
