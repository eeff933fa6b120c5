//! Source whose files exist but cannot be read.

use std::path::{Path, PathBuf};

use crate::domain::{ArtifactDirectory, ArtifactError, ArtifactKind, ArtifactResult};
use crate::ports::ArtifactSource;

pub const DENIED_REASON: &str = "Permission denied (os error 13)";

/// Every name resolves, every read and listing is refused.
pub struct DeniedSource {
    directory: ArtifactDirectory,
}

impl Default for DeniedSource {
    fn default() -> Self {
        Self {
            directory: ArtifactDirectory::under("/srv/tesis"),
        }
    }
}

impl DeniedSource {
    fn denied(&self, path: PathBuf) -> ArtifactError {
        ArtifactError::Io {
            path,
            reason: DENIED_REASON.to_string(),
        }
    }
}

impl ArtifactSource for DeniedSource {
    fn root(&self, kind: ArtifactKind) -> &Path {
        self.directory.root(kind)
    }

    fn locate(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<PathBuf> {
        self.directory.resolve(kind, filename)
    }

    fn read_text(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<String> {
        Err(self.denied(self.locate(kind, filename)?))
    }

    fn read_bytes(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<Vec<u8>> {
        Err(self.denied(self.locate(kind, filename)?))
    }

    fn list_spreadsheets(&self) -> ArtifactResult<Vec<String>> {
        Err(self.denied(self.root(ArtifactKind::Spreadsheet).to_path_buf()))
    }
}
