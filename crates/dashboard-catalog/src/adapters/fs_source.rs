//! Filesystem artifact source.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{
    is_spreadsheet_name, ArtifactDirectory, ArtifactError, ArtifactKind, ArtifactResult,
};
use crate::ports::ArtifactSource;

/// Reads artifacts from the three roots of an [`ArtifactDirectory`].
#[derive(Debug, Clone)]
pub struct FsArtifactSource {
    directory: ArtifactDirectory,
}

impl FsArtifactSource {
    pub fn new(directory: ArtifactDirectory) -> Self {
        Self { directory }
    }

}

impl ArtifactSource for FsArtifactSource {
    fn root(&self, kind: ArtifactKind) -> &Path {
        self.directory.root(kind)
    }

    fn locate(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<PathBuf> {
        let path = self.directory.resolve(kind, filename)?;
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(path),
            Ok(_) => Err(ArtifactError::NotFound { path }),
            Err(e) => Err(ArtifactError::from_io(&path, e)),
        }
    }

    fn read_text(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<String> {
        let path = self.locate(kind, filename)?;
        let bytes = fs::read(&path).map_err(|e| ArtifactError::from_io(&path, e))?;
        String::from_utf8(bytes).map_err(|e| ArtifactError::Io {
            path,
            reason: format!("invalid UTF-8: {}", e.utf8_error()),
        })
    }

    fn read_bytes(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<Vec<u8>> {
        let path = self.locate(kind, filename)?;
        fs::read(&path).map_err(|e| ArtifactError::from_io(&path, e))
    }

    fn list_spreadsheets(&self) -> ArtifactResult<Vec<String>> {
        let root = self.directory.root(ArtifactKind::Spreadsheet);
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(root = %root.display(), "Spreadsheets root missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ArtifactError::from_io(root, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ArtifactError::from_io(root, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if is_spreadsheet_name(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
