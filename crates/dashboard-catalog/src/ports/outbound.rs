//! # Outbound Ports
//!
//! Access to the pre-generated artifacts on disk.

use std::path::{Path, PathBuf};

use crate::domain::{ArtifactKind, ArtifactResult};

/// Read-only artifact storage - outbound port.
///
/// All operations are whole-file and synchronous. Implementations must
/// resolve names strictly under the root of the given kind.
pub trait ArtifactSource: Send + Sync {
    /// Root directory holding artifacts of `kind`.
    fn root(&self, kind: ArtifactKind) -> &Path;

    /// Resolve `filename` and confirm it exists.
    ///
    /// Returns the resolved path, or `NotFound` carrying the attempted path.
    fn locate(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<PathBuf>;

    /// Read a UTF-8 artifact in full.
    fn read_text(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<String>;

    /// Read an artifact's bytes in full.
    fn read_bytes(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<Vec<u8>>;

    /// Spreadsheet names in the spreadsheets root, sorted ascending.
    ///
    /// A missing root yields an empty list.
    fn list_spreadsheets(&self) -> ArtifactResult<Vec<String>>;
}
