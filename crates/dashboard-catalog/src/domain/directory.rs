//! Artifact directory layout.

use std::path::{Component, Path, PathBuf};

use super::artifact::ArtifactKind;
use super::errors::{ArtifactError, ArtifactResult};

/// Default sub-directory for interactive documents.
pub const DEFAULT_INTERACTIVE_DIR: &str = "html";
/// Default sub-directory for static images.
pub const DEFAULT_IMAGES_DIR: &str = "png";
/// Default sub-directory for spreadsheets.
pub const DEFAULT_SPREADSHEETS_DIR: &str = "excel";

/// The three artifact roots, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDirectory {
    interactive_root: PathBuf,
    images_root: PathBuf,
    spreadsheets_root: PathBuf,
}

impl ArtifactDirectory {
    /// Standard layout (`html/`, `png/`, `excel/`) under `app_root`.
    pub fn under(app_root: impl AsRef<Path>) -> Self {
        Self::with_layout(
            app_root,
            DEFAULT_INTERACTIVE_DIR,
            DEFAULT_IMAGES_DIR,
            DEFAULT_SPREADSHEETS_DIR,
        )
    }

    /// Custom sub-directory names under `app_root`.
    pub fn with_layout(
        app_root: impl AsRef<Path>,
        interactive_dir: impl AsRef<Path>,
        images_dir: impl AsRef<Path>,
        spreadsheets_dir: impl AsRef<Path>,
    ) -> Self {
        let root = app_root.as_ref();
        Self {
            interactive_root: root.join(interactive_dir),
            images_root: root.join(images_dir),
            spreadsheets_root: root.join(spreadsheets_dir),
        }
    }

    /// Root directory for a kind.
    pub fn root(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::InteractiveDocument => &self.interactive_root,
            ArtifactKind::StaticImage => &self.images_root,
            ArtifactKind::Spreadsheet => &self.spreadsheets_root,
        }
    }

    /// Resolve `filename` under the root of `kind`.
    ///
    /// Only a single normal path component is accepted, so the result
    /// always lives directly inside the root.
    pub fn resolve(&self, kind: ArtifactKind, filename: &str) -> ArtifactResult<PathBuf> {
        validate_artifact_name(filename)?;
        Ok(self.root(kind).join(filename))
    }
}

/// Reject names that could escape a root.
pub fn validate_artifact_name(filename: &str) -> ArtifactResult<()> {
    let invalid = || ArtifactError::InvalidArtifactName(filename.to_string());

    if filename.is_empty() || filename.contains(['/', '\\', '\0']) {
        return Err(invalid());
    }

    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}
