//! # Domain Layer
//!
//! Menu options, artifact references, the directory layout and the view
//! model. Nothing here touches the filesystem.

pub mod artifact;
pub mod directory;
pub mod errors;
pub mod menu;
pub mod view;

pub use artifact::{
    is_spreadsheet_name, ArtifactKind, ArtifactRef, DisplayHeight, IMAGE_MIME, SPREADSHEET_EXTENSION,
    SPREADSHEET_MIME,
};
pub use directory::{
    validate_artifact_name, ArtifactDirectory, DEFAULT_IMAGES_DIR, DEFAULT_INTERACTIVE_DIR,
    DEFAULT_SPREADSHEETS_DIR,
};
pub use errors::{ArtifactError, ArtifactResult};
pub use menu::{MenuOption, STATIC_VERSION_CAPTION};
pub use view::{DownloadAction, FileTransfer, NoticeLevel, RenderedView, ViewBlock};
