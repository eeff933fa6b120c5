//! # Inbound Ports
//!
//! What the HTTP edge calls.

use crate::domain::{ArtifactResult, FileTransfer, MenuOption, RenderedView};

/// Dashboard presentation API - inbound port.
pub trait PresentationApi: Send + Sync {
    /// Build the main panel for a selection.
    ///
    /// Never fails: missing or unreadable artifacts become notices.
    fn present(&self, option: MenuOption) -> RenderedView;

    /// Transfer a spreadsheet listed under Descargas.
    fn download(&self, filename: &str) -> ArtifactResult<FileTransfer>;

    /// Transfer a static image referenced by the menu.
    fn image(&self, filename: &str) -> ArtifactResult<FileTransfer>;
}
