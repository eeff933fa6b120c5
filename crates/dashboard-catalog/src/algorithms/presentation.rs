//! Artifact presentation: plan → view model.
//!
//! Every failure is converted in place into a notice. Missing interactive
//! documents are errors, missing images are warnings, and an empty
//! Descargas listing is informational. A notice never stops the items that
//! follow it.

use tracing::{error, info, warn};

use crate::domain::{
    ArtifactError, ArtifactKind, DisplayHeight, DownloadAction, NoticeLevel, RenderedView,
    ViewBlock, SPREADSHEET_MIME,
};
use crate::ports::ArtifactSource;

use super::selection::SelectionPlan;

/// Shown when Descargas finds no spreadsheets.
pub const EMPTY_DOWNLOADS_MESSAGE: &str =
    "No se encontraron archivos Excel en la carpeta 'excel/'.";

/// Label of a download action.
pub fn download_label(filename: &str) -> String {
    format!("Descargar {}", filename)
}

/// Presents artifacts from a source.
pub struct ArtifactPresenter<'a, S: ArtifactSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ArtifactSource + ?Sized> ArtifactPresenter<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Embed an interactive document, or an error notice naming the path.
    pub fn render_interactive_document(&self, filename: &str, height: DisplayHeight) -> ViewBlock {
        match self
            .source
            .read_text(ArtifactKind::InteractiveDocument, filename)
        {
            Ok(content) => ViewBlock::InteractiveDocument {
                filename: filename.to_string(),
                content,
                height,
            },
            Err(e) => {
                error!(filename, error = %e, "Interactive document unavailable");
                ViewBlock::Notice {
                    level: NoticeLevel::Error,
                    message: unavailable_message("el interactivo", filename, &e),
                }
            }
        }
    }

    /// Show an image, or a warning notice naming the path.
    ///
    /// The bytes are read once so that an unreadable file is reported on
    /// the page instead of failing later at the image route.
    pub fn render_static_image(&self, filename: &str, caption: Option<&str>) -> ViewBlock {
        match self.source.read_bytes(ArtifactKind::StaticImage, filename) {
            Ok(_) => ViewBlock::StaticImage {
                filename: filename.to_string(),
                caption: caption.map(str::to_string),
            },
            Err(e) => {
                warn!(filename, error = %e, "Static image unavailable");
                ViewBlock::Notice {
                    level: NoticeLevel::Warning,
                    message: unavailable_message("la imagen", filename, &e),
                }
            }
        }
    }

    /// Offer a spreadsheet for download.
    ///
    /// The name comes from the directory listing, so it is only checked
    /// for existence here. The bytes are read when the action is invoked.
    pub fn offer_download(&self, filename: &str) -> ViewBlock {
        match self.source.locate(ArtifactKind::Spreadsheet, filename) {
            Ok(_) => ViewBlock::Download(DownloadAction {
                label: download_label(filename),
                filename: filename.to_string(),
                mime: SPREADSHEET_MIME.to_string(),
            }),
            Err(e) => {
                warn!(filename, error = %e, "Spreadsheet vanished after listing");
                ViewBlock::Notice {
                    level: NoticeLevel::Warning,
                    message: unavailable_message("el archivo Excel", filename, &e),
                }
            }
        }
    }

    /// Present a whole plan in order.
    pub fn present(&self, plan: &SelectionPlan) -> RenderedView {
        let mut view = RenderedView::new(plan.option);

        if plan.is_empty_downloads() {
            info!("No spreadsheets to offer");
            view.push(ViewBlock::Notice {
                level: NoticeLevel::Info,
                message: EMPTY_DOWNLOADS_MESSAGE.to_string(),
            });
            return view;
        }

        let last = plan.artifacts.len().saturating_sub(1);
        for (index, artifact) in plan.artifacts.iter().enumerate() {
            let block = match artifact.kind {
                ArtifactKind::InteractiveDocument => self.render_interactive_document(
                    &artifact.filename,
                    artifact.height.unwrap_or_default(),
                ),
                ArtifactKind::StaticImage => {
                    self.render_static_image(&artifact.filename, artifact.caption.as_deref())
                }
                ArtifactKind::Spreadsheet => self.offer_download(&artifact.filename),
            };
            view.push(block);

            // The fallback image is separated from its interactive version
            // even when the interactive one failed to load.
            if artifact.kind == ArtifactKind::InteractiveDocument && index < last {
                view.push(ViewBlock::Divider);
            }
        }

        view
    }
}

/// Notice text for an artifact that could not be presented.
fn unavailable_message(what: &str, filename: &str, err: &ArtifactError) -> String {
    match err {
        ArtifactError::NotFound { path } => {
            format!("No se encontró {}: {}", what, path.display())
        }
        ArtifactError::Io { path, reason } => {
            format!("No se pudo leer {}: {} ({})", what, path.display(), reason)
        }
        ArtifactError::InvalidArtifactName(_) | ArtifactError::NotInCatalog(_) => {
            format!("No se encontró {}: {}", what, filename)
        }
    }
}
