//! Dashboard service - wires the router and the presenter to a source.

use tracing::{debug, error};

use crate::algorithms::{plan_selection, ArtifactPresenter};
use crate::domain::{
    validate_artifact_name, ArtifactError, ArtifactKind, ArtifactResult, FileTransfer,
    MenuOption, NoticeLevel, RenderedView, ViewBlock, IMAGE_MIME, SPREADSHEET_MIME,
};
use crate::ports::{ArtifactSource, PresentationApi};

/// Presentation service over an artifact source.
pub struct DashboardService<S: ArtifactSource> {
    source: S,
}

impl<S: ArtifactSource> DashboardService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: ArtifactSource> PresentationApi for DashboardService<S> {
    fn present(&self, option: MenuOption) -> RenderedView {
        debug!(option = option.slug(), "Presenting selection");

        match plan_selection(option, &self.source) {
            Ok(plan) => ArtifactPresenter::new(&self.source).present(&plan),
            Err(e) => {
                error!(option = option.slug(), error = %e, "Failed to list artifacts");
                let mut view = RenderedView::new(option);
                view.push(ViewBlock::Notice {
                    level: NoticeLevel::Error,
                    message: format!(
                        "No se pudo listar la carpeta '{}': {}",
                        self.source.root(ArtifactKind::Spreadsheet).display(),
                        e
                    ),
                });
                view
            }
        }
    }

    fn download(&self, filename: &str) -> ArtifactResult<FileTransfer> {
        validate_artifact_name(filename)?;
        let listed = self.source.list_spreadsheets()?;
        if !listed.iter().any(|name| name == filename) {
            return Err(ArtifactError::NotInCatalog(filename.to_string()));
        }

        let content = self.source.read_bytes(ArtifactKind::Spreadsheet, filename)?;
        Ok(FileTransfer {
            filename: filename.to_string(),
            mime: SPREADSHEET_MIME,
            content,
        })
    }

    fn image(&self, filename: &str) -> ArtifactResult<FileTransfer> {
        validate_artifact_name(filename)?;
        if !is_catalog_image(filename) {
            return Err(ArtifactError::NotInCatalog(filename.to_string()));
        }

        let content = self.source.read_bytes(ArtifactKind::StaticImage, filename)?;
        Ok(FileTransfer {
            filename: filename.to_string(),
            mime: IMAGE_MIME,
            content,
        })
    }
}

/// Whether some menu option references `filename` as a static image.
pub fn is_catalog_image(filename: &str) -> bool {
    MenuOption::ALL
        .iter()
        .flat_map(|option| option.fixed_artifacts())
        .any(|r| r.kind == ArtifactKind::StaticImage && r.filename == filename)
}
