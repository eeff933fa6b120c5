//! Artifact references.

use serde::{Deserialize, Serialize};

/// MIME type declared on spreadsheet transfers.
pub const SPREADSHEET_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Extension a file must carry to be listed under Descargas.
pub const SPREADSHEET_EXTENSION: &str = "xlsx";

/// MIME type declared on static image transfers.
pub const IMAGE_MIME: &str = "image/png";

/// Kind of pre-generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Self-contained HTML chart, embedded in a scrollable viewport.
    InteractiveDocument,
    /// PNG image, usually the static fallback of an interactive chart.
    StaticImage,
    /// XLSX workbook offered for download.
    Spreadsheet,
}

impl ArtifactKind {
    /// Short name used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::InteractiveDocument => "interactive",
            ArtifactKind::StaticImage => "image",
            ArtifactKind::Spreadsheet => "spreadsheet",
        }
    }
}

/// Height in pixels of an interactive viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayHeight(pub u32);

impl DisplayHeight {
    pub const STANDARD: DisplayHeight = DisplayHeight(800);
    pub const TALL: DisplayHeight = DisplayHeight(900);

    pub fn pixels(&self) -> u32 {
        self.0
    }
}

impl Default for DisplayHeight {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Reference to one artifact to present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub kind: ArtifactKind,
    /// File name relative to the root of its kind.
    pub filename: String,
    /// Viewport height, interactive documents only.
    pub height: Option<DisplayHeight>,
    /// Caption, static images only.
    pub caption: Option<String>,
}

impl ArtifactRef {
    pub fn interactive(filename: impl Into<String>, height: DisplayHeight) -> Self {
        Self {
            kind: ArtifactKind::InteractiveDocument,
            filename: filename.into(),
            height: Some(height),
            caption: None,
        }
    }

    pub fn image(filename: impl Into<String>) -> Self {
        Self {
            kind: ArtifactKind::StaticImage,
            filename: filename.into(),
            height: None,
            caption: None,
        }
    }

    pub fn spreadsheet(filename: impl Into<String>) -> Self {
        Self {
            kind: ArtifactKind::Spreadsheet,
            filename: filename.into(),
            height: None,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Whether `filename` carries the spreadsheet extension.
pub fn is_spreadsheet_name(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == SPREADSHEET_EXTENSION)
        .unwrap_or(false)
}
