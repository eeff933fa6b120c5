//! View model produced by the presenter.
//!
//! A [`RenderedView`] is an ordered list of blocks, independent of any
//! markup. The gateway turns it into HTML.

use serde::{Deserialize, Serialize};

use super::artifact::DisplayHeight;
use super::menu::MenuOption;

/// Severity of an in-page notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// A one-shot download action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadAction {
    /// Button text, `Descargar {filename}`.
    pub label: String,
    pub filename: String,
    pub mime: String,
}

/// Bytes handed to the client with the name and MIME type to declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransfer {
    pub filename: String,
    pub mime: &'static str,
    pub content: Vec<u8>,
}

/// One element of the main panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewBlock {
    /// Subheader of the view.
    Heading(String),
    /// Interactive document embedded verbatim.
    InteractiveDocument {
        filename: String,
        content: String,
        height: DisplayHeight,
    },
    /// Image scaled to the panel width.
    StaticImage {
        filename: String,
        caption: Option<String>,
    },
    /// Horizontal rule between an interactive document and its fallback.
    Divider,
    /// Informational, warning or error message.
    Notice { level: NoticeLevel, message: String },
    /// Spreadsheet download action.
    Download(DownloadAction),
}

/// Everything the main panel shows for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedView {
    pub option: MenuOption,
    pub blocks: Vec<ViewBlock>,
}

impl RenderedView {
    pub fn new(option: MenuOption) -> Self {
        Self {
            option,
            blocks: vec![ViewBlock::Heading(option.heading().to_string())],
        }
    }

    pub fn push(&mut self, block: ViewBlock) {
        self.blocks.push(block);
    }

    /// Notices in render order.
    pub fn notices(&self) -> impl Iterator<Item = (NoticeLevel, &str)> {
        self.blocks.iter().filter_map(|block| match block {
            ViewBlock::Notice { level, message } => Some((*level, message.as_str())),
            _ => None,
        })
    }

    /// Number of warning or error notices.
    pub fn problem_count(&self) -> usize {
        self.notices()
            .filter(|(level, _)| *level != NoticeLevel::Info)
            .count()
    }

    /// Download actions in render order.
    pub fn downloads(&self) -> impl Iterator<Item = &DownloadAction> {
        self.blocks.iter().filter_map(|block| match block {
            ViewBlock::Download(action) => Some(action),
            _ => None,
        })
    }
}
