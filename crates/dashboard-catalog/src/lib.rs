//! # Dashboard Catalog
//!
//! Menu catalog, selection routing and artifact presentation for the
//! thesis dashboard.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Flow
//!
//! ```text
//! MenuOption ──► plan_selection ──► SelectionPlan ──► ArtifactPresenter ──► RenderedView
//!                     │                                      │
//!                     └──────────── ArtifactSource ──────────┘
//!                                  (html/, png/, excel/)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! dashboard-catalog/
//! ├── domain/       # MenuOption, ArtifactRef, ArtifactDirectory, view model
//! ├── algorithms/   # Selection routing, presentation
//! ├── ports/        # PresentationApi, ArtifactSource
//! ├── adapters/     # FsArtifactSource
//! └── service.rs    # DashboardService
//! ```
//!
//! Artifacts are opaque: nothing here inspects HTML, PNG or XLSX content.

#![allow(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::FsArtifactSource;
pub use algorithms::{
    download_label, plan_selection, ArtifactPresenter, SelectionPlan, EMPTY_DOWNLOADS_MESSAGE,
};
pub use domain::{
    ArtifactDirectory, ArtifactError, ArtifactKind, ArtifactRef, ArtifactResult, DisplayHeight,
    DownloadAction, FileTransfer, MenuOption, NoticeLevel, RenderedView, ViewBlock, IMAGE_MIME,
    SPREADSHEET_MIME, STATIC_VERSION_CAPTION,
};
pub use ports::{ArtifactSource, PresentationApi};
pub use service::{is_catalog_image, DashboardService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
