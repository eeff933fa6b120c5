//! # Algorithms
//!
//! - `selection`: menu option → ordered artifact list
//! - `presentation`: artifact list → view model

pub mod presentation;
pub mod selection;

pub use presentation::{download_label, ArtifactPresenter, EMPTY_DOWNLOADS_MESSAGE};
pub use selection::{plan_selection, SelectionPlan};
