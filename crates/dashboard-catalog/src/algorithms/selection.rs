//! Selection routing: menu option → ordered artifact list.

use crate::domain::{ArtifactRef, ArtifactResult, MenuOption};
use crate::ports::ArtifactSource;

/// Ordered artifacts to present for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPlan {
    pub option: MenuOption,
    pub artifacts: Vec<ArtifactRef>,
}

impl SelectionPlan {
    /// Descargas with nothing to offer.
    pub fn is_empty_downloads(&self) -> bool {
        self.option.is_dynamic() && self.artifacts.is_empty()
    }
}

/// Route a selection to its artifact list.
///
/// Fixed options never touch the filesystem. Descargas lists the
/// spreadsheets root, already sorted by the source.
pub fn plan_selection<S>(option: MenuOption, source: &S) -> ArtifactResult<SelectionPlan>
where
    S: ArtifactSource + ?Sized,
{
    let artifacts = match option {
        MenuOption::Descargas => source
            .list_spreadsheets()?
            .into_iter()
            .map(ArtifactRef::spreadsheet)
            .collect(),
        fixed => fixed.fixed_artifacts(),
    };

    Ok(SelectionPlan { option, artifacts })
}
