use super::info::ResidueInfo;
use crate::scene::AnnotationHandle;

/// Coarse controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    /// Nothing selected.
    Idle,
    /// One residue highlighted and labeled.
    Selected,
}

/// The residue currently selected, with the label that marks it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ActiveSelection {
    pub residue_id: i32,
    pub label: AnnotationHandle,
    pub info: ResidueInfo,
}

/// What is selected, if anything.
///
/// The residue id and its label handle are stored together, so a label
/// exists exactly when a residue is selected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    active: Option<ActiveSelection>,
}

impl SelectionState {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the selected residue.
    #[must_use]
    pub fn residue_id(&self) -> Option<i32> {
        self.active.as_ref().map(|a| a.residue_id)
    }

    /// Handle of the label shown for the selection.
    #[must_use]
    pub fn label(&self) -> Option<AnnotationHandle> {
        self.active.as_ref().map(|a| a.label)
    }

    /// Details of the atom that made the selection.
    #[must_use]
    pub fn info(&self) -> Option<&ResidueInfo> {
        self.active.as_ref().map(|a| &a.info)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    /// [`ViewerState::Selected`] when a residue is selected.
    #[must_use]
    pub fn state(&self) -> ViewerState {
        if self.active.is_some() {
            ViewerState::Selected
        } else {
            ViewerState::Idle
        }
    }

    /// Install a new selection. The caller must have destroyed the
    /// previous label first.
    pub(crate) fn set(&mut self, active: ActiveSelection) {
        self.active = Some(active);
    }

    /// Clear the selection, handing back the label that must be destroyed.
    pub(crate) fn clear(&mut self) -> Option<AnnotationHandle> {
        self.active.take().map(|a| a.label)
    }
}
