//! Event operations for SelectionController

use glam::Vec3;

use super::info::{residue_label_text, ResidueInfo};
use super::selection::ActiveSelection;
use super::styling;
use super::SelectionController;
use crate::error::StrandError;
use crate::options::{ControlValue, DisplayControl, DisplayOptions, LabelAnchor};
use crate::scene::SceneRenderer;
use crate::structure::{centroid, AtomRef, Selector, StructureEngine};

impl<S: StructureEngine, R: SceneRenderer> SelectionController<S, R> {
    /// Replace the display toggles, then clear and re-apply every style.
    ///
    /// Idempotent: the same options always produce the same command
    /// sequence. The selected residue's highlight is re-applied last.
    pub fn apply_display_config(&mut self, display: DisplayOptions) {
        self.options.display = display;
        self.restyle();
    }

    /// Select the residue of a clicked atom and label it.
    ///
    /// Clicks on atoms without a residue id (solvent, unassigned points)
    /// are ignored, as is everything before the engines are ready.
    pub fn on_atom_clicked(&mut self, atom: &AtomRef) {
        if let Err(e) = self.select_atom(atom) {
            log::debug!("click on atom {} ignored: {e}", atom.serial);
        }
    }

    /// Show a transient marker on the hovered atom. Never changes the
    /// selection.
    pub fn on_hover_enter(&mut self, atom: &AtomRef) {
        if let Err(e) = self.show_hover(atom) {
            log::debug!("hover on atom {} ignored: {e}", atom.serial);
        }
    }

    /// Remove the hover marker by re-deriving every style from the current
    /// options.
    pub fn on_hover_leave(&mut self, atom: &AtomRef) {
        if atom.is_selectable() {
            self.restyle();
        } else {
            log::debug!(
                "hover leave on atom {} ignored: {}",
                atom.serial,
                StrandError::InvalidSelection
            );
        }
    }

    /// Clear the selection, restore default display options, re-apply the
    /// default style, and reframe the whole model.
    pub fn reset(&mut self) {
        if let Err(e) = self.ensure_ready() {
            log::debug!("reset ignored: {e}");
            return;
        }
        self.options.display = DisplayOptions::default();
        self.drop_label();
        self.scene
            .reframe_to_fit(self.options.camera.reframe_duration());
        self.restyle();
    }

    /// Drop the selection and its label, keeping display options.
    pub fn clear_selection(&mut self) {
        if let Err(e) = self.ensure_ready() {
            log::debug!("clear selection ignored: {e}");
            return;
        }
        if self.selection.is_empty() {
            return;
        }
        self.drop_label();
        self.restyle();
    }

    /// Set one display control from a UI value and restyle.
    pub fn set_control(
        &mut self,
        control: DisplayControl,
        value: &ControlValue,
    ) -> Result<(), StrandError> {
        self.options.display.set(control, value)?;
        self.restyle();
        Ok(())
    }

    /// Flip a checkbox, or cycle a selector, and restyle.
    pub fn toggle_control(&mut self, control: DisplayControl) {
        self.options.display.toggle(control);
        self.restyle();
    }

    /// The structure engine finished loading: draw the model with the
    /// current options and frame it.
    pub fn on_model_loaded(&mut self) {
        if let Err(e) = self.ensure_ready() {
            log::warn!("model-loaded signal with engine not ready: {e}");
            return;
        }
        log::info!("model loaded, applying display options");
        self.scene.reframe_to_fit(None);
        self.restyle();
    }

    /// Destroy the selection label and forget hover state. Call when the
    /// viewer goes away.
    pub fn teardown(&mut self) {
        self.drop_label();
        self.hovered = None;
    }

    fn select_atom(&mut self, atom: &AtomRef) -> Result<(), StrandError> {
        let info =
            ResidueInfo::from_atom(atom).ok_or(StrandError::InvalidSelection)?;
        self.ensure_ready()?;

        self.drop_label();
        let residue_id = info.residue_id;
        let anchor = self.label_anchor(atom, residue_id);
        let label = self.scene.create_annotation(
            &residue_label_text(residue_id),
            anchor,
            &self.options.label,
        );
        log::debug!(
            "selected residue {} {} (chain {})",
            info.residue_name,
            residue_id,
            info.chain
        );
        self.selection.set(ActiveSelection {
            residue_id,
            label,
            info,
        });
        self.restyle();
        Ok(())
    }

    fn show_hover(&mut self, atom: &AtomRef) -> Result<(), StrandError> {
        if !atom.is_selectable() {
            return Err(StrandError::InvalidSelection);
        }
        self.ensure_ready()?;
        let style = styling::hover_style(
            &self.options,
            self.selection.residue_id(),
            atom,
        );
        self.structure
            .set_style(&Selector::Serial(atom.serial), &style);
        self.hovered = Some(atom.serial);
        self.scene.request_frame();
        Ok(())
    }

    fn label_anchor(&self, atom: &AtomRef, residue_id: i32) -> Vec3 {
        match self.options.label.anchor {
            LabelAnchor::ClickedAtom => atom.position,
            LabelAnchor::ResidueCentroid => centroid(
                &self.structure.find_atoms(&Selector::Residue(residue_id)),
            )
            .unwrap_or(atom.position),
        }
    }

    fn drop_label(&mut self) {
        if let Some(label) = self.selection.clear() {
            self.scene.destroy_annotation(label);
        }
    }

    /// Clear all engine styles and apply the full plan for the current
    /// options and selection.
    pub(super) fn restyle(&mut self) {
        if let Err(e) = self.ensure_ready() {
            log::debug!("restyle deferred: {e}");
            return;
        }
        self.hovered = None;
        self.structure.clear_styles();
        for cmd in
            styling::display_plan(&self.options, self.selection.residue_id())
        {
            self.structure.set_style(&cmd.selector, &cmd.style);
        }
        self.scene.request_frame();
    }
}
