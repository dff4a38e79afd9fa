//! The selection-and-style controller.
//!
//! [`SelectionController`] is the single authority for what is selected and
//! how the model is drawn. It owns a [`SelectionState`] and the
//! [`Options`], and keeps the structure engine and scene renderer in step
//! with them: every change clears the engine's styles and re-applies the
//! full [`styling::display_plan`].

pub mod command;
mod events;
pub mod info;
mod selection;
pub mod styling;

pub use command::ViewerCommand;
pub use info::ResidueInfo;
pub use selection::{SelectionState, ViewerState};

use crate::error::StrandError;
use crate::options::{DisplayOptions, Options};
use crate::scene::SceneRenderer;
use crate::structure::StructureEngine;

/// Owns selection and display state for one viewer and drives its engines.
///
/// All operations are synchronous and run to completion on the caller's
/// (UI) thread. Until both engines report ready, operations leave the
/// selection untouched and issue no engine calls.
///
/// # Example
///
/// ```ignore
/// let mut controller = SelectionController::new(structure, scene, options);
/// controller.on_model_loaded();
/// controller.on_atom_clicked(&atom);
/// ```
pub struct SelectionController<S, R> {
    structure: S,
    scene: R,
    options: Options,
    selection: SelectionState,
    /// Serial of the atom currently showing a hover marker.
    hovered: Option<u32>,
}

impl<S: StructureEngine, R: SceneRenderer> SelectionController<S, R> {
    /// Create a controller with an empty selection.
    #[must_use]
    pub fn new(structure: S, scene: R, options: Options) -> Self {
        Self {
            structure,
            scene,
            options,
            selection: SelectionState::new(),
            hovered: None,
        }
    }

    /// Run one command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::ModelLoaded => self.on_model_loaded(),
            ViewerCommand::SelectAtom(atom) => self.on_atom_clicked(&atom),
            ViewerCommand::ClearSelection => self.clear_selection(),
            ViewerCommand::Reset => self.reset(),
            ViewerCommand::HoverEnter(atom) => self.on_hover_enter(&atom),
            ViewerCommand::HoverLeave(atom) => self.on_hover_leave(&atom),
            ViewerCommand::SetControl { control, value } => {
                if let Err(e) = self.set_control(control, &value) {
                    log::warn!("control change rejected: {e}");
                }
            }
            ViewerCommand::ToggleControl(control) => {
                self.toggle_control(control);
            }
        }
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Details of the selected residue, for the info box.
    #[must_use]
    pub fn selection_info(&self) -> Option<&ResidueInfo> {
        self.selection.info()
    }

    /// [`ViewerState::Selected`] when a residue is selected.
    #[must_use]
    pub fn state(&self) -> ViewerState {
        self.selection.state()
    }

    /// Serial of the atom under a hover marker, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    /// All options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current display toggles.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.options.display
    }

    /// Replace all options and restyle.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.restyle();
    }

    /// The structure engine.
    #[must_use]
    pub fn structure(&self) -> &S {
        &self.structure
    }

    /// Mutable access to the structure engine.
    pub fn structure_mut(&mut self) -> &mut S {
        &mut self.structure
    }

    /// The scene renderer.
    #[must_use]
    pub fn scene(&self) -> &R {
        &self.scene
    }

    /// Mutable access to the scene renderer.
    pub fn scene_mut(&mut self) -> &mut R {
        &mut self.scene
    }

    /// Whether both engines accept calls.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.structure.is_ready() && self.scene.is_ready()
    }

    fn ensure_ready(&self) -> Result<(), StrandError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(StrandError::EngineNotReady)
        }
    }
}
