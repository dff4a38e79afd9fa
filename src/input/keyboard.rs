use serde::{Deserialize, Serialize};

use crate::controller::ViewerCommand;
use crate::options::DisplayControl;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset = "KeyR"
/// toggle_sticks = "KeyS"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Clear the selection and restore default display options.
    Reset,
    /// Drop the selection, keep display options.
    ClearSelection,
    /// Flip the sticks checkbox.
    ToggleSticks,
    /// Flip the backbone checkbox.
    ToggleCartoon,
    /// Flip the base-coloring checkbox.
    ToggleBaseColors,
    /// Switch between uniform and spectrum backbone coloring.
    CycleCartoonColor,
}

impl KeyAction {
    /// The command this action issues.
    #[must_use]
    pub fn to_command(self) -> ViewerCommand {
        match self {
            Self::Reset => ViewerCommand::Reset,
            Self::ClearSelection => ViewerCommand::ClearSelection,
            Self::ToggleSticks => {
                ViewerCommand::ToggleControl(DisplayControl::Sticks)
            }
            Self::ToggleCartoon => {
                ViewerCommand::ToggleControl(DisplayControl::Cartoon)
            }
            Self::ToggleBaseColors => {
                ViewerCommand::ToggleControl(DisplayControl::BaseColors)
            }
            Self::CycleCartoonColor => {
                ViewerCommand::ToggleControl(DisplayControl::CartoonColor)
            }
        }
    }
}
