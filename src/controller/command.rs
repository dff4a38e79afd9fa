//! The controller's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it came from a pick, a hover, a
//! checkbox, a key press, or a programmatic call, is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`SelectionController::execute`](super::SelectionController::execute).

use crate::options::{ControlValue, DisplayControl};
use crate::structure::AtomRef;

/// A discrete operation the controller can perform.
///
/// ```ignore
/// controller.execute(ViewerCommand::ToggleControl(DisplayControl::Sticks));
/// controller.execute(ViewerCommand::Reset);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Lifecycle ───────────────────────────────────────────────────
    /// The structure engine finished loading its model.
    ModelLoaded,

    // ── Selection ───────────────────────────────────────────────────
    /// Select the residue of the clicked atom.
    SelectAtom(AtomRef),

    /// Drop the selection, keeping display options.
    ClearSelection,

    /// Clear the selection, restore default display options, and reframe.
    Reset,

    // ── Hover ───────────────────────────────────────────────────────
    /// Pointer entered an atom.
    HoverEnter(AtomRef),

    /// Pointer left an atom.
    HoverLeave(AtomRef),

    // ── Display ─────────────────────────────────────────────────────
    /// A display control changed value.
    SetControl {
        /// Which control.
        control: DisplayControl,
        /// Its new value.
        value: ControlValue,
    },

    /// Flip a checkbox, or cycle a selector.
    ToggleControl(DisplayControl),
}
