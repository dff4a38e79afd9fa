use crate::options::ControlValue;
use crate::structure::AtomRef;

/// Page-level input events.
///
/// Pointer events arrive already resolved to an [`AtomRef`] by the
/// structure engine's hit-test. These are fed into an
/// [`InputProcessor`](super::InputProcessor), which converts them into
/// [`ViewerCommand`](crate::controller::ViewerCommand) values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(InputEvent::Pick(atom)) {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The structure engine finished loading its model.
    ModelLoaded,
    /// An atom was clicked.
    Pick(AtomRef),
    /// The pointer moved onto an atom.
    HoverEnter(AtomRef),
    /// The pointer moved off an atom.
    HoverLeave(AtomRef),
    /// A checkbox or selector changed.
    ControlChanged {
        /// Control name or element id (e.g. `cb-sticks`).
        control: String,
        /// The control's new value.
        value: ControlValue,
    },
    /// A key was pressed.
    KeyPressed {
        /// Physical key code string (e.g. `"KeyR"`, `"Escape"`).
        code: String,
    },
    /// The reset button was pressed.
    ResetPressed,
}
