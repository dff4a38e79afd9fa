//! Converts page events into controller commands.
//!
//! The `InputProcessor` owns the transient input state (which atom the
//! pointer is over) and the key-binding map. It is the only thing that
//! sits between raw page events and the controller's
//! [`execute`](crate::controller::SelectionController::execute) method.

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::controller::ViewerCommand;
use crate::options::{DisplayControl, KeybindingOptions};

/// Converts page events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the page's event handlers:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     controller.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Serial of the atom the pointer is over.
    hovered: Option<u32>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            hovered: None,
            key_bindings,
        }
    }

    /// Serial of the atom the pointer is over.
    #[must_use]
    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, code: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(code).map(KeyAction::to_command)
    }

    /// Process a page event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::ModelLoaded => {
                self.hovered = None;
                Some(ViewerCommand::ModelLoaded)
            }
            InputEvent::Pick(atom) => Some(ViewerCommand::SelectAtom(atom)),
            InputEvent::HoverEnter(atom) => {
                // Engines repeat enter events while the pointer rests
                if self.hovered == Some(atom.serial) {
                    return None;
                }
                self.hovered = Some(atom.serial);
                Some(ViewerCommand::HoverEnter(atom))
            }
            InputEvent::HoverLeave(atom) => {
                // A late leave for an earlier atom must not erase the
                // marker on the current one.
                if self.hovered != Some(atom.serial) {
                    return None;
                }
                self.hovered = None;
                Some(ViewerCommand::HoverLeave(atom))
            }
            InputEvent::ControlChanged { control, value } => {
                match control.parse::<DisplayControl>() {
                    Ok(control) => {
                        Some(ViewerCommand::SetControl { control, value })
                    }
                    Err(e) => {
                        log::warn!("ignoring control change: {e}");
                        None
                    }
                }
            }
            InputEvent::KeyPressed { code } => self.handle_key_press(&code),
            InputEvent::ResetPressed => {
                self.hovered = None;
                Some(ViewerCommand::Reset)
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
