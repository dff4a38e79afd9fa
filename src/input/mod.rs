//! Input handling: page event types and the input processor that converts
//! them into controller commands.

/// Page-level input events.
pub mod event;
/// Key-bindable actions.
pub mod keyboard;
/// Converts page events into controller commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
