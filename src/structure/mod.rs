//! The structure/style capability the controller consumes.
//!
//! A structure engine owns the parsed molecule: it applies styles to atoms
//! matched by a [`Selector`] and answers selector lookups. Hit-testing under
//! the cursor also belongs to the engine; its results reach the controller
//! as [`AtomRef`]s inside [`InputEvent`](crate::input::InputEvent)s.

mod atom;
mod selector;
mod style;

pub use atom::{centroid, AtomRef};
pub use selector::Selector;
pub use style::{
    rgb_to_hex, CartoonStyle, ColorSpec, Rgb, SphereStyle, StickStyle,
    StyleSpec,
};

/// Styling and lookup operations on the loaded molecule.
pub trait StructureEngine {
    /// Whether a model is loaded and styling calls will take effect.
    fn is_ready(&self) -> bool;

    /// Replace the style of every atom matched by `selector`.
    fn set_style(&mut self, selector: &Selector, style: &StyleSpec);

    /// Remove all styling, leaving every atom hidden.
    fn clear_styles(&mut self);

    /// All atoms matched by `selector`, in engine order.
    fn find_atoms(&self, selector: &Selector) -> Vec<AtomRef>;
}
