use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sizes and opacities of the representations the controller requests.
pub struct GeometryOptions {
    /// Stick radius for unselected residues, in angstroms.
    #[schemars(
        title = "Stick Radius",
        range(min = 0.05, max = 0.5),
        extend("step" = 0.01)
    )]
    pub stick_radius: f32,
    /// Stick radius for the selected residue.
    #[schemars(
        title = "Highlight Radius",
        range(min = 0.05, max = 0.8),
        extend("step" = 0.01)
    )]
    pub highlight_radius: f32,
    /// Backbone cartoon opacity.
    #[schemars(
        title = "Backbone Opacity",
        range(min = 0.1, max = 1.0),
        extend("step" = 0.05)
    )]
    pub cartoon_opacity: f32,
    /// Backbone cartoon thickness in angstroms.
    #[schemars(skip)]
    pub cartoon_thickness: f32,
    /// Hover marker sphere radius.
    #[schemars(skip)]
    pub hover_radius: f32,
    /// Hover marker sphere opacity.
    #[schemars(skip)]
    pub hover_opacity: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            stick_radius: 0.12,
            highlight_radius: 0.22,
            cartoon_opacity: 0.9,
            cartoon_thickness: 0.6,
            hover_radius: 0.4,
            hover_opacity: 0.6,
        }
    }
}
