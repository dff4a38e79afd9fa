use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::structure::Rgb;

/// Where a selection label is anchored.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnchor {
    /// Centroid of every atom in the selected residue.
    #[default]
    ResidueCentroid,
    /// Position of the clicked atom.
    ClickedAtom,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Label", inline)]
#[serde(default)]
/// Appearance and placement of the selection label.
pub struct LabelOptions {
    /// Label anchor strategy.
    #[schemars(title = "Anchor")]
    pub anchor: LabelAnchor,
    /// Font size in pixels.
    #[schemars(title = "Font Size", range(min = 8, max = 32))]
    pub font_size: u32,
    /// Padding around the text in pixels.
    #[schemars(skip)]
    pub padding: u32,
    /// Border thickness in pixels.
    #[schemars(skip)]
    pub border_thickness: f32,
    /// Text color.
    #[schemars(skip)]
    pub font_color: Rgb,
    /// Background color.
    #[schemars(skip)]
    pub background_color: Rgb,
    /// Background opacity.
    #[schemars(
        title = "Background Opacity",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.05)
    )]
    pub background_opacity: f32,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            anchor: LabelAnchor::ResidueCentroid,
            font_size: 14,
            padding: 4,
            border_thickness: 0.0,
            font_color: [1.0, 1.0, 1.0],
            background_color: [0.0, 0.0, 0.0],
            background_opacity: 0.5,
        }
    }
}

