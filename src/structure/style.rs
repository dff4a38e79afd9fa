//! Declarative style specs sent to the structure engine.

use serde::{Deserialize, Serialize};

/// Linear RGB color with channels in `0.0..=1.0`.
pub type Rgb = [f32; 3];

/// Format an [`Rgb`] color as a `#rrggbb` hex string.
#[must_use]
pub fn rgb_to_hex(color: Rgb) -> String {
    let [r, g, b] =
        color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// How a representation is colored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpec {
    /// One fixed color for every matched atom.
    Fixed(Rgb),
    /// Rainbow gradient along the chain.
    Spectrum,
    /// Standard per-element (CPK) coloring.
    Element,
}

/// Backbone ribbon representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartoonStyle {
    /// Ribbon color.
    pub color: ColorSpec,
    /// Ribbon opacity.
    pub opacity: f32,
    /// Ribbon thickness in Angstroms.
    pub thickness: f32,
}

/// Bond stick representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickStyle {
    /// Stick color.
    pub color: ColorSpec,
    /// Stick radius in Angstroms.
    pub radius: f32,
}

/// Atom sphere representation, used for transient hover markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereStyle {
    /// Sphere color.
    pub color: Rgb,
    /// Sphere radius in Angstroms.
    pub radius: f32,
    /// Sphere opacity.
    pub opacity: f32,
}

/// Full style of a set of atoms. Applying a spec replaces whatever style
/// the matched atoms had; an empty spec hides them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Backbone ribbon, if shown.
    pub cartoon: Option<CartoonStyle>,
    /// Sticks, if shown.
    pub stick: Option<StickStyle>,
    /// Sphere marker, if shown.
    pub sphere: Option<SphereStyle>,
}

impl StyleSpec {
    /// Whether the style draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cartoon.is_none() && self.stick.is_none() && self.sphere.is_none()
    }

    /// Builder: set the cartoon component.
    #[must_use]
    pub fn with_cartoon(mut self, cartoon: Option<CartoonStyle>) -> Self {
        self.cartoon = cartoon;
        self
    }

    /// Builder: set the stick component.
    #[must_use]
    pub fn with_stick(mut self, stick: Option<StickStyle>) -> Self {
        self.stick = stick;
        self
    }

    /// Builder: set the sphere component.
    #[must_use]
    pub fn with_sphere(mut self, sphere: Option<SphereStyle>) -> Self {
        self.sphere = sphere;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_byte_colors() {
        let color = [76.0 / 255.0, 201.0 / 255.0, 240.0 / 255.0];
        assert_eq!(rgb_to_hex(color), "#4cc9f0");
        assert_eq!(rgb_to_hex([1.0, 1.0, 0.0]), "#ffff00");
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        assert_eq!(rgb_to_hex([-0.5, 2.0, 0.0]), "#00ff00");
    }

    #[test]
    fn default_spec_is_empty() {
        assert!(StyleSpec::default().is_empty());
        let spec = StyleSpec::default().with_stick(Some(StickStyle {
            color: ColorSpec::Element,
            radius: 0.12,
        }));
        assert!(!spec.is_empty());
    }
}
