use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::structure::Rgb;

fn byte_rgb(r: u8, g: u8, b: u8) -> Rgb {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Color palette for the DNA viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB color of the uniform backbone cartoon.
    pub backbone: Rgb,
    /// RGB color of the selected residue's sticks.
    pub highlight: Rgb,
    /// RGB color of the hover marker sphere.
    pub hover: Rgb,
    /// Per-base stick color keyed by residue name. Kept ordered so the
    /// derived style commands come out in the same order every time.
    pub base_colors: BTreeMap<String, Rgb>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        let adenine = byte_rgb(0x4c, 0xc9, 0xf0);
        let thymine = byte_rgb(0xf7, 0x25, 0x85);
        let guanine = byte_rgb(0xb5, 0x17, 0x9e);
        let cytosine = byte_rgb(0x48, 0x95, 0xef);
        let base_colors = BTreeMap::from([
            ("DA".to_owned(), adenine),
            ("DT".to_owned(), thymine),
            ("DG".to_owned(), guanine),
            ("DC".to_owned(), cytosine),
            ("A".to_owned(), adenine),
            ("U".to_owned(), thymine),
            ("G".to_owned(), guanine),
            ("C".to_owned(), cytosine),
        ]);

        Self {
            backbone: byte_rgb(0x65, 0x72, 0x8a),
            highlight: byte_rgb(0xff, 0xd1, 0x66),
            hover: [1.0, 1.0, 0.0],
            base_colors,
        }
    }
}

impl ColorOptions {
    /// Look up the stick color for a residue name, if it is a known base.
    #[must_use]
    pub fn base_color(&self, res_name: &str) -> Option<Rgb> {
        self.base_colors.get(res_name.trim()).copied()
    }
}
