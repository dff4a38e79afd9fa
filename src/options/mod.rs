//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (display toggles, palette, geometry, label style,
//! camera framing, keybindings) are consolidated here. Options serialize
//! to/from TOML for view presets.

mod camera;
mod colors;
mod display;
mod geometry;
mod keybindings;
mod label;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::{
    CartoonColorMode, ControlValue, DisplayControl, DisplayOptions,
};
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
pub use label::{LabelAnchor, LabelOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StrandError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Display toggles and coloring modes.
    pub display: DisplayOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Representation sizes and opacities.
    pub geometry: GeometryOptions,
    /// Selection label style.
    pub label: LabelOptions,
    /// View framing options.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, StrandError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| StrandError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StrandError> {
        let content = std::fs::read_to_string(path).map_err(StrandError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StrandError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StrandError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StrandError::Io)?;
        }
        std::fs::write(path, content).map_err(StrandError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[display]
show_sticks = false
cartoon_color = 'spectrum'
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert!(!opts.display.show_sticks);
        assert_eq!(opts.display.cartoon_color, CartoonColorMode::Spectrum);
        // Everything else should be default
        assert!(opts.display.show_cartoon);
        assert_eq!(opts.geometry.highlight_radius, 0.22);
        assert_eq!(opts.label.anchor, LabelAnchor::ResidueCentroid);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err =
            Options::from_toml_str("[display\nshow_sticks = 1").unwrap_err();
        assert!(matches!(err, StrandError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::Reset));
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::ClearSelection)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_keybindings_survive_loading() {
        let toml_str = r#"
[keybindings.bindings]
reset = "Home"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Home"), Some(KeyAction::Reset));
        assert_eq!(opts.keybindings.lookup("KeyR"), None);
    }

    #[test]
    fn base_color_lookup() {
        let colors = ColorOptions::default();
        assert_eq!(
            colors.base_color(" DA"),
            Some([76.0 / 255.0, 201.0 / 255.0, 240.0 / 255.0])
        );
        assert_eq!(colors.base_color("HOH"), None);
    }

    #[test]
    fn presets_save_load_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = Options::default();
        opts.display.color_by_base = false;
        opts.camera.reframe_duration_ms = 0;
        opts.save(&dir.path().join("flat.toml")).unwrap();
        Options::default()
            .save(&dir.path().join("nested/default.toml"))
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a preset").unwrap();

        let loaded = Options::load(&dir.path().join("flat.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.camera.reframe_duration(), None);
        assert_eq!(Options::list_presets(dir.path()), vec!["flat".to_owned()]);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("display"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("label"));
        assert!(props.contains_key("camera"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));

        let geometry = &props["geometry"]["properties"];
        assert!(geometry.get("stick_radius").is_some());
        assert!(geometry.get("hover_radius").is_none());
    }
}
