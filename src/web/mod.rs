//! Browser bindings (feature `web`).
//!
//! [`WebViewer`] wires a 3Dmol.js viewer on the page to a
//! [`SelectionController`]. The page keeps ownership of the DOM: it
//! creates the 3Dmol viewer, downloads the model, and forwards pick,
//! hover, checkbox, and key events to the methods here.
//!
//! ```js
//! init_web_logging();
//! const glviewer = $3Dmol.createViewer('viewer');
//! const view = new WebViewer(glviewer, { 'cb-sticks': cbSticks.checked });
//! $3Dmol.download('pdb:1BNA', glviewer, {}, () => {
//!     view.model_loaded();
//!     glviewer.getModel().setClickable({}, true, (a) => view.atom_clicked(a));
//! });
//! ```

mod mol3d;

use std::collections::BTreeMap;

pub use mol3d::{Mol3dScene, Mol3dStructure};
use wasm_bindgen::prelude::*;

use crate::controller::SelectionController;
use crate::input::{InputEvent, InputProcessor};
use crate::options::{ControlValue, DisplayOptions, Options};
use crate::structure::rgb_to_hex;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen]
pub fn init_web_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// One DNA viewer on the page.
#[wasm_bindgen]
pub struct WebViewer {
    controller: SelectionController<Mol3dStructure, Mol3dScene>,
    input: InputProcessor,
}

#[wasm_bindgen]
impl WebViewer {
    /// Wrap a 3Dmol.js viewer.
    ///
    /// `controls` is an object mapping control ids to their initial values
    /// (`{ "cb-sticks": true }`); missing controls use defaults.
    /// `preset_toml` optionally supplies full options.
    #[wasm_bindgen(constructor)]
    // wasm-bindgen hands strings over owned
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(
        viewer: &JsValue,
        controls: &JsValue,
        preset_toml: Option<String>,
    ) -> Result<WebViewer, JsValue> {
        let mut options = match preset_toml {
            Some(text) => Options::from_toml_str(&text)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Options::default(),
        };
        let initial = initial_controls(controls)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        options.display = DisplayOptions::from_controls(
            initial.iter().map(|(name, value)| (name.as_str(), value.clone())),
        );

        let scene = Mol3dScene::new(viewer.clone());
        scene.set_background(&rgb_to_hex(options.camera.background));
        let input =
            InputProcessor::with_key_bindings(options.keybindings.clone());
        let controller = SelectionController::new(
            Mol3dStructure::new(viewer.clone()),
            scene,
            options,
        );
        Ok(Self { controller, input })
    }

    /// The model finished downloading.
    pub fn model_loaded(&mut self) {
        self.controller.structure_mut().set_ready(true);
        self.dispatch(InputEvent::ModelLoaded);
    }

    /// An atom was clicked.
    pub fn atom_clicked(&mut self, atom: &JsValue) {
        self.dispatch(InputEvent::Pick(mol3d::atom_from_js(atom)));
    }

    /// The pointer moved onto an atom.
    pub fn hover_enter(&mut self, atom: &JsValue) {
        self.dispatch(InputEvent::HoverEnter(mol3d::atom_from_js(atom)));
    }

    /// The pointer moved off an atom.
    pub fn hover_leave(&mut self, atom: &JsValue) {
        self.dispatch(InputEvent::HoverLeave(mol3d::atom_from_js(atom)));
    }

    /// A checkbox (boolean) or selector (string) changed.
    pub fn control_changed(&mut self, control: &str, value: &JsValue) {
        let value = if let Some(on) = value.as_bool() {
            ControlValue::Bool(on)
        } else if let Some(choice) = value.as_string() {
            ControlValue::Choice(choice)
        } else {
            log::warn!("control '{control}' sent a non-bool, non-string value");
            return;
        };
        self.dispatch(InputEvent::ControlChanged {
            control: control.to_owned(),
            value,
        });
    }

    /// A key was pressed (`KeyboardEvent.code`).
    pub fn key_pressed(&mut self, code: &str) {
        self.dispatch(InputEvent::KeyPressed {
            code: code.to_owned(),
        });
    }

    /// The reset button was pressed.
    pub fn reset(&mut self) {
        self.dispatch(InputEvent::ResetPressed);
    }

    /// Current display options, for syncing the page's controls.
    #[must_use]
    pub fn display_options(&self) -> JsValue {
        serde_json::to_value(self.controller.display())
            .map_or(JsValue::NULL, |v| mol3d::to_js(&v))
    }

    /// Info box text for the selection, if any.
    #[must_use]
    pub fn selection_info(&self) -> Option<String> {
        self.controller.selection_info().map(ToString::to_string)
    }

    /// Id of the selected residue, if any.
    #[must_use]
    pub fn selected_residue(&self) -> Option<i32> {
        self.controller.selection().residue_id()
    }

    /// JSON Schema of the UI-exposed options.
    #[must_use]
    pub fn options_schema() -> JsValue {
        serde_json::to_value(Options::json_schema())
            .map_or(JsValue::NULL, |v| mol3d::to_js(&v))
    }

    fn dispatch(&mut self, event: InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.controller.execute(cmd);
        }
    }
}

impl Drop for WebViewer {
    fn drop(&mut self) {
        self.controller.teardown();
    }
}

fn initial_controls(
    controls: &JsValue,
) -> Result<BTreeMap<String, ControlValue>, crate::error::StrandError> {
    if controls.is_undefined() || controls.is_null() {
        return Ok(BTreeMap::new());
    }
    let text = js_sys::JSON::stringify(controls)
        .map_err(mol3d::js_error)?
        .as_string()
        .unwrap_or_default();
    serde_json::from_str(&text)
        .map_err(|e| crate::error::StrandError::Js(e.to_string()))
}
