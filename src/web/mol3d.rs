//! Engine adapters over a 3Dmol.js `GLViewer` object.
//!
//! Both adapters hold the same viewer handle: 3Dmol.js puts styling,
//! lookups, labels, and rendering on one object.

use std::time::Duration;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde_json::{json, Map, Value};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::StrandError;
use crate::options::LabelOptions;
use crate::scene::{AnnotationHandle, SceneRenderer};
use crate::structure::{
    rgb_to_hex, AtomRef, ColorSpec, Selector, StructureEngine, StyleSpec,
};

/// Call `target[method](...args)`.
pub(crate) fn call(
    target: &JsValue,
    method: &str,
    args: &[JsValue],
) -> Result<JsValue, StrandError> {
    let func = js_sys::Reflect::get(target, &JsValue::from_str(method))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| StrandError::Js(format!("{method} is not a function")))?;
    let args = args.iter().collect::<js_sys::Array>();
    func.apply(target, &args).map_err(js_error)
}

pub(crate) fn js_error(value: JsValue) -> StrandError {
    StrandError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Convert a JSON value into a plain JS object.
pub(crate) fn to_js(value: &Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(JsValue::UNDEFINED)
}

fn selector_json(selector: &Selector) -> Value {
    match selector {
        Selector::All => json!({}),
        Selector::Residue(id) => json!({ "resi": id }),
        Selector::ResidueName(name) => json!({ "resn": name }),
        Selector::Element(element) => json!({ "elem": element }),
        Selector::Serial(serial) => json!({ "serial": serial }),
    }
}

fn insert_color(obj: &mut Map<String, Value>, color: ColorSpec) {
    let (key, value) = match color {
        ColorSpec::Fixed(rgb) => ("color", rgb_to_hex(rgb)),
        ColorSpec::Spectrum => ("color", "spectrum".to_owned()),
        ColorSpec::Element => ("colorscheme", "element".to_owned()),
    };
    let _ = obj.insert(key.to_owned(), Value::String(value));
}

fn style_json(style: &StyleSpec) -> Value {
    let mut root = Map::new();
    if let Some(cartoon) = style.cartoon {
        let mut obj = Map::new();
        insert_color(&mut obj, cartoon.color);
        let _ = obj.insert("opacity".to_owned(), json!(cartoon.opacity));
        let _ = obj.insert("thickness".to_owned(), json!(cartoon.thickness));
        let _ = root.insert("cartoon".to_owned(), Value::Object(obj));
    }
    if let Some(stick) = style.stick {
        let mut obj = Map::new();
        insert_color(&mut obj, stick.color);
        let _ = obj.insert("radius".to_owned(), json!(stick.radius));
        let _ = root.insert("stick".to_owned(), Value::Object(obj));
    }
    if let Some(sphere) = style.sphere {
        let _ = root.insert(
            "sphere".to_owned(),
            json!({
                "color": rgb_to_hex(sphere.color),
                "radius": sphere.radius,
                "opacity": sphere.opacity,
            }),
        );
    }
    Value::Object(root)
}

fn label_json(anchor: Vec3, style: &LabelOptions) -> Value {
    json!({
        "position": { "x": anchor.x, "y": anchor.y, "z": anchor.z },
        "backgroundColor": rgb_to_hex(style.background_color),
        "backgroundOpacity": style.background_opacity,
        "fontColor": rgb_to_hex(style.font_color),
        "fontSize": style.font_size,
        "padding": style.padding,
        "borderThickness": style.border_thickness,
    })
}

fn get(obj: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .unwrap_or(JsValue::UNDEFINED)
}

fn get_string(obj: &JsValue, key: &str) -> String {
    get(obj, key).as_string().unwrap_or_default()
}

fn get_f32(obj: &JsValue, key: &str) -> f32 {
    get(obj, key).as_f64().unwrap_or(0.0) as f32
}

/// Read a 3Dmol.js `AtomSpec` object.
pub(crate) fn atom_from_js(atom: &JsValue) -> AtomRef {
    AtomRef {
        serial: get(atom, "serial").as_f64().unwrap_or(0.0) as u32,
        residue_id: get(atom, "resi").as_f64().map(|r| r as i32),
        residue_name: get_string(atom, "resn"),
        chain: get_string(atom, "chain"),
        atom_name: get_string(atom, "atom"),
        element: get_string(atom, "elem"),
        position: Vec3::new(
            get_f32(atom, "x"),
            get_f32(atom, "y"),
            get_f32(atom, "z"),
        ),
    }
}

/// [`StructureEngine`] backed by a 3Dmol.js viewer.
pub struct Mol3dStructure {
    viewer: JsValue,
    ready: bool,
}

impl Mol3dStructure {
    /// Wrap a viewer. Not ready until [`set_ready`](Self::set_ready).
    #[must_use]
    pub fn new(viewer: JsValue) -> Self {
        Self {
            viewer,
            ready: false,
        }
    }

    /// Mark whether the viewer has a model loaded.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
}

impl StructureEngine for Mol3dStructure {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_style(&mut self, selector: &Selector, style: &StyleSpec) {
        let args = [
            to_js(&selector_json(selector)),
            to_js(&style_json(style)),
        ];
        if let Err(e) = call(&self.viewer, "setStyle", &args) {
            log::warn!("setStyle failed: {e}");
        }
    }

    fn clear_styles(&mut self) {
        let args = [to_js(&json!({})), to_js(&json!({}))];
        if let Err(e) = call(&self.viewer, "setStyle", &args) {
            log::warn!("clearing styles failed: {e}");
        }
    }

    fn find_atoms(&self, selector: &Selector) -> Vec<AtomRef> {
        let args = [to_js(&selector_json(selector))];
        match call(&self.viewer, "selectedAtoms", &args) {
            Ok(atoms) => js_sys::Array::from(&atoms)
                .iter()
                .map(|a| atom_from_js(&a))
                .collect(),
            Err(e) => {
                log::warn!("selectedAtoms failed: {e}");
                Vec::new()
            }
        }
    }
}

/// [`SceneRenderer`] backed by a 3Dmol.js viewer.
pub struct Mol3dScene {
    viewer: JsValue,
    labels: FxHashMap<u64, JsValue>,
    next_label: u64,
}

impl Mol3dScene {
    /// Wrap a viewer.
    #[must_use]
    pub fn new(viewer: JsValue) -> Self {
        Self {
            viewer,
            labels: FxHashMap::default(),
            next_label: 1,
        }
    }

    /// Set the canvas background color.
    pub fn set_background(&self, hex: &str) {
        let args = [JsValue::from_str(hex)];
        if let Err(e) = call(&self.viewer, "setBackgroundColor", &args) {
            log::warn!("setBackgroundColor failed: {e}");
        }
    }
}

impl SceneRenderer for Mol3dScene {
    fn create_annotation(
        &mut self,
        text: &str,
        anchor: Vec3,
        style: &LabelOptions,
    ) -> AnnotationHandle {
        let handle = AnnotationHandle::new(self.next_label);
        self.next_label += 1;
        let args = [JsValue::from_str(text), to_js(&label_json(anchor, style))];
        match call(&self.viewer, "addLabel", &args) {
            Ok(label) => {
                let _ = self.labels.insert(handle.raw(), label);
            }
            Err(e) => log::warn!("addLabel failed: {e}"),
        }
        handle
    }

    fn destroy_annotation(&mut self, handle: AnnotationHandle) {
        let Some(label) = self.labels.remove(&handle.raw()) else {
            return;
        };
        if let Err(e) = call(&self.viewer, "removeLabel", &[label]) {
            log::warn!("removeLabel failed: {e}");
        }
    }

    fn request_frame(&mut self) {
        if let Err(e) = call(&self.viewer, "render", &[]) {
            log::warn!("render failed: {e}");
        }
    }

    fn reframe_to_fit(&mut self, duration: Option<Duration>) {
        let args = match duration {
            Some(d) => vec![
                to_js(&json!({})),
                JsValue::from_f64(d.as_millis() as f64),
            ],
            None => Vec::new(),
        };
        if let Err(e) = call(&self.viewer, "zoomTo", &args) {
            log::warn!("zoomTo failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{CartoonStyle, SphereStyle, StickStyle};

    #[test]
    fn selectors_use_atom_spec_keys() {
        assert_eq!(selector_json(&Selector::All), json!({}));
        assert_eq!(selector_json(&Selector::Residue(7)), json!({ "resi": 7 }));
        assert_eq!(
            selector_json(&Selector::ResidueName("DA".to_owned())),
            json!({ "resn": "DA" })
        );
        assert_eq!(selector_json(&Selector::Serial(4)), json!({ "serial": 4 }));
    }

    #[test]
    fn styles_map_to_representation_objects() {
        let style = StyleSpec {
            cartoon: Some(CartoonStyle {
                color: ColorSpec::Spectrum,
                opacity: 0.5,
                thickness: 0.5,
            }),
            stick: Some(StickStyle {
                color: ColorSpec::Element,
                radius: 0.25,
            }),
            sphere: Some(SphereStyle {
                color: [1.0, 1.0, 0.0],
                radius: 0.5,
                opacity: 0.5,
            }),
        };
        assert_eq!(
            style_json(&style),
            json!({
                "cartoon": {
                    "color": "spectrum",
                    "opacity": 0.5,
                    "thickness": 0.5,
                },
                "stick": { "colorscheme": "element", "radius": 0.25 },
                "sphere": { "color": "#ffff00", "radius": 0.5, "opacity": 0.5 },
            })
        );
        assert_eq!(style_json(&StyleSpec::default()), json!({}));
    }
}
