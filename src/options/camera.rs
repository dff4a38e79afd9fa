use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::structure::Rgb;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// View framing parameters.
pub struct CameraOptions {
    /// Duration of the animated reframe on reset, in milliseconds. Zero
    /// snaps immediately.
    #[schemars(
        title = "Reset Animation (ms)",
        range(min = 0, max = 3000),
        extend("step" = 100)
    )]
    pub reframe_duration_ms: u32,
    /// Viewer background color.
    #[schemars(skip)]
    pub background: Rgb,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            reframe_duration_ms: 1000,
            background: [
                0x0f as f32 / 255.0,
                0x11 as f32 / 255.0,
                0x15 as f32 / 255.0,
            ],
        }
    }
}

impl CameraOptions {
    /// Reframe animation length, or `None` to snap.
    #[must_use]
    pub fn reframe_duration(&self) -> Option<std::time::Duration> {
        (self.reframe_duration_ms > 0).then(|| {
            std::time::Duration::from_millis(u64::from(
                self.reframe_duration_ms,
            ))
        })
    }
}
