//! The scene-rendering capability the controller consumes.
//!
//! Labels live in the renderer; the controller only holds the
//! [`AnnotationHandle`] it was given and hands it back to destroy the label.

use std::time::Duration;

use glam::Vec3;

use crate::options::LabelOptions;

/// Opaque reference to an on-screen label owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationHandle(u64);

impl AnnotationHandle {
    /// Wrap a renderer-assigned id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The renderer-assigned id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Frame, camera, and label operations on the 3D view.
pub trait SceneRenderer {
    /// Whether the renderer can accept calls. Most renderers are usable as
    /// soon as they exist.
    fn is_ready(&self) -> bool {
        true
    }

    /// Create a text label anchored at a world-space point.
    fn create_annotation(
        &mut self,
        text: &str,
        anchor: Vec3,
        style: &LabelOptions,
    ) -> AnnotationHandle;

    /// Remove a label created by
    /// [`create_annotation`](Self::create_annotation).
    fn destroy_annotation(&mut self, handle: AnnotationHandle);

    /// Schedule a redraw with the current scene state.
    fn request_frame(&mut self);

    /// Move the camera to frame the whole model, animating over `duration`
    /// when given.
    fn reframe_to_fit(&mut self, duration: Option<Duration>);
}
