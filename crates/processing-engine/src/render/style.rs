use tiny_skia::Transform;

use crate::paint::Color;
use crate::scene::DrawMode;

/// Drawing attributes in effect while the queue is replayed.
///
/// `PushStyle` snapshots the whole struct (transform included); `PushMatrix`
/// snapshots only `transform`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleState {
    /// `None` after `no_fill`.
    pub fill: Option<Color>,
    /// `None` after `no_stroke`.
    pub stroke: Option<Color>,
    pub stroke_weight: f32,
    pub ellipse_mode: DrawMode,
    pub rect_mode: DrawMode,
    /// Sketch transform, applied after the framebuffer's base scale.
    pub transform: Transform,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: Some(Color::BLACK),
            stroke_weight: 1.0,
            ellipse_mode: DrawMode::Center,
            rect_mode: DrawMode::Corner,
            transform: Transform::identity(),
        }
    }
}
