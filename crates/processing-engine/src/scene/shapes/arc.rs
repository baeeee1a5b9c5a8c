use crate::scene::{ArcMode, DrawCmd, DrawQueue};

/// Arc draw payload.
///
/// `a..d` are interpreted through the ellipse mode active at replay time.
/// `start`/`stop` are radians, clockwise from +X.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub start: f32,
    pub stop: f32,
    pub mode: ArcMode,
}

impl DrawQueue {
    /// Records an arc.
    #[allow(clippy::too_many_arguments)]
    pub fn push_arc(&mut self, a: f32, b: f32, c: f32, d: f32, start: f32, stop: f32, mode: ArcMode) {
        self.push(DrawCmd::Arc(ArcCmd { a, b, c, d, start, stop, mode }));
    }
}
