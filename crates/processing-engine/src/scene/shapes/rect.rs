use crate::coords::CornerRadii;
use crate::scene::{DrawCmd, DrawQueue};

/// Rectangle payload; `a..d` follow the rect mode active at replay time.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

/// Rounded rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub radii: CornerRadii,
}

impl DrawQueue {
    /// Records a sharp-cornered rectangle.
    #[inline]
    pub fn push_rect(&mut self, a: f32, b: f32, c: f32, d: f32) {
        self.push(DrawCmd::Rect(RectCmd { a, b, c, d }));
    }

    /// Records a rounded rectangle with per-corner radii.
    #[inline]
    pub fn push_rounded_rect(&mut self, a: f32, b: f32, c: f32, d: f32, radii: CornerRadii) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd { a, b, c, d, radii }));
    }

    /// Records a rounded rectangle with a uniform corner radius.
    #[inline]
    pub fn push_uniform_rounded_rect(&mut self, a: f32, b: f32, c: f32, d: f32, radius: f32) {
        self.push_rounded_rect(a, b, c, d, CornerRadii::all(radius));
    }
}
