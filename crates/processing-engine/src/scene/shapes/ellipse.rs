use crate::scene::{DrawCmd, DrawQueue};

/// Ellipse draw payload; `a..d` follow the ellipse mode active at replay time.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl DrawQueue {
    /// Records an ellipse.
    #[inline]
    pub fn push_ellipse(&mut self, a: f32, b: f32, c: f32, d: f32) {
        self.push(DrawCmd::Ellipse(EllipseCmd { a, b, c, d }));
    }
}
