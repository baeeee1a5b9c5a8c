use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawQueue};

/// Line segment payload. Lines are stroked only.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
}

/// Single point payload, drawn as a dot of the current stroke weight.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCmd {
    pub at: Vec2,
}

impl DrawQueue {
    #[inline]
    pub fn push_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(DrawCmd::Line(LineCmd {
            from: Vec2::new(x1, y1),
            to: Vec2::new(x2, y2),
        }));
    }

    #[inline]
    pub fn push_point(&mut self, x: f32, y: f32) {
        self.push(DrawCmd::Point(PointCmd { at: Vec2::new(x, y) }));
    }
}
