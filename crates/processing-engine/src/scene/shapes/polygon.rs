use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawQueue};

/// Four-sided polygon payload, vertices in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCmd {
    pub points: [Vec2; 4],
}

/// Triangle payload, vertices in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
}

impl DrawQueue {
    #[inline]
    pub fn push_quad(&mut self, points: [Vec2; 4]) {
        self.push(DrawCmd::Quad(QuadCmd { points }));
    }

    #[inline]
    pub fn push_triangle(&mut self, points: [Vec2; 3]) {
        self.push(DrawCmd::Triangle(TriangleCmd { points }));
    }
}
