//! Push helpers for style and transform directives.

use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, DrawMode, DrawQueue};

impl DrawQueue {
    pub fn push_style(&mut self) {
        self.push(DrawCmd::PushStyle);
    }

    pub fn pop_style(&mut self) {
        self.push(DrawCmd::PopStyle);
    }

    pub fn background(&mut self, color: Color) {
        self.push(DrawCmd::Background(color));
    }

    pub fn fill(&mut self, color: Color) {
        self.push(DrawCmd::Fill(color));
    }

    pub fn no_fill(&mut self) {
        self.push(DrawCmd::NoFill);
    }

    pub fn stroke(&mut self, color: Color) {
        self.push(DrawCmd::Stroke(color));
    }

    pub fn no_stroke(&mut self) {
        self.push(DrawCmd::NoStroke);
    }

    pub fn ellipse_mode(&mut self, mode: DrawMode) {
        self.push(DrawCmd::EllipseMode(mode));
    }

    pub fn rect_mode(&mut self, mode: DrawMode) {
        self.push(DrawCmd::RectMode(mode));
    }

    pub fn stroke_weight(&mut self, weight: f32) {
        self.push(DrawCmd::StrokeWeight(weight));
    }

    /// Rotation in radians, clockwise on screen.
    pub fn rotate(&mut self, angle: f32) {
        self.push(DrawCmd::Rotate(angle));
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCmd::Translate(Vec2::new(x, y)));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.push(DrawCmd::Scale(Vec2::new(sx, sy)));
    }

    pub fn push_matrix(&mut self) {
        self.push(DrawCmd::PushMatrix);
    }

    pub fn pop_matrix(&mut self) {
        self.push(DrawCmd::PopMatrix);
    }
}
