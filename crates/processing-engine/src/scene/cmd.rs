use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::DrawMode;
use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::{LineCmd, PointCmd};
use crate::scene::shapes::polygon::{QuadCmd, TriangleCmd};
use crate::scene::shapes::rect::{RectCmd, RoundedRectCmd};

/// Renderer-agnostic draw command.
///
/// Shape variants carry the raw arguments the sketch passed; interpretation
/// (shape modes, current fill/stroke, transform) happens at replay time so a
/// `rect_mode` issued earlier in the queue affects later rects only.
///
/// Extending the queue:
/// - add a payload module under `scene::shapes::*` with its push helpers
/// - add a new variant here
/// - handle it in `render::Rasterizer::apply`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    // Shapes
    Arc(ArcCmd),
    Ellipse(EllipseCmd),
    Line(LineCmd),
    Point(PointCmd),
    Quad(QuadCmd),
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Triangle(TriangleCmd),

    // Style
    PushStyle,
    PopStyle,
    Background(Color),
    Fill(Color),
    NoFill,
    Stroke(Color),
    NoStroke,
    EllipseMode(DrawMode),
    RectMode(DrawMode),
    StrokeWeight(f32),

    // Transform
    Rotate(f32),
    Translate(Vec2),
    Scale(Vec2),
    PushMatrix,
    PopMatrix,
}
