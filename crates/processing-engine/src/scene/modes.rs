use crate::coords::{Rect, Vec2};

/// How the four numbers passed to `rect`/`ellipse`/`arc` are interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DrawMode {
    /// `(x, y, w, h)`: top-left corner plus size.
    #[default]
    Corner,
    /// `(x1, y1, x2, y2)`: two opposite corners.
    Corners,
    /// `(cx, cy, w, h)`: center plus size.
    Center,
    /// `(cx, cy, rx, ry)`: center plus half-size.
    Radius,
}

impl DrawMode {
    /// Resolves raw shape arguments to a bounding box.
    pub fn resolve(self, a: f32, b: f32, c: f32, d: f32) -> Rect {
        match self {
            DrawMode::Corner => Rect::new(a, b, c, d),
            DrawMode::Corners => Rect::from_corners(Vec2::new(a, b), Vec2::new(c, d)),
            DrawMode::Center => Rect::from_center(Vec2::new(a, b), c, d),
            DrawMode::Radius => Rect::new(a - c, b - d, 2.0 * c, 2.0 * d),
        }
    }
}

/// Fill/outline behavior of `arc`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ArcMode {
    /// Filled like a pie slice, outlined only along the curve.
    #[default]
    OpenPie,
    /// Filled between the end points, outlined only along the curve.
    Open,
    /// Filled and outlined as a closed chord.
    Chord,
    /// Filled and outlined as a closed pie slice.
    Pie,
}
