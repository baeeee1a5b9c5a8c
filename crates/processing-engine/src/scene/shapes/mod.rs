pub(crate) mod arc;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rect;

pub use arc::ArcCmd;
pub use ellipse::EllipseCmd;
pub use line::{LineCmd, PointCmd};
pub use polygon::{QuadCmd, TriangleCmd};
pub use rect::{RectCmd, RoundedRectCmd};
