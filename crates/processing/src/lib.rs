//! Processing-style creative coding on top of `processing-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use processing::prelude::*;
//!
//! struct Hello;
//!
//! impl Sketch for Hello {
//!     fn setup(&mut self, p: &mut Applet) {
//!         p.size(200, 200);
//!     }
//!
//!     fn draw(&mut self, p: &mut Applet) {
//!         p.background(204);
//!         p.fill((255, 0, 0));
//!         p.circle(p.mouse_x(), p.mouse_y(), 20.0);
//!     }
//! }
//!
//! fn main() -> Result<(), SketchError> {
//!     Processing::new().title("Hello").run(Hello)
//! }
//! ```

pub mod app;
pub mod applet;
pub mod color;
pub mod environment;
pub mod math;
pub mod sketch;
pub mod vector;

pub use app::{Processing, SketchConfig};
pub use applet::Applet;
pub use sketch::Sketch;

/// Everything a sketch needs in one import.
pub mod prelude {
    pub use crate::app::{Processing, SketchConfig};
    pub use crate::applet::Applet;
    pub use crate::color::{Channels, Color, ColorMode, ColorParseError};
    pub use crate::environment::{Args, Renderer, SketchError, print, println};
    pub use crate::math::*;
    pub use crate::sketch::Sketch;
    pub use crate::vector::{PVector, VectorError};

    pub use processing_engine::input::{Key, MouseButton};
    pub use processing_engine::logging::LoggingConfig;
    pub use processing_engine::scene::{ArcMode, DrawMode};
}
