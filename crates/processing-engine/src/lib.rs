//! Processing engine crate.
//!
//! Platform runtime and CPU canvas used by the `processing` sketch layer:
//! - `window`: winit event loop, single fixed-size window, frame pacing
//! - `device`: softbuffer presentation
//! - `input`: platform-agnostic input events and per-frame state
//! - `scene`: the draw-command queue sketches record into
//! - `render`: tiny-skia rasterizer replaying that queue
//! - `coords`, `paint`: geometry and color value types

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
