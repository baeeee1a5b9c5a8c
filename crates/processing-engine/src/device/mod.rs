//! Window presentation.
//!
//! Owns the `softbuffer` surface of the sketch window and copies rasterized
//! framebuffers onto it.

mod error;
mod presenter;

pub use error::SurfaceErrorAction;
pub use presenter::Presenter;
