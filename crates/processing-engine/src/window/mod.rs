//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single sketch window, paces frames with
//! a `FrameClock`, and presents through `device::Presenter`.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
