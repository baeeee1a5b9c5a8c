//! Core engine-facing contracts.
//!
//! Defines the interface between the window runtime and higher layers (the
//! sketch API) and the per-frame context handed across it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
