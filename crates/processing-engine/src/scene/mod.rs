//! Draw-command queue.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in call order
//! - separate commands that survive across frames (persistent) from per-frame ones
//! - keep shape-specific payloads and push helpers isolated under `scene::shapes`

mod cmd;
mod directives;
mod modes;
mod queue;

pub mod shapes;

pub use cmd::DrawCmd;
pub use modes::{ArcMode, DrawMode};
pub use queue::{DrawItem, DrawQueue};
