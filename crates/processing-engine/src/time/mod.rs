//! Time subsystem.
//!
//! Frame pacing without coupling to the runtime:
//! - one `FrameClock` per window loop
//! - the runtime sleeps until `deadline()`, then calls `tick()` once per frame

mod frame_clock;

pub use frame_clock::{DEFAULT_FRAME_RATE, FrameClock, FrameTime};
