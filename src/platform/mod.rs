//! Platform abstraction layer
//!
//! Handles the pieces of the outer loop that are not simulation:
//! - Input sources polled once per tick
//! - Frame pacing

pub mod input;
pub mod time;

pub use input::{Autopilot, InputSource, ScriptedInput};
pub use time::FrameLimiter;
