//! Platform abstraction layer
//!
//! Handles the parts of browser/native plumbing the game logic cares about:
//! - Input: key identity → game command
//! - Time: frame-to-frame step with stall clamping

pub mod input;
pub mod time;

pub use input::{Command, classify_key};
pub use time::FrameClock;
