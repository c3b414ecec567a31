//! Platform abstraction layer
//!
//! Handles the boundary with the host environment:
//! - Input events (decoded into ship actions)
//! - Frame timing (wall clock or fixed step)

pub mod input;
pub mod time;

pub use input::{FrameInput, InputEvent, InputSource, KeyBindings, KeyCode, ScriptedInput, decode};
pub use time::{Clock, FixedClock, WallClock};
