//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]s for the in-game
//! dispatcher and [`Control`]s for the host (start, reset, quit). Only key presses
//! count; repeats and releases are dropped.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_control_key, handle_key_event, map_key, should_quit, Control, Input};
