//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game
//! buffers direction changes itself, so no repeat or hold handling is needed
//! here: every key press is one request.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
