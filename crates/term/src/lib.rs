//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. The view renders a
//! [`core::GameSnapshot`] into a framebuffer, and the renderer flushes the
//! framebuffer to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Render from snapshots only, never from live game state
//! - Control the aspect ratio (2 chars wide per world cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
