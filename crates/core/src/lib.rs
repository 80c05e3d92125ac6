//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical apple placements
//! - **Testable**: Unit tests for every rule, scenario tests under `tests/`
//! - **Portable**: Any front-end (terminal, GUI, headless) drives it the same way
//! - **Fast**: Zero-allocation hot paths for ticks, input, and snapshots
//!
//! # Module Structure
//!
//! - [`ring`]: fixed-capacity ring buffer holding the body segments
//! - [`snake`]: head, facing direction, one-change-per-tick direction buffering
//! - [`apple`]: apple placement excluding the head cell
//! - [`collision`]: apple-eat and self-collision predicates, per-apple reward
//! - [`game_state`]: PLAYING / GAME_OVER machine and the movement accumulator
//! - [`snapshot`]: allocation-free read-only view for renderers
//!
//! # Game Rules
//!
//! - **Toroidal world**: leaving one edge re-enters at the opposite edge
//! - **No reversal**: turning straight back is ignored
//! - **One turn per tick**: the first accepted turn wins until the snake moves
//! - **Growth**: each apple adds one body segment and 10 points
//! - **Game over**: the head moving onto the body; restart resets everything
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GridPosition, MOVE_INTERVAL_MS};
//!
//! let mut game = GameState::new(12345);
//! game.place_apple(GridPosition::new(1, 0));
//!
//! // One movement interval moves the head onto the apple.
//! assert!(game.advance(MOVE_INTERVAL_MS));
//! assert_eq!(game.head(), GridPosition::new(1, 0));
//! assert_eq!(game.score(), 10);
//!
//! game.request_direction(Direction::Up);
//! game.advance(MOVE_INTERVAL_MS);
//! assert_eq!(game.head(), GridPosition::new(1, 1));
//! ```
//!
//! # Timing
//!
//! The caller reports elapsed milliseconds once per frame through
//! [`GameState::advance`](game_state::GameState::advance). Every
//! [`MOVE_INTERVAL_MS`](types::MOVE_INTERVAL_MS) of accumulated time runs one
//! movement tick, independent of how often frames arrive.

pub mod apple;
pub mod collision;
pub mod game_state;
pub mod ring;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use apple::AppleState;
pub use collision::{award_apple, check_apple_eaten, check_self_collision};
pub use game_state::GameState;
pub use ring::{SegmentIter, SegmentRing};
pub use snake::SnakeController;
pub use snapshot::GameSnapshot;
