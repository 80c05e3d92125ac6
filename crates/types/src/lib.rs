//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, graphical front-ends).
//!
//! # World Dimensions
//!
//! The world is a toroidal grid:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14), `y` grows upward
//! - **Cell size**: 32 pixels, for collaborators that draw in world space
//! - **Start position**: (0, 0) facing right
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_INTERVAL_MS` | 180 | Time between movement ticks |
//! | `FRAME_MS` | 16 | Default front-end frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, GridPosition, WORLD_HEIGHT, WORLD_WIDTH};
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::Up.render_angle(), 180);
//!
//! let pos = GridPosition::new(WORLD_WIDTH - 1, 0);
//! assert_eq!(pos.step(Direction::Right, WORLD_WIDTH, WORLD_HEIGHT), GridPosition::ORIGIN);
//!
//! assert_eq!(GameAction::Turn(Direction::Up).as_str(), "up");
//! ```

/// World width in cells (20 columns)
pub const WORLD_WIDTH: u16 = 20;

/// World height in cells (15 rows)
pub const WORLD_HEIGHT: u16 = 15;

/// Edge length of one grid cell in world pixels (32)
pub const CELL_SIZE: u32 = 32;

/// Interval between movement ticks in milliseconds (0.18s)
pub const MOVE_INTERVAL_MS: u32 = 180;

/// Score awarded for every apple eaten
pub const POINTS_PER_APPLE: u32 = 10;

/// Default front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Number of slots in the segment ring: one per grid cell.
pub const MAX_SEGMENTS: usize = (WORLD_WIDTH as usize) * (WORLD_HEIGHT as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gameplay_constants() {
        assert_eq!(WORLD_WIDTH, 20);
        assert_eq!(WORLD_HEIGHT, 15);
        assert_eq!(CELL_SIZE, 32);
        assert_eq!(MOVE_INTERVAL_MS, 180);
        assert_eq!(POINTS_PER_APPLE, 10);
        assert_eq!(MAX_SEGMENTS, 300);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn clockwise_cycles_through_all_four() {
        let mut d = Direction::Right;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(d);
            d = d.clockwise();
        }
        assert_eq!(d, Direction::Right);
        assert_eq!(
            seen,
            vec![Direction::Right, Direction::Down, Direction::Left, Direction::Up]
        );
    }

    #[test]
    fn step_wraps_on_every_edge() {
        let (w, h) = (WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(
            GridPosition::new(0, 3).step(Direction::Left, w, h),
            GridPosition::new(w - 1, 3)
        );
        assert_eq!(
            GridPosition::new(w - 1, 3).step(Direction::Right, w, h),
            GridPosition::new(0, 3)
        );
        assert_eq!(
            GridPosition::new(4, 0).step(Direction::Down, w, h),
            GridPosition::new(4, h - 1)
        );
        assert_eq!(
            GridPosition::new(4, h - 1).step(Direction::Up, w, h),
            GridPosition::new(4, 0)
        );
    }

    #[test]
    fn step_moves_one_cell() {
        let p = GridPosition::new(5, 5);
        assert_eq!(p.step(Direction::Up, 20, 15), GridPosition::new(5, 6));
        assert_eq!(p.step(Direction::Down, 20, 15), GridPosition::new(5, 4));
        assert_eq!(p.step(Direction::Left, 20, 15), GridPosition::new(4, 5));
        assert_eq!(p.step(Direction::Right, 20, 15), GridPosition::new(6, 5));
    }

    #[test]
    fn log_names_are_stable() {
        assert_eq!(Direction::Down.as_str(), "down");
        assert_eq!(GamePhase::Playing.as_str(), "playing");
        assert_eq!(GamePhase::GameOver.as_str(), "game_over");
        assert_eq!(GameAction::Turn(Direction::Up).as_str(), "up");
        assert_eq!(GameAction::TurnClockwise.as_str(), "turnClockwise");
    }

    #[test]
    fn world_pixels_scale_by_cell_size() {
        assert_eq!(GridPosition::new(3, 2).to_world_px(), (96, 64));
    }
}

/// A cell on the world grid.
///
/// Coordinates are in cell units. Positions produced by [`GridPosition::step`]
/// are always inside the world bounds passed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPosition {
    pub x: u16,
    pub y: u16,
}

impl GridPosition {
    /// Bottom-left cell; where the snake starts.
    pub const ORIGIN: GridPosition = GridPosition { x: 0, y: 0 };

    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Move one cell in `direction`, re-entering on the opposite edge when the
    /// move leaves a `width` x `height` grid.
    pub fn step(self, direction: Direction, width: u16, height: u16) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: wrap_axis(self.x, dx, width),
            y: wrap_axis(self.y, dy, height),
        }
    }

    /// Whether this position lies inside a `width` x `height` grid.
    pub fn in_bounds(self, width: u16, height: u16) -> bool {
        self.x < width && self.y < height
    }

    /// Bottom-left corner of this cell in world pixels.
    pub fn to_world_px(self) -> (u32, u32) {
        (self.x as u32 * CELL_SIZE, self.y as u32 * CELL_SIZE)
    }
}

#[inline]
fn wrap_axis(v: u16, delta: i8, size: u16) -> u16 {
    let size = i32::from(size.max(1));
    (i32::from(v) + i32::from(delta)).rem_euclid(size) as u16
}

/// Facing direction of the snake head.
///
/// Associations (opposite, unit step, render angle, clockwise turn) are table
/// lookups keyed by [`Direction::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const OPPOSITE: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

const DELTA: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Sprite rotation in degrees for a head texture that points down at 0°.
const RENDER_ANGLE: [u16; 4] = [180, 0, 270, 90];

const CLOCKWISE: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The direction that would reverse the snake onto its own neck.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub const fn opposite(self) -> Self {
        OPPOSITE[self.index()]
    }

    /// Unit step `(dx, dy)` with `y` growing upward.
    pub const fn delta(self) -> (i8, i8) {
        DELTA[self.index()]
    }

    pub const fn render_angle(self) -> u16 {
        RENDER_ANGLE[self.index()]
    }

    /// Quarter turn clockwise (as seen with `y` pointing up).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Right.clockwise(), Direction::Down);
    /// assert_eq!(Direction::Up.clockwise(), Direction::Right);
    /// ```
    pub const fn clockwise(self) -> Self {
        CLOCKWISE[self.index()]
    }

    /// Name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// The snake moves every tick.
    #[default]
    Playing,
    /// Terminal until restart; nothing advances.
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Inputs an input-polling collaborator can feed into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new facing direction (applied on the next tick)
    Turn(Direction),
    /// Request a quarter turn clockwise; restarts the game when it is over
    TurnClockwise,
    /// Start a fresh game (only honoured once the game is over)
    Restart,
}

impl GameAction {
    /// Name used in log fields; turns report their direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::Turn(Direction::Left).as_str(), "left");
    /// assert_eq!(GameAction::TurnClockwise.as_str(), "turnClockwise");
    /// assert_eq!(GameAction::Restart.as_str(), "restart");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(d) => d.as_str(),
            GameAction::TurnClockwise => "turnClockwise",
            GameAction::Restart => "restart",
        }
    }
}
