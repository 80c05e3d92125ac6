//! Game snapshot - allocation-free, read-only view of one frame for renderers

use arrayvec::ArrayVec;

use crate::types::{Direction, GamePhase, GridPosition, MAX_SEGMENTS};

/// Read-only copy of everything a renderer needs for one frame.
///
/// Segments are stored inline, so filling a snapshot with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into) never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub head: GridPosition,
    pub direction: Direction,
    /// Head sprite rotation in degrees.
    pub head_angle: u16,
    /// Head-to-tail.
    pub segments: ArrayVec<GridPosition, MAX_SEGMENTS>,
    pub apple: Option<GridPosition>,
    pub score: u32,
    pub phase: GamePhase,
    pub episode_id: u32,
    pub seed: u64,
    pub ticks: u32,
    pub apples_eaten: u32,
    pub move_timer_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.head = GridPosition::ORIGIN;
        self.direction = Direction::Right;
        self.head_angle = Direction::Right.render_angle();
        self.segments.clear();
        self.apple = None;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.episode_id = 0;
        self.seed = 0;
        self.ticks = 0;
        self.apples_eaten = 0;
        self.move_timer_ms = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Head plus body.
    pub fn snake_len(&self) -> usize {
        self.segments.len() + 1
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            head: GridPosition::ORIGIN,
            direction: Direction::Right,
            head_angle: 0,
            segments: ArrayVec::new(),
            apple: None,
            score: 0,
            phase: GamePhase::Playing,
            episode_id: 0,
            seed: 0,
            ticks: 0,
            apples_eaten: 0,
            move_timer_ms: 0,
        };
        s.clear();
        s
    }
}
