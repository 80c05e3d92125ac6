//! Game state module - manages the complete game state
//!
//! This module ties together the snake, the apple, scoring, and the game phase.
//! It owns the movement accumulator that turns per-frame elapsed time into fixed
//! movement ticks, and it is the only place where detection (pure predicates in
//! [`collision`](crate::collision)) turns into effects.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::apple::AppleState;
use crate::collision::{award_apple, check_apple_eaten, check_self_collision};
use crate::ring::SegmentRing;
use crate::snake::SnakeController;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    snake: SnakeController,
    apple: AppleState,
    rng: StdRng,
    seed: u64,
    score: u32,
    phase: GamePhase,
    /// Milliseconds accumulated toward the next movement tick.
    move_timer_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Movement ticks in the current episode.
    ticks: u32,
    apples_eaten: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_snake(seed, SnakeController::new())
    }

    /// Create a game around a prepared snake (scenario setups, replays).
    pub fn with_snake(seed: u64, snake: SnakeController) -> Self {
        Self {
            snake,
            apple: AppleState::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
            score: 0,
            phase: GamePhase::Playing,
            move_timer_ms: 0,
            episode_id: 0,
            ticks: 0,
            apples_eaten: 0,
        }
    }

    /// Create a game with the head at `head` facing `direction` and a body
    /// listed head-to-tail.
    pub fn with_body(
        seed: u64,
        head: GridPosition,
        direction: Direction,
        body: &[GridPosition],
    ) -> Self {
        let ring = SegmentRing::from_positions(body.iter().copied());
        Self::with_snake(seed, SnakeController::with_body(head, direction, ring))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    pub fn move_timer_ms(&self) -> u32 {
        self.move_timer_ms
    }

    pub fn head(&self) -> GridPosition {
        self.snake.head()
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    /// Body segments, head-to-tail.
    pub fn segments(&self) -> &SegmentRing {
        self.snake.segments()
    }

    pub fn snake(&self) -> &SnakeController {
        &self.snake
    }

    pub fn apple(&self) -> &AppleState {
        &self.apple
    }

    /// Force an available apple at `position` (replays, scripted setups).
    pub fn place_apple(&mut self, position: GridPosition) {
        self.apple.place(position);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.head = self.snake.head();
        out.direction = self.snake.direction();
        out.head_angle = self.snake.direction().render_angle();
        out.segments.clear();
        // The ring and the snapshot share MAX_SEGMENTS as capacity.
        out.segments.extend(self.snake.segments().iter());
        out.apple = self.apple.current();
        out.score = self.score;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.ticks = self.ticks;
        out.apples_eaten = self.apples_eaten;
        out.move_timer_ms = self.move_timer_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Buffer a direction change for the next movement tick.
    ///
    /// Ignored once the game is over. Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.snake.request_direction(direction)
    }

    /// Per-frame driver.
    ///
    /// Respawns a missing apple, accumulates `elapsed_ms`, and runs exactly one
    /// [`GameState::step`] once the accumulator reaches [`MOVE_INTERVAL_MS`],
    /// resetting it to zero. Does nothing while the game is over. Returns whether
    /// a movement tick ran.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        if !self.apple.available() {
            self.spawn_apple();
        }

        self.move_timer_ms = self.move_timer_ms.saturating_add(elapsed_ms);
        if self.move_timer_ms < MOVE_INTERVAL_MS {
            return false;
        }
        self.move_timer_ms = 0;
        self.step();
        true
    }

    /// One movement tick: move and wrap the head, shift the body, then resolve
    /// self-collision and apple eating.
    ///
    /// Both checks run on the same tick, so an apple under the body cell that
    /// ends the game still counts toward the final score.
    pub fn step(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let previous_head = self.snake.tick(WORLD_WIDTH, WORLD_HEIGHT);
        self.snake.segments_mut().shift_to(previous_head);
        self.ticks = self.ticks.wrapping_add(1);

        let head = self.snake.head();
        let collided = check_self_collision(head, self.snake.segments());
        if collided {
            self.phase = GamePhase::GameOver;
        }

        if check_apple_eaten(head, &self.apple) {
            self.snake.segments_mut().grow_at(head);
            self.score = award_apple(self.score);
            self.apples_eaten = self.apples_eaten.wrapping_add(1);
            self.apple.consume();
            debug!(x = head.x, y = head.y, score = self.score, "apple eaten");
        }

        if collided {
            info!(
                score = self.score,
                length = self.snake.segments().len() + 1,
                ticks = self.ticks,
                "game over"
            );
        }
    }

    fn spawn_apple(&mut self) {
        let head = self.snake.head();
        if self
            .apple
            .spawn(&mut self.rng, head, WORLD_WIDTH, WORLD_HEIGHT)
        {
            let pos = self.apple.position();
            debug!(x = pos.x, y = pos.y, "apple spawned");
        }
    }

    /// Reset to a fresh episode: score 0, no body, head at the origin facing
    /// right, apple and movement timer cleared. The RNG keeps its stream.
    pub fn restart(&mut self) {
        self.snake.reset();
        self.apple = AppleState::new();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.move_timer_ms = 0;
        self.ticks = 0;
        self.apples_eaten = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "restart");
    }

    /// Apply an input action. Returns whether it changed anything.
    ///
    /// `TurnClockwise` on the game-over screen restarts and then turns the fresh
    /// snake clockwise, like any other tap.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let phase = self.phase;
        let accepted = match action {
            GameAction::Turn(direction) => self.request_direction(direction),
            GameAction::TurnClockwise => {
                let restarted = self.game_over();
                if restarted {
                    self.restart();
                }
                let next = self.snake.direction().clockwise();
                self.request_direction(next) || restarted
            }
            GameAction::Restart => {
                if self.game_over() {
                    self.restart();
                    true
                } else {
                    false
                }
            }
        };
        debug!(
            action = action.as_str(),
            phase = phase.as_str(),
            accepted,
            "action"
        );
        accepted
    }
}
