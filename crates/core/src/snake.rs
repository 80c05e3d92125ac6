//! Snake controller - head, facing, and body
//!
//! Owns the head position, the facing direction, and the [`SegmentRing`].
//! Direction requests are buffered until the next movement tick, with at most
//! one change accepted per tick. Collision and apple handling live elsewhere;
//! [`SnakeController::tick`] only moves and wraps the head.

use crate::ring::SegmentRing;
use crate::types::{Direction, GridPosition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeController {
    head: GridPosition,
    direction: Direction,
    /// Direction change buffered for the next tick.
    pending: Option<Direction>,
    /// Head position before the most recent tick.
    previous_head: GridPosition,
    segments: SegmentRing,
}

impl SnakeController {
    /// Snake at the origin, facing right, with no body.
    pub fn new() -> Self {
        Self::with_body(GridPosition::ORIGIN, Direction::Right, SegmentRing::new())
    }

    pub fn with_body(head: GridPosition, direction: Direction, segments: SegmentRing) -> Self {
        Self {
            head,
            direction,
            pending: None,
            previous_head: head,
            segments,
        }
    }

    pub fn head(&self) -> GridPosition {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn has_pending_change(&self) -> bool {
        self.pending.is_some()
    }

    pub fn previous_head(&self) -> GridPosition {
        self.previous_head
    }

    pub fn segments(&self) -> &SegmentRing {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut SegmentRing {
        &mut self.segments
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Rejected when a change is already pending, when `direction` is the
    /// current one, or when it would reverse the snake. Returns whether the
    /// request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.pending.is_some()
            || direction == self.direction
            || direction == self.direction.opposite()
        {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Advance the head one cell on a `width` x `height` toroidal grid.
    ///
    /// Applies the pending direction first and returns the pre-move head, which
    /// the caller feeds into [`SegmentRing::shift_to`].
    pub fn tick(&mut self, width: u16, height: u16) -> GridPosition {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
        self.previous_head = self.head;
        self.head = self.head.step(self.direction, width, height);
        self.previous_head
    }

    /// Back to the initial snake without touching the ring's storage.
    pub fn reset(&mut self) {
        self.head = GridPosition::ORIGIN;
        self.direction = Direction::Right;
        self.pending = None;
        self.previous_head = GridPosition::ORIGIN;
        self.segments.clear();
    }
}

impl Default for SnakeController {
    fn default() -> Self {
        Self::new()
    }
}
