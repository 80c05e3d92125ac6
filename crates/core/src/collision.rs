//! Collision detection and scoring
//!
//! Pure predicates over the current state. Callers apply the effects: growth and
//! score on an apple, the game-over transition on a self-collision.

use crate::apple::AppleState;
use crate::ring::SegmentRing;
use crate::types::{GridPosition, POINTS_PER_APPLE};

/// The head is on an available apple.
pub fn check_apple_eaten(head: GridPosition, apple: &AppleState) -> bool {
    apple.available() && apple.position() == head
}

/// The head is on one of the body segments.
pub fn check_self_collision(head: GridPosition, segments: &SegmentRing) -> bool {
    segments.contains(head)
}

/// Score after eating one apple.
pub fn award_apple(score: u32) -> u32 {
    score.saturating_add(POINTS_PER_APPLE)
}
