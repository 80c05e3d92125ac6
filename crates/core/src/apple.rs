//! Apple spawner
//!
//! The apple is placed uniformly at random on the grid, redrawing while the
//! drawn cell is the snake head. Body segments are not excluded, so an apple
//! can land under the body and stays out of reach until the body moves on.

use rand::Rng;

use crate::types::GridPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppleState {
    position: GridPosition,
    available: bool,
}

impl AppleState {
    /// An apple that has not been placed yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn available(&self) -> bool {
        self.available
    }

    /// Position of the apple if it is on the board.
    pub fn current(&self) -> Option<GridPosition> {
        self.available.then_some(self.position)
    }

    /// Draw a cell that is not `excluded` and make the apple available there.
    ///
    /// Returns `false` and leaves the apple unavailable when the grid has fewer
    /// than two cells, since no such cell exists.
    pub fn spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        excluded: GridPosition,
        width: u16,
        height: u16,
    ) -> bool {
        if u32::from(width) * u32::from(height) < 2 {
            return false;
        }
        let position = loop {
            let candidate = GridPosition::new(
                rng.random_range(0..width),
                rng.random_range(0..height),
            );
            if candidate != excluded {
                break candidate;
            }
        };
        self.place(position);
        true
    }

    /// Put an available apple at `position`.
    pub fn place(&mut self, position: GridPosition) {
        self.position = position;
        self.available = true;
    }

    /// Take the apple off the board; the next frame respawns it.
    pub fn consume(&mut self) {
        self.available = false;
    }
}
