//! Segment ring - fixed-capacity body storage
//!
//! The snake body is a ring buffer of [`MAX_SEGMENTS`] slots with an index to the
//! newest (head-adjacent) segment and a length. Moving the snake recycles the
//! oldest slot into the newest one, so a tick is O(1) regardless of length and
//! the body never reallocates.

use crate::types::{GridPosition, MAX_SEGMENTS};

/// Ordered body segments, head-adjacent first, tail last.
#[derive(Debug, Clone)]
pub struct SegmentRing {
    slots: [GridPosition; MAX_SEGMENTS],
    /// Slot holding the head-adjacent segment (meaningless while empty).
    newest: usize,
    len: usize,
}

impl SegmentRing {
    pub const CAPACITY: usize = MAX_SEGMENTS;

    pub fn new() -> Self {
        Self {
            slots: [GridPosition::ORIGIN; MAX_SEGMENTS],
            newest: 0,
            len: 0,
        }
    }

    /// Build a ring from positions listed head-to-tail.
    ///
    /// Positions past [`SegmentRing::CAPACITY`] are dropped.
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = GridPosition>,
    {
        let mut ring = Self::new();
        for pos in positions {
            if !ring.grow_at(pos) {
                break;
            }
        }
        ring
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == Self::CAPACITY
    }

    pub fn clear(&mut self) {
        self.newest = 0;
        self.len = 0;
    }

    #[inline(always)]
    fn slot(&self, offset: usize) -> usize {
        (self.newest + offset) % Self::CAPACITY
    }

    /// Head-adjacent segment.
    pub fn newest(&self) -> Option<GridPosition> {
        if self.is_empty() {
            return None;
        }
        Some(self.slots[self.newest])
    }

    /// Tail segment (the next one [`SegmentRing::shift_to`] recycles).
    pub fn oldest(&self) -> Option<GridPosition> {
        if self.is_empty() {
            return None;
        }
        Some(self.slots[self.slot(self.len - 1)])
    }

    /// Segment `i` counted from the head (0 = head-adjacent).
    pub fn get(&self, i: usize) -> Option<GridPosition> {
        if i >= self.len {
            return None;
        }
        Some(self.slots[self.slot(i)])
    }

    /// Move the tail into the slot behind the head.
    ///
    /// The oldest segment is dropped and `previous_head` becomes the newest.
    /// No-op on an empty ring.
    pub fn shift_to(&mut self, previous_head: GridPosition) {
        if self.is_empty() {
            return;
        }
        self.newest = (self.newest + Self::CAPACITY - 1) % Self::CAPACITY;
        self.slots[self.newest] = previous_head;
    }

    /// Add one segment at `position` without removing any.
    ///
    /// The segment takes the slot behind the current tail. The next
    /// [`SegmentRing::shift_to`] then keeps the old tail instead of dropping it
    /// and `position` falls off the end, so the body lengthens by exactly one
    /// cell. Returns `false` when full.
    pub fn grow_at(&mut self, position: GridPosition) -> bool {
        if self.is_full() {
            return false;
        }
        let slot = self.slot(self.len);
        self.slots[slot] = position;
        self.len += 1;
        true
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        self.iter().any(|p| p == position)
    }

    /// Iterate segments head-to-tail.
    pub fn iter(&self) -> SegmentIter<'_> {
        SegmentIter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    /// Visit segments head-to-tail.
    pub fn for_each(&self, mut f: impl FnMut(GridPosition)) {
        for pos in self.iter() {
            f(pos);
        }
    }
}

impl Default for SegmentRing {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SegmentRing {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SegmentRing {}

impl<'a> IntoIterator for &'a SegmentRing {
    type Item = GridPosition;
    type IntoIter = SegmentIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over a [`SegmentRing`].
#[derive(Debug, Clone)]
pub struct SegmentIter<'a> {
    ring: &'a SegmentRing,
    front: usize,
    back: usize,
}

impl Iterator for SegmentIter<'_> {
    type Item = GridPosition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.ring.slots[self.ring.slot(self.front)];
        self.front += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for SegmentIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.ring.slots[self.ring.slot(self.back)])
    }
}

impl ExactSizeIterator for SegmentIter<'_> {}
