//! Fixed-width obstacle buffer for one lane

use serde::{Deserialize, Serialize};

use super::state::Cell;
use crate::consts::WIDTH;

/// Obstacle cells of one lane. Index 0 is the collide cell, `WIDTH - 1` is
/// where freshly generated columns enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaneBuffer {
    cells: [Cell; WIDTH],
}

impl LaneBuffer {
    /// An all-empty lane
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll one cell toward the player, dropping index 0 and writing
    /// `next` at the far end
    pub fn advance(&mut self, next: Cell) {
        self.cells.rotate_left(1);
        self.cells[WIDTH - 1] = next;
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// The cell the player collides with
    #[inline]
    pub fn leading(&self) -> Cell {
        self.cells[0]
    }

    /// Empty a cell; out-of-range indices are ignored
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Overwrite a cell; returns false for an out-of-range index
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell; WIDTH] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_shifts_toward_player() {
        let mut lane = LaneBuffer::new();
        lane.advance(Cell::Rock);
        assert_eq!(lane.get(WIDTH - 1), Some(Cell::Rock));
        assert_eq!(lane.leading(), Cell::Empty);

        for _ in 0..WIDTH - 1 {
            lane.advance(Cell::Empty);
        }
        assert_eq!(lane.leading(), Cell::Rock);

        // One more scroll drops it off the near end
        lane.advance(Cell::AmmoPickup);
        assert_eq!(lane.leading(), Cell::Empty);
        assert!(!lane.cells().contains(&Cell::Rock));
        assert_eq!(lane.cells().len(), WIDTH);
    }

    #[test]
    fn test_bounds_checked_access() {
        let mut lane = LaneBuffer::new();
        assert_eq!(lane.get(WIDTH), None);
        assert!(!lane.set(WIDTH, Cell::Rock));
        lane.clear(WIDTH + 5);
        assert!(lane.set(3, Cell::Rock));
        assert_eq!(lane.get(3), Some(Cell::Rock));
        lane.clear(3);
        assert_eq!(lane.get(3), Some(Cell::Empty));
    }
}
