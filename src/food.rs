use rand::Rng;

use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// The single food item active on the board.
///
/// Invariant: never placed on a cell occupied by the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at an explicit cell, for tests and fixtures.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random free cell.
    #[must_use]
    pub fn place<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        Self {
            position: free_cell(rng, bounds, snake),
        }
    }
}

/// Draws random cells until one is not occupied by the snake.
///
/// Plain rejection sampling: the snake occupies strictly fewer than
/// `bounds.total_cells()` cells in any reachable state, so the loop
/// terminates. The occupancy check runs against the whole body, so each
/// draw is O(len); fine at this board size.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Cell {
    debug_assert!(snake.len() < bounds.total_cells());

    loop {
        let candidate = Cell {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
