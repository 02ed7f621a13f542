//! Food placement by rejection sampling.

use rand::Rng;

use crate::board::Board;
use crate::types::Cell;

/// The single piece of food on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Food at a fixed cell (no exclusion check).
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Place food on a random cell for which `excluded` is false.
    pub fn spawn<R, F>(board: &Board, excluded: F, rng: &mut R) -> Self
    where
        R: Rng,
        F: Fn(Cell) -> bool,
    {
        Self {
            position: sample_free_cell(board, excluded, rng),
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a random cell for which `excluded` is false.
    ///
    /// Samples uniformly until a free cell comes up. Terminates with
    /// probability 1 as long as at least one cell is free; a completely
    /// covered board never terminates.
    pub fn relocate<R, F>(&mut self, board: &Board, excluded: F, rng: &mut R) -> Cell
    where
        R: Rng,
        F: Fn(Cell) -> bool,
    {
        self.position = sample_free_cell(board, excluded, rng);
        self.position
    }
}

fn sample_free_cell<R, F>(board: &Board, excluded: F, rng: &mut R) -> Cell
where
    R: Rng,
    F: Fn(Cell) -> bool,
{
    loop {
        let cell = board.random_cell(rng);
        if !excluded(cell) {
            return cell;
        }
    }
}
