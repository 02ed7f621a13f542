//! Board module - read-only grid geometry
//!
//! The board is a toroidal grid: every coordinate is reduced modulo the board
//! extent, so a snake leaving one edge re-enters at the opposite edge.
//! Coordinates: (col, row) where col ranges 0..width (left to right) and row
//! ranges 0..height (top to bottom).

use rand::Rng;

use crate::types::{Cell, Direction, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};

/// Grid dimensions plus the pixel size of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    /// Create a board of `width` x `height` cells.
    ///
    /// Dimensions below one cell are clamped to one. A 1x1 request is
    /// widened to 2x1: the board must hold the snake and the food at once.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        let height = height.max(1);
        let width = if height == 1 { width.max(2) } else { width.max(1) };
        Self {
            width,
            height,
            cell_size: cell_size.max(1),
        }
    }

    /// The 32x24 board of the reference 640x480 window.
    pub fn standard() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT, GRID_SIZE)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Board extent in pixels as (width, height).
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width * self.cell_size, self.height * self.cell_size)
    }

    /// Spawn cell for a fresh snake.
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.width && cell.row >= 0 && cell.row < self.height
    }

    /// Reduce a cell onto the board, axis by axis.
    #[inline]
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.col.rem_euclid(self.width),
            cell.row.rem_euclid(self.height),
        )
    }

    /// Neighbour of `cell` towards `dir`, wrapped.
    #[inline]
    pub fn step(&self, cell: Cell, dir: Direction) -> Cell {
        self.wrap(cell.offset(dir))
    }

    /// Pixel origin (top-left corner) of a cell.
    pub fn to_pixels(&self, cell: Cell) -> (i32, i32) {
        (cell.col * self.cell_size, cell.row * self.cell_size)
    }

    /// Uniformly random cell within bounds.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(col, row)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
