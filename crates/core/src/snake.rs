//! Snake module - body, length target and steering
//!
//! The body is stored head-first. Growth is never applied to the body
//! directly: eating raises `target_length`, and `advance` keeps the tail for
//! as long as the body is not longer than the target.

use std::collections::VecDeque;

use crate::board::Board;
use crate::types::{Cell, Direction, BASE_SNAKE_LENGTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, head at index 0
    body: VecDeque<Cell>,
    /// Length the body grows (or is trimmed) towards, always >= 1
    target_length: usize,
    direction: Direction,
    /// Requested by input, applied at the start of the next tick
    pending: Option<Direction>,
    /// Tail cell removed by the most recent `advance`
    last_tail: Option<Cell>,
}

impl Snake {
    /// A single-cell snake at `start`, heading right.
    pub fn new(start: Cell) -> Self {
        Self::with_body([start], Direction::Right)
    }

    /// Build a snake from an explicit head-first body.
    ///
    /// The target length is the body length (at least one). An empty body is
    /// replaced by a single cell at the origin.
    pub fn with_body(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let mut body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            body.push_back(Cell::default());
        }
        Self {
            target_length: body.len(),
            body,
            direction,
            pending: None,
            last_tail: None,
        }
    }

    pub fn head(&self) -> Cell {
        // The body is never empty.
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Queue `dir` for the next tick unless it reverses the current heading.
    ///
    /// Returns whether the request was accepted. A later accepted request in
    /// the same tick replaces an earlier one.
    pub fn set_pending_direction(&mut self, dir: Direction) -> bool {
        if self.direction.is_opposite(dir) {
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// Promote the pending direction (if any) and clear the slot.
    pub fn apply_pending_direction(&mut self) {
        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }
    }

    /// Move one cell forward on `board` and return the new head.
    ///
    /// The tail is trimmed only while the body is longer than the target, so
    /// a raised target shows up as one tick without trimming.
    pub fn advance(&mut self, board: &Board) -> Cell {
        let head = board.step(self.head(), self.direction);
        self.body.push_front(head);

        self.last_tail = None;
        while self.body.len() > self.target_length {
            self.last_tail = self.body.pop_back();
        }

        head
    }

    /// Whether the head shares a cell with any other segment.
    pub fn head_collides(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Back to a single cell at `start`, heading `direction`.
    pub fn reset(&mut self, start: Cell, direction: Direction) {
        self.body.clear();
        self.body.push_back(start);
        self.target_length = BASE_SNAKE_LENGTH;
        self.direction = direction;
        self.pending = None;
        self.last_tail = None;
    }

    /// Reduce every segment onto `board`.
    pub fn wrap_onto(&mut self, board: &Board) {
        for cell in self.body.iter_mut() {
            *cell = board.wrap(*cell);
        }
        self.last_tail = self.last_tail.map(|c| board.wrap(c));
    }
}
