//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the game core, the terminal renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! The reference playfield is a 640x480 pixel window split into 20px cells:
//!
//! - **Width**: 32 columns (indexed 0-31)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Spawn position**: the center cell (16, 12), pixel origin (320, 240)
//!
//! Coordinates wrap on every edge: leaving the board on one side re-enters it
//! on the opposite side.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPEED` | 7 | Ticks per second |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir.opposite(), Direction::Down);
//! assert_eq!(dir.delta(), (0, -1));
//!
//! let cell = Cell::new(3, 4).offset(Direction::Right);
//! assert_eq!(cell, Cell::new(4, 4));
//!
//! assert_eq!(GRID_WIDTH, 32);
//! assert_eq!(GRID_HEIGHT, 24);
//! ```

/// Reference window width in pixels.
pub const SCREEN_WIDTH: i32 = 640;

/// Reference window height in pixels.
pub const SCREEN_HEIGHT: i32 = 480;

/// Side of one grid cell in pixels.
pub const GRID_SIZE: i32 = 20;

/// Board width in cells (32 columns)
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / GRID_SIZE;

/// Board height in cells (24 rows)
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / GRID_SIZE;

/// Snake length at game start and after every reset.
pub const BASE_SNAKE_LENGTH: usize = 1;

/// Default tick rate (ticks per second).
pub const SPEED: u32 = 7;

/// Board background.
pub const BOARD_BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Outline drawn around every occupied cell.
pub const BORDER_COLOR: Rgb = Rgb::new(93, 216, 228);

/// Food colour.
pub const APPLE_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Snake body colour.
pub const SNAKE_COLOR: Rgb = Rgb::new(0, 255, 0);


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A grid position as (column, row).
///
/// Column grows to the right, row grows downwards. Cells are plain values;
/// wrapping them onto a board is the board's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step towards `dir` (unwrapped).
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.col + dx, self.row + dy)
    }
}

/// The four movement directions
///
/// A direction and its opposite are never applied back to back: the snake
/// would otherwise turn into its own second segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a fixed order (used for uniform random choice).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector as (dx, dy), with y pointing down.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("u"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// What a single game tick did.
///
/// Collision takes priority over eating: a tick that both lands on food and
/// hits the body reports `Collided`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved one cell and nothing else happened.
    Moved,
    /// The head reached the food; the snake will grow by one cell.
    Ate,
    /// The head ran into the body; the episode was reset in place.
    Collided,
}
