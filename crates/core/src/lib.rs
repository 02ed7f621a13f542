//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole snake rule set. It has **no dependencies** on
//! the terminal, input devices or the clock, making it:
//!
//! - **Deterministic**: the same seed produces the same food and reset sequence
//! - **Testable**: every rule is exercised by unit tests without a terminal
//! - **Portable**: any front end can drive it one tick at a time
//!
//! # Module Structure
//!
//! - [`board`]: toroidal grid geometry (wrap, step, center, random cells)
//! - [`snake`]: body, target length and direction queue
//! - [`food`]: rejection-sampled food placement
//! - [`draw`]: the [`Drawable`] capability renderers consume
//! - [`game_state`]: the per-tick update tying everything together
//!
//! # Game Rules
//!
//! - The snake starts as one cell at the board center, heading right.
//! - A turn request that reverses the current heading is ignored.
//! - Each tick the queued turn is applied, then the snake moves one cell;
//!   leaving an edge re-enters on the opposite edge.
//! - Running into its own body resets the snake in place (length 1, center,
//!   random heading). Collision is checked before food.
//! - Reaching the food raises the target length by one; the body catches up
//!   on the following tick by skipping a tail trim.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, TickOutcome};
//!
//! let mut game = GameState::new(12345);
//! game.set_pending_direction(Direction::Down);
//!
//! let outcome = game.tick();
//! assert_ne!(outcome, TickOutcome::Collided);
//! assert_eq!(game.direction(), Direction::Down);
//! ```

pub mod board;
pub mod draw;
pub mod food;
pub mod game_state;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use draw::Drawable;
pub use food::Food;
pub use game_state::GameState;
pub use snake::Snake;
