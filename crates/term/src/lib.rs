//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game is drawn into a plain
//! framebuffer of styled glyphs, which is then flushed to the terminal.
//!
//! Goals:
//! - Keep `core` free of any rendering concern
//! - Keep the view pure so it can be unit-tested without a terminal
//! - Allow precise control over aspect ratio (2 columns per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
