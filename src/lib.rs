//! Terminal snake (workspace facade crate).
//!
//! Game rules live in `tui_snake::core`; the terminal front end is split into
//! `input` and `term`. This crate adds the pieces the binary wires together:
//! the tick [`clock`], environment [`config`] and the JSON-lines [`event_log`].

pub mod clock;
pub mod config;
pub mod event_log;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
