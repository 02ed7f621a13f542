//! Terminal input module.
//!
//! Maps `crossterm` key events onto snake headings and provides a
//! non-blocking [`EventPump`] that drains whatever the terminal has queued
//! since the previous tick. Absence of events is the common case.

pub mod map;
pub mod pump;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use pump::{translate, EventPump, InputEvent, MAX_EVENTS_PER_TICK};
