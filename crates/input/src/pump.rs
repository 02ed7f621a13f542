//! Non-blocking event pump, polled once per tick.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::Direction;

/// Upper bound on events consumed per tick; the rest wait for the next one.
pub const MAX_EVENTS_PER_TICK: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Quit,
    /// The terminal changed size; the next frame must be a full redraw.
    Resize,
}

/// Translate a raw terminal event.
///
/// Only key presses count. Terminal auto-repeat and key releases are ignored
/// so a held key queues one turn, not a burst.
pub fn translate(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                Some(InputEvent::Quit)
            } else {
                handle_key_event(key).map(InputEvent::Turn)
            }
        }
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Drains ready terminal events without blocking.
pub struct EventPump {
    events: ArrayVec<InputEvent, MAX_EVENTS_PER_TICK>,
}

impl EventPump {
    pub fn new() -> Self {
        Self {
            events: ArrayVec::new(),
        }
    }

    /// Collect every event that is ready right now.
    ///
    /// Stops early on quit or when the per-tick buffer is full. Returns an
    /// empty slice when nothing is pending.
    pub fn poll(&mut self) -> Result<&[InputEvent]> {
        self.events.clear();
        while !self.events.is_full() && event::poll(Duration::ZERO)? {
            if let Some(ev) = translate(event::read()?) {
                self.events.push(ev);
                if ev == InputEvent::Quit {
                    break;
                }
            }
        }
        Ok(self.events.as_slice())
    }
}

impl Default for EventPump {
    fn default() -> Self {
        Self::new()
    }
}
