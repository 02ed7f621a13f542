//! JSON-lines event log.
//!
//! One record per line, tagged by `"type"`. Logging is best effort: the first
//! write failure disables the sink and the game carries on.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameState;
use crate::types::{Cell, TickOutcome};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        seed: u64,
        board: [i32; 2],
        ticks_per_second: u32,
    },
    Ate {
        tick: u64,
        head: [i32; 2],
        length: usize,
    },
    Collision {
        tick: u64,
        length: usize,
        episode: u32,
    },
    Quit {
        tick: u64,
        best_length: usize,
    },
}

impl LogRecord {
    pub fn start(state: &GameState, ticks_per_second: u32) -> Self {
        let board = state.board();
        LogRecord::Start {
            seed: state.seed(),
            board: [board.width(), board.height()],
            ticks_per_second,
        }
    }

    /// Record for a tick outcome worth logging (`Moved` is not).
    ///
    /// `length_before` is the target length before the tick, which is the
    /// only place the length at death survives a reset.
    pub fn from_outcome(
        outcome: TickOutcome,
        state: &GameState,
        length_before: usize,
    ) -> Option<Self> {
        match outcome {
            TickOutcome::Moved => None,
            TickOutcome::Ate => Some(LogRecord::Ate {
                tick: state.tick_count(),
                head: cell_pair(state.snake().head()),
                length: state.snake().target_length(),
            }),
            TickOutcome::Collided => Some(LogRecord::Collision {
                tick: state.tick_count(),
                length: length_before,
                episode: state.episode(),
            }),
        }
    }

    pub fn quit(state: &GameState) -> Self {
        LogRecord::Quit {
            tick: state.tick_count(),
            best_length: state.best_length(),
        }
    }
}

fn cell_pair(cell: Cell) -> [i32; 2] {
    [cell.col, cell.row]
}

pub struct EventLog {
    sink: Option<Box<dyn Write>>,
    buf: Vec<u8>,
}

impl EventLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    /// Log into an arbitrary writer.
    pub fn to_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
            buf: Vec::with_capacity(256),
        }
    }

    /// Append to the file at `path`, or stay disabled when `path` is `None`.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {path}"))?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, rec: &LogRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if sink.write_all(&self.buf).is_err() {
            self.sink = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if sink.flush().is_err() {
                self.sink = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Food, Snake};
    use crate::types::Direction;

    #[test]
    fn records_are_tagged_by_type() {
        let rec = LogRecord::Ate {
            tick: 3,
            head: [4, 5],
            length: 2,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"type":"ate","tick":3,"head":[4,5],"length":2}"#);
    }

    #[test]
    fn moved_is_not_logged() {
        let state = GameState::new(1);
        assert_eq!(LogRecord::from_outcome(TickOutcome::Moved, &state, 1), None);
    }

    #[test]
    fn collision_keeps_length_before_reset() {
        let snake = Snake::with_body(
            [
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 3),
            ],
            Direction::Down,
        );
        let food = Food::at(Cell::new(7, 5));
        let mut state = GameState::from_parts(Board::new(8, 6, 20), snake, food, 2);
        let before = state.snake().target_length();
        let outcome = state.tick();

        assert_eq!(
            LogRecord::from_outcome(outcome, &state, before),
            Some(LogRecord::Collision {
                tick: 1,
                length: 5,
                episode: 1
            })
        );
    }

    #[test]
    fn disabled_log_accepts_records() {
        let mut log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.record(&LogRecord::quit(&GameState::new(1)));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_disables_the_sink() {
        let state = GameState::new(1);
        let mut log = EventLog::to_writer(BrokenPipe);
        assert!(log.is_enabled());

        log.record(&LogRecord::start(&state, 7));
        assert!(!log.is_enabled());

        log.record(&LogRecord::quit(&state));
        log.flush();
        assert!(!log.is_enabled());
    }

    #[test]
    fn missing_path_means_disabled() {
        assert!(!EventLog::open(None).unwrap().is_enabled());
    }
}
