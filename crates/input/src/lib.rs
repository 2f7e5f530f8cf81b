//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Key`] tokens, binds tokens
//! to [`crate::types::Command`]s, and provides the blocking event source that
//! interleaves key tokens with self-rescheduling redraw ticks.

pub mod events;
pub mod map;

pub use sweeper_types as types;

pub use events::{EventSource, TerminalEvents, TickSchedule};
pub use map::{command_for, key_from_event};
