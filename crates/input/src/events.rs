//! Event sources: a blocking stream of key tokens and redraw ticks.
//!
//! Ticks are self-rescheduling. Emitting a tick consumes it, and the loop asks
//! for the next one after handling it, relative to the time it finished. A slow
//! frame therefore delays the cadence instead of queuing a backlog.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::key_from_event;
use crate::types::InputEvent;

/// Anything that can feed the control loop one event at a time.
pub trait EventSource {
    /// Block until the next event is available.
    fn next_event(&mut self) -> Result<InputEvent>;

    /// Schedule the next tick one interval after `now`.
    fn reschedule_tick(&mut self, _now: Instant) {}
}

/// Single pending-tick timer.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    next: Option<Instant>,
}

impl TickSchedule {
    /// The first tick is due immediately so the first frame draws at once.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: Some(now),
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next
    }

    /// Time left before the pending tick, or one interval if none is pending.
    pub fn timeout(&self, now: Instant) -> Duration {
        match self.next {
            Some(at) => at.saturating_duration_since(now),
            None => self.interval,
        }
    }

    /// Consume the pending tick if it is due.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(at) if now >= at => {
                self.next = None;
                true
            }
            _ => false,
        }
    }

    pub fn reschedule(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }
}

/// Event source backed by the real terminal.
pub struct TerminalEvents {
    ticks: TickSchedule,
}

impl TerminalEvents {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            ticks: TickSchedule::new(tick_interval, Instant::now()),
        }
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            let now = Instant::now();
            if self.ticks.take_due(now) {
                return Ok(InputEvent::Tick);
            }

            if !event::poll(self.ticks.timeout(now))? {
                continue;
            }

            match event::read()? {
                // Release/repeat events are ignored; one press is one token.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(k) = key_from_event(key) {
                        return Ok(InputEvent::Key(k));
                    }
                }
                Event::Resize(w, h) => return Ok(InputEvent::Resize(w, h)),
                _ => {}
            }
        }
    }

    fn reschedule_tick(&mut self, now: Instant) {
        self.ticks.reschedule(now);
    }
}
