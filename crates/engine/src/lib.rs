//! Engine module - the game controller and the control loop.
//!
//! The loop is single-threaded and cooperative: it blocks on the next event,
//! lets the [`GameController`] apply it, rebuilds the frame and hands it to
//! the surface. Quit ends the loop on the iteration it arrives.
//!
//! Both ends are traits ([`EventSource`], [`Surface`]) so the loop runs the same
//! against a real terminal and against scripted events in tests.

pub mod controller;

pub use sweeper_core as core;
pub use sweeper_input as input;
pub use sweeper_term as term;
pub use sweeper_types as types;

pub use controller::{Flow, GameController, GameSession, GameState};

use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::input::EventSource;
use crate::term::Surface;
use crate::types::InputEvent;

/// Run until a quit command arrives.
pub fn run_loop<E, S>(controller: &mut GameController, events: &mut E, surface: &mut S) -> Result<()>
where
    E: EventSource,
    S: Surface,
{
    let fb = controller.render(surface.viewport(), Instant::now());
    surface.present(fb)?;

    loop {
        let event = events.next_event()?;
        let now = Instant::now();

        if let InputEvent::Resize(w, h) = event {
            debug!(w, h, "terminal resized");
            surface.invalidate();
        }

        if controller.handle_event(event, now) == Flow::Quit {
            debug!("quit requested");
            return Ok(());
        }

        let fb = controller.render(surface.viewport(), now);
        surface.present(fb)?;

        if event == InputEvent::Tick {
            events.reschedule_tick(Instant::now());
        }
    }
}
