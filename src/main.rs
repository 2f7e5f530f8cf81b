//! Terminal minesweeper runner (default binary).
//!
//! Reads configuration from the environment, optionally logs to a file, and
//! runs the game loop against the real terminal.

use anyhow::Result;
use tracing::{error, info, warn};

use sweeper::engine::{run_loop, GameController};
use sweeper::input::TerminalEvents;
use sweeper::term::{SweeperView, TerminalRenderer};
use sweeper::{logging, SweeperConfig};

fn main() -> Result<()> {
    let config = SweeperConfig::from_env()?;
    if let Some(path) = &config.log_path {
        logging::init_global(path)?;
    }
    info!(seed = config.seed, tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&config, &mut term);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e:#}");
    }
    if let Err(e) = &result {
        error!("exited with error: {e:#}");
    }
    result
}

fn run(config: &SweeperConfig, term: &mut TerminalRenderer) -> Result<()> {
    let view = SweeperView::default().with_debug(config.debug);
    let mut controller = GameController::new(config.seed).with_view(view);
    let mut events = TerminalEvents::new(config.tick_interval());
    run_loop(&mut controller, &mut events, term)
}
