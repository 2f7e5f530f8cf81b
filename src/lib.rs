//! No-Guess Sweeper (workspace facade crate).
//!
//! Re-exports the member crates under `sweeper::{core,engine,input,term,types}`
//! and adds the process-level pieces the binary needs: configuration and logging.

pub use sweeper_core as core;
pub use sweeper_engine as engine;
pub use sweeper_input as input;
pub use sweeper_term as term;
pub use sweeper_types as types;

pub mod config;
pub mod logging;

pub use config::SweeperConfig;
