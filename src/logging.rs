//! Tracing subscriber setup
//!
//! The terminal is a full-screen surface, so logs only ever go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber writing to `log_file_path`.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_global(log_file_path: &Path) -> Result<()> {
    let log_file = File::create(log_file_path)
        .with_context(|| format!("cannot create log file {}", log_file_path.display()))?;
    build_subscriber(log_file)
        .try_init()
        .context("tracing subscriber already installed")?;
    Ok(())
}

/// Build a subscriber that writes plain-text events to `log_file`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
