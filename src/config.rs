//! Runtime configuration from environment variables.
//!
//! - `SWEEPER_SEED`: u32 seed for board layouts (default: from the system clock)
//! - `SWEEPER_TICK_MS`: redraw interval in ms (default 66, clamped to 10..=1000)
//! - `SWEEPER_DEBUG`: "1" or "true" shows the debug lines
//! - `SWEEPER_LOG_PATH`: write logs to this file (default: no logging)

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::types::{MAX_TICK_MS, MIN_TICK_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweeperConfig {
    pub seed: u32,
    pub tick_ms: u64,
    pub debug: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_MS,
            debug: false,
            log_path: None,
        }
    }
}

impl SweeperConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unset or blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get("SWEEPER_SEED") {
            Some(s) => s
                .parse()
                .with_context(|| format!("SWEEPER_SEED must be a u32, got {:?}", s))?,
            None => clock_seed(),
        };

        let tick_ms = match get("SWEEPER_TICK_MS") {
            Some(s) => s
                .parse::<u64>()
                .with_context(|| format!("SWEEPER_TICK_MS must be milliseconds, got {:?}", s))?
                .clamp(MIN_TICK_MS, MAX_TICK_MS),
            None => TICK_MS,
        };

        let debug = get("SWEEPER_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = get("SWEEPER_LOG_PATH").map(PathBuf::from);

        Ok(Self {
            seed,
            tick_ms,
            debug,
            log_path,
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos as u32) ^ ((nanos >> 32) as u32) ^ std::process::id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SweeperConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert!(!cfg.debug);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn parses_all_values() {
        let cfg = SweeperConfig::from_lookup(lookup(&[
            ("SWEEPER_SEED", "42"),
            ("SWEEPER_TICK_MS", " 100 "),
            ("SWEEPER_DEBUG", "TRUE"),
            ("SWEEPER_LOG_PATH", "/tmp/sweeper.log"),
        ]))
        .unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.tick_interval(), Duration::from_millis(100));
        assert!(cfg.debug);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/sweeper.log")));
    }

    #[test]
    fn tick_is_clamped() {
        let fast = SweeperConfig::from_lookup(lookup(&[("SWEEPER_TICK_MS", "1")])).unwrap();
        assert_eq!(fast.tick_ms, MIN_TICK_MS);
        let slow = SweeperConfig::from_lookup(lookup(&[("SWEEPER_TICK_MS", "60000")])).unwrap();
        assert_eq!(slow.tick_ms, MAX_TICK_MS);
    }

    #[test]
    fn malformed_numbers_are_errors() {
        let err = SweeperConfig::from_lookup(lookup(&[("SWEEPER_SEED", "abc")])).unwrap_err();
        assert!(err.to_string().contains("SWEEPER_SEED"));
        assert!(SweeperConfig::from_lookup(lookup(&[("SWEEPER_TICK_MS", "-5")])).is_err());
    }

    #[test]
    fn blank_values_use_defaults() {
        let cfg = SweeperConfig::from_lookup(lookup(&[
            ("SWEEPER_LOG_PATH", "   "),
            ("SWEEPER_TICK_MS", ""),
        ]))
        .unwrap();
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.tick_ms, TICK_MS);
    }
}
