//! Runtime configuration from environment variables.
//!
//! Only presentation and tooling knobs live here; the game rules (board size,
//! gravity, scoring) are fixed.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interval between frames (one gravity tick per frame)
    pub frame_ms: u32,
    /// RNG seed; `None` picks a random one at start-up
    pub seed: Option<u64>,
    /// Log file; logging is disabled when unset
    pub log_path: Option<PathBuf>,
    /// `tracing-subscriber` filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_ms: TICK_MS,
            seed: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_FRAME_MS`: frame interval in ms (default 16)
    /// - `TETRIS_SEED`: u64 RNG seed
    /// - `TETRIS_LOG_PATH`: log file path
    /// - `TETRIS_LOG`: log filter (default `info`)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let frame_ms = lookup("TETRIS_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.frame_ms);

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse::<u64>().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_filter = lookup("TETRIS_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            frame_ms,
            seed,
            log_path,
            log_filter,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TETRIS_FRAME_MS", "33"),
            ("TETRIS_SEED", " 42 "),
            ("TETRIS_LOG_PATH", "/tmp/tetris.log"),
            ("TETRIS_LOG", "debug"),
        ]));
        assert_eq!(cfg.frame_ms, 33);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/tetris.log")));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TETRIS_FRAME_MS", "0"),
            ("TETRIS_SEED", "abc"),
            ("TETRIS_LOG_PATH", "   "),
            ("TETRIS_LOG", ""),
        ]));
        assert_eq!(cfg, AppConfig::default());
    }
}
