//! Host configuration read from the environment.

use std::env;
use std::time::Duration;

pub const DEFAULT_FRAME_MS: u64 = 16;
pub const DEFAULT_BLOCK_PX: u32 = 8;
pub const DEFAULT_PREVIEW_PX: u32 = 6;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for the terminal host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Piece source seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Frame period of the host loop, 1..=1000 ms
    pub frame_ms: u64,
    /// Board block size in canvas pixels (even, 4..=32)
    pub block_px: u32,
    /// Preview block size in canvas pixels (even, 4..=32)
    pub preview_px: u32,
    /// Log file; logging is off when unset
    pub log_path: Option<String>,
    /// `env_logger` filter directive
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            block_px: DEFAULT_BLOCK_PX,
            preview_px: DEFAULT_PREVIEW_PX,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("BLOCKFALL_SEED").and_then(|s| s.parse().ok());

        let frame_ms = non_empty("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_FRAME_MS)
            .clamp(1, 1000);

        let block_px = non_empty("BLOCKFALL_BLOCK_PX")
            .and_then(|s| s.parse().ok())
            .map(even_block_px)
            .unwrap_or(DEFAULT_BLOCK_PX);

        let preview_px = non_empty("BLOCKFALL_PREVIEW_PX")
            .and_then(|s| s.parse().ok())
            .map(even_block_px)
            .unwrap_or(DEFAULT_PREVIEW_PX);

        let log_path = non_empty("BLOCKFALL_LOG_PATH");
        let log_filter =
            non_empty("BLOCKFALL_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            frame_ms,
            block_px,
            preview_px,
            log_path,
            log_filter,
        }
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

fn even_block_px(px: u32) -> u32 {
    (px.clamp(4, 32) / 2) * 2
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = HostConfig::from_lookup(|_| None);
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.frame_period(), Duration::from_millis(16));
    }

    #[test]
    fn test_parses_values() {
        let config = HostConfig::from_lookup(lookup(&[
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_FRAME_MS", "33"),
            ("BLOCKFALL_BLOCK_PX", "12"),
            ("BLOCKFALL_PREVIEW_PX", "10"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.log "),
            ("BLOCKFALL_LOG", "debug"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frame_ms, 33);
        assert_eq!(config.block_px, 12);
        assert_eq!(config.preview_px, 10);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = HostConfig::from_lookup(lookup(&[
            ("BLOCKFALL_SEED", "abc"),
            ("BLOCKFALL_FRAME_MS", "-5"),
            ("BLOCKFALL_BLOCK_PX", "big"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.frame_ms, DEFAULT_FRAME_MS);
        assert_eq!(config.block_px, DEFAULT_BLOCK_PX);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_clamps_ranges() {
        let config = HostConfig::from_lookup(lookup(&[
            ("BLOCKFALL_FRAME_MS", "0"),
            ("BLOCKFALL_BLOCK_PX", "99"),
            ("BLOCKFALL_PREVIEW_PX", "7"),
        ]));
        assert_eq!(config.frame_ms, 1);
        assert_eq!(config.block_px, 32);
        assert_eq!(config.preview_px, 6);

        let config = HostConfig::from_lookup(lookup(&[("BLOCKFALL_FRAME_MS", "50000")]));
        assert_eq!(config.frame_ms, 1000);
    }
}
