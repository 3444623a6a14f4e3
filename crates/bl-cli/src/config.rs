//! Configuration loading and management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bl_core::format::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use bl_core::{HISTORY_CAPACITY, TimestampFormat, ValidationError};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// chrono pattern for calendar dates in history views.
    pub date_format: String,
    /// chrono pattern for times of day in history views.
    pub time_format: String,
    /// Number of entries printed by `history` when no `--limit` is given.
    pub history_limit: usize,
    /// Milliseconds between timer ticks. Each tick counts as one second.
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            history_limit: HISTORY_CAPACITY,
            tick_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // BL_DATE_FORMAT, BL_TICK_INTERVAL_MS, ...
        figment = figment.merge(Env::prefixed("BL_"));

        figment.extract()
    }

    pub fn timestamp_format(&self) -> Result<TimestampFormat, ValidationError> {
        TimestampFormat::new(&self.date_format, &self.time_format)
    }

    /// Tick period, never shorter than one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// Returns the platform-specific config directory for bl.
///
/// On Linux: `~/.config/bl`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bl"))
}
