// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Calculator configuration

use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the history file location
pub const ENV_HISTORY_PATH: &str = "JUPAN_HISTORY_PATH";
/// Environment variable overriding the history retention cap
pub const ENV_MAX_HISTORY_SIZE: &str = "JUPAN_MAX_HISTORY_SIZE";
/// Environment variable toggling save-after-every-change
pub const ENV_AUTO_SAVE: &str = "JUPAN_AUTO_SAVE";
/// Environment variable overriding the result precision
pub const ENV_PRECISION: &str = "JUPAN_PRECISION";

/// Runtime configuration for a [`Calculator`](crate::Calculator)
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Where the calculation history is persisted
    pub history_path: PathBuf,
    /// Maximum number of retained history entries; oldest entries are
    /// dropped beyond this
    pub max_history_size: usize,
    /// Save the history after every change
    pub auto_save: bool,
    /// Decimal places results are rounded to
    pub precision: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            max_history_size: 1000,
            auto_save: true,
            precision: 10,
        }
    }
}

impl CalculatorConfig {
    /// Default configuration with environment overrides applied.
    ///
    /// Unparseable override values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var(ENV_HISTORY_PATH) {
            config.history_path = PathBuf::from(path);
        }
        if let Some(size) = env::var(ENV_MAX_HISTORY_SIZE)
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_history_size = size;
        }
        if let Ok(flag) = env::var(ENV_AUTO_SAVE) {
            config.auto_save = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(precision) = env::var(ENV_PRECISION).ok().and_then(|v| v.parse().ok()) {
            config.precision = precision;
        }
        config
    }

    /// Override the history file location
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }

    /// Override the history retention cap
    pub fn with_max_history_size(mut self, size: usize) -> Self {
        self.max_history_size = size;
        self
    }

    /// Enable or disable save-after-every-change
    pub fn with_auto_save(mut self, enabled: bool) -> Self {
        self.auto_save = enabled;
        self
    }

    /// Override the result precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

/// History file under the platform data directory, with a dotfile fallback
/// when no home directory can be resolved.
fn default_history_path() -> PathBuf {
    ProjectDirs::from("io", "jupan", "jupan")
        .map(|dirs| dirs.data_dir().join("history.json"))
        .unwrap_or_else(|| PathBuf::from(".jupan_history.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = CalculatorConfig::default();
        assert_eq!(config.max_history_size, 1000);
        assert!(config.auto_save);
        assert_eq!(config.precision, 10);
        assert!(
            config.history_path.ends_with("history.json")
                || config.history_path.ends_with(".jupan_history.json")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = CalculatorConfig::default()
            .with_history_path("/tmp/calc.json")
            .with_max_history_size(5)
            .with_auto_save(false)
            .with_precision(2);
        assert_eq!(config.history_path, PathBuf::from("/tmp/calc.json"));
        assert_eq!(config.max_history_size, 5);
        assert!(!config.auto_save);
        assert_eq!(config.precision, 2);
    }

    // Single test so the process-global environment is only touched from
    // one place.
    #[test]
    fn test_from_env_overrides() {
        env::set_var(ENV_HISTORY_PATH, "/tmp/env-history.json");
        env::set_var(ENV_MAX_HISTORY_SIZE, "25");
        env::set_var(ENV_AUTO_SAVE, "false");
        env::set_var(ENV_PRECISION, "4");

        let config = CalculatorConfig::from_env();
        assert_eq!(config.history_path, PathBuf::from("/tmp/env-history.json"));
        assert_eq!(config.max_history_size, 25);
        assert!(!config.auto_save);
        assert_eq!(config.precision, 4);

        env::set_var(ENV_PRECISION, "lots");
        assert_eq!(CalculatorConfig::from_env().precision, 10);

        env::remove_var(ENV_HISTORY_PATH);
        env::remove_var(ENV_MAX_HISTORY_SIZE);
        env::remove_var(ENV_AUTO_SAVE);
        env::remove_var(ENV_PRECISION);
    }
}
