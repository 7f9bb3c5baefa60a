//! Configuration models for .kisan/config.json.
//!
//! Only simulator tuning knobs live here. Plot state itself is ephemeral and
//! is never written to disk; a missing config file simply means defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::irrigation::{DEFAULT_IDLE_DECAY, DEFAULT_PUMP_RISE, DEFAULT_TICK_MS};

/// Default config directory path.
pub const KISAN_DIR: &str = ".kisan";
/// Default config file path.
pub const CONFIG_FILE: &str = ".kisan/config.json";

/// Lower bound for the tick period. Anything faster is treated as invalid.
const MIN_TICK_MS: u64 = 100;

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Config file exists but is not valid JSON.
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulator tuning configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Tick period in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Water level increase per tick while the pump is on.
    #[serde(default = "default_pump_rise")]
    pub pump_rise: f64,
    /// Water level decrease per tick while the pump is off.
    #[serde(default = "default_idle_decay")]
    pub idle_decay: f64,
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

fn default_pump_rise() -> f64 {
    DEFAULT_PUMP_RISE
}

fn default_idle_decay() -> f64 {
    DEFAULT_IDLE_DECAY
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            pump_rise: default_pump_rise(),
            idle_decay: default_idle_decay(),
        }
    }
}

impl SimulatorConfig {
    /// Load config from the given path, or from CONFIG_FILE if None.
    ///
    /// A missing file yields defaults. A present-but-invalid file is an
    /// error so typos don't silently vanish.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config.validated())
    }

    /// Replace out-of-range values with defaults.
    pub fn validated(mut self) -> Self {
        if self.tick_ms < MIN_TICK_MS {
            self.tick_ms = default_tick_ms();
        }
        if !self.pump_rise.is_finite() || self.pump_rise <= 0.0 {
            self.pump_rise = default_pump_rise();
        }
        if !self.idle_decay.is_finite() || self.idle_decay <= 0.0 {
            self.idle_decay = default_idle_decay();
        }
        self
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.tick_ms, 1200);
        assert_eq!(config.pump_rise, 2.0);
        assert_eq!(config.idle_decay, 0.2);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        let config = SimulatorConfig::load(Some(&path)).unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"tick_ms": 500}"#).unwrap();
        let config = SimulatorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.pump_rise, 2.0);
        assert_eq!(config.idle_decay, 0.2);
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(SimulatorConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = SimulatorConfig {
            tick_ms: 10,
            pump_rise: -1.0,
            idle_decay: f64::NAN,
        }
        .validated();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_validation_keeps_good_values() {
        let config = SimulatorConfig {
            tick_ms: 2000,
            pump_rise: 5.0,
            idle_decay: 0.5,
        };
        assert_eq!(config.clone().validated(), config);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulatorConfig {
            tick_ms: 800,
            pump_rise: 3.0,
            idle_decay: 0.1,
        };
        let parsed: SimulatorConfig = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }
}
