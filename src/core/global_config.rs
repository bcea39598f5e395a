//! Global configuration management
//!
//! Reads and writes user defaults from `config.toml` in the config directory.
//! Scenario files and command-line flags override these values; unset values
//! fall back to [`crate::config::defaults`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::defaults::{
    DEFAULT_MAX_TIME, DEFAULT_SAMPLES, DEFAULT_TIME_STEP, SEA_LEVEL_AIR_DENSITY, STANDARD_GRAVITY,
};
use crate::infra::dirs::BallisticsDirs;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to write config file
    #[error("Failed to write config file '{path}': {error}")]
    WriteError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Key passed to `config set` does not exist
    #[error("Unknown config key '{key}'. Valid keys: {}", VALID_KEYS.join(", "))]
    UnknownKey { key: String },

    /// Value passed to `config set` does not parse
    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Keys accepted by [`GlobalConfig::set`]
pub const VALID_KEYS: &[&str] = &[
    "environment.gravity",
    "environment.air_density",
    "simulation.time_step",
    "simulation.max_time",
    "simulation.samples",
    "output.json",
];

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default physical environment
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Default integration settings
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Environment defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Gravity magnitude in m/s²
    pub gravity: Option<f64>,

    /// Air density in kg/m³
    pub air_density: Option<f64>,
}

/// Simulation defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Integration step in seconds
    pub time_step: Option<f64>,

    /// Maximum simulated time in seconds
    pub max_time: Option<f64>,

    /// Trajectory points kept for output
    pub samples: Option<usize>,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON by default
    pub json: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// A missing file yields the default configuration.
    pub fn load(dirs: &BallisticsDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No global config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Save global configuration to the config directory
    pub fn save(&self, dirs: &BallisticsDirs) -> Result<(), GlobalConfigError> {
        self.save_to_path(&dirs.global_config_path())
    }

    /// Save global configuration to a specific path
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to_path(&self, path: &Path) -> Result<(), GlobalConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GlobalConfigError::WriteError {
                path: parent.display().to_string(),
                error: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| GlobalConfigError::WriteError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Set a value by dotted key, e.g. `simulation.time_step`
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), GlobalConfigError> {
        let invalid = |reason: String| GlobalConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };
        let positive_f64 = || -> Result<f64, GlobalConfigError> {
            let v: f64 = value.parse().map_err(|e| invalid(format!("{e}")))?;
            if v.is_finite() && v > 0.0 {
                Ok(v)
            } else {
                Err(invalid("must be positive and finite".to_string()))
            }
        };

        match key {
            "environment.gravity" => self.environment.gravity = Some(positive_f64()?),
            "environment.air_density" => {
                let v: f64 = value.parse().map_err(|e| invalid(format!("{e}")))?;
                if !(v.is_finite() && v >= 0.0) {
                    return Err(invalid("must be non-negative and finite".to_string()));
                }
                self.environment.air_density = Some(v);
            }
            "simulation.time_step" => self.simulation.time_step = Some(positive_f64()?),
            "simulation.max_time" => self.simulation.max_time = Some(positive_f64()?),
            "simulation.samples" => {
                let v: usize = value.parse().map_err(|e| invalid(format!("{e}")))?;
                if v < 2 {
                    return Err(invalid("must be at least 2".to_string()));
                }
                self.simulation.samples = Some(v);
            }
            "output.json" => {
                self.output.json = Some(value.parse().map_err(|e| invalid(format!("{e}")))?);
            }
            _ => {
                return Err(GlobalConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Effective gravity
    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.environment.gravity.unwrap_or(STANDARD_GRAVITY)
    }

    /// Effective air density
    #[must_use]
    pub fn air_density(&self) -> f64 {
        self.environment.air_density.unwrap_or(SEA_LEVEL_AIR_DENSITY)
    }

    /// Effective integration time step
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.simulation.time_step.unwrap_or(DEFAULT_TIME_STEP)
    }

    /// Effective maximum simulated time
    #[must_use]
    pub fn max_time(&self) -> f64 {
        self.simulation.max_time.unwrap_or(DEFAULT_MAX_TIME)
    }

    /// Effective output sample count
    #[must_use]
    pub fn samples(&self) -> usize {
        self.simulation.samples.unwrap_or(DEFAULT_SAMPLES)
    }

    /// Whether JSON output is on by default
    #[must_use]
    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert!(config.environment.gravity.is_none());
        assert!(config.simulation.time_step.is_none());
        assert_eq!(config.gravity(), STANDARD_GRAVITY);
        assert_eq!(config.samples(), DEFAULT_SAMPLES);
        assert!(!config.json());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = GlobalConfig::load_from_path(&config_path).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let content = r"
[environment]
gravity = 1.62

[simulation]
samples = 20
";
        fs::write(&config_path, content).unwrap();

        let config = GlobalConfig::load_from_path(&config_path).unwrap();
        assert_eq!(config.gravity(), 1.62);
        assert_eq!(config.samples(), 20);
        assert_eq!(config.air_density(), SEA_LEVEL_AIR_DENSITY);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "invalid toml [[[").unwrap();

        let result = GlobalConfig::load_from_path(&config_path);
        assert!(matches!(result, Err(GlobalConfigError::ParseError { .. })));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = GlobalConfig {
            environment: EnvironmentConfig {
                gravity: Some(3.71),
                air_density: Some(0.02),
            },
            simulation: SimulationConfig {
                time_step: Some(0.005),
                max_time: Some(300.0),
                samples: Some(10),
            },
            output: OutputConfig { json: Some(true) },
        };

        config.save_to_path(&config_path).unwrap();
        let loaded = GlobalConfig::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_set_known_keys() {
        let mut config = GlobalConfig::default();
        config.set("environment.gravity", "1.62").unwrap();
        config.set("environment.air_density", "0").unwrap();
        config.set("simulation.time_step", "0.01").unwrap();
        config.set("simulation.samples", "5").unwrap();
        config.set("output.json", "true").unwrap();

        assert_eq!(config.gravity(), 1.62);
        assert_eq!(config.air_density(), 0.0);
        assert_eq!(config.time_step(), 0.01);
        assert_eq!(config.samples(), 5);
        assert!(config.json());
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = GlobalConfig::default();

        assert!(matches!(
            config.set("registry.url", "x"),
            Err(GlobalConfigError::UnknownKey { .. })
        ));
        assert!(matches!(
            config.set("environment.gravity", "-9.81"),
            Err(GlobalConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("simulation.samples", "1"),
            Err(GlobalConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("output.json", "yes"),
            Err(GlobalConfigError::InvalidValue { .. })
        ));
        assert_eq!(config, GlobalConfig::default());
    }
}
