//! Error types for the ballistics calculator
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::global_config::GlobalConfigError;

/// Angle parsing errors
#[derive(Error, Debug, PartialEq)]
pub enum AngleError {
    /// Input is not a recognised angle
    #[error("Invalid angle '{input}': expected a number with optional unit (deg, rad, mil)")]
    Invalid { input: String },

    /// Parsed value is NaN or infinite
    #[error("Angle '{input}' is not a finite number")]
    NotFinite { input: String },
}

/// Closed-form projectile errors
#[derive(Error, Debug, PartialEq)]
pub enum ProjectileError {
    /// Gravity must pull the projectile back down
    #[error("Gravity must be a positive finite value, got {gravity}")]
    InvalidGravity { gravity: f64 },

    /// Launch height below ground
    #[error("Launch height must be a non-negative finite value, got {height}")]
    InvalidHeight { height: f64 },

    /// Velocity component is NaN or infinite
    #[error("Velocity must be finite, got ({x}, {y})")]
    InvalidVelocity { x: f64, y: f64 },

    /// Speed is not usable
    #[error("Launch speed must be a non-negative finite value, got {speed}")]
    InvalidSpeed { speed: f64 },

    /// Trajectory sampling needs both endpoints
    #[error("Trajectory needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },
}

/// Firing solution errors
#[derive(Error, Debug, PartialEq)]
pub enum SolverError {
    /// Target cannot be reached at this speed
    #[error("Target at {distance} m (height {height} m) is out of range; maximum flat range is {max_range:.2} m")]
    OutOfRange {
        distance: f64,
        height: f64,
        max_range: f64,
    },

    /// Input parameter out of its domain
    #[error("Invalid {name}: {value} (must be positive and finite)")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Numerical simulation errors
#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    /// Body parameter out of its domain
    #[error("Invalid body {field}: {value}")]
    InvalidBody { field: &'static str, value: f64 },

    /// Environment parameter out of its domain
    #[error("Invalid environment {field}: {value}")]
    InvalidEnvironment { field: &'static str, value: f64 },

    /// Integration settings out of their domain
    #[error("Invalid simulation {field}: {value}")]
    InvalidSettings { field: &'static str, value: f64 },

    /// Launch state contains NaN or infinity
    #[error("Launch state must be finite")]
    InvalidLaunch,

    /// `max_time / time_step` exceeds the step limit
    #[error("Simulation needs {steps:.0} steps, limit is {limit}; increase time_step or lower max_time")]
    TooManySteps { steps: f64, limit: usize },

    /// Integration produced NaN or infinity
    #[error("Simulation diverged at t = {time:.3} s")]
    Diverged { time: f64 },
}

/// Scenario file errors
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// Scenario file could not be read
    #[error("Failed to read scenario '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Scenario file could not be written
    #[error("Failed to write scenario '{path}': {error}")]
    Write { path: PathBuf, error: String },

    /// Scenario file is not valid TOML for a scenario
    #[error("Failed to parse scenario: {0}")]
    Parse(String),

    /// Scenario could not be serialized
    #[error("Failed to serialize scenario: {0}")]
    Serialize(String),

    /// Scenario name is empty or has invalid characters
    #[error("Invalid scenario name '{name}': use lowercase letters, digits, '-' and '_'")]
    InvalidName { name: String },

    /// Scenario field has an invalid value
    #[error("Scenario '{scenario}' has invalid {field}: {reason}")]
    InvalidField {
        scenario: String,
        field: String,
        reason: String,
    },

    /// Angle field could not be parsed
    #[error("Scenario angle error: {0}")]
    Angle(#[from] AngleError),

    /// Physics parameters rejected by the simulator
    #[error("Scenario simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

/// Scenario discovery errors
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Path does not exist
    #[error("Scenario path not found: {path}")]
    NotFound { path: PathBuf },

    /// Directory walk failed
    #[error("Failed to walk '{path}': {error}")]
    Walk { path: PathBuf, error: String },
}

/// Top-level ballistics error type
#[derive(Error, Debug)]
pub enum BallisticsError {
    /// Angle error
    #[error("Angle error: {0}")]
    Angle(#[from] AngleError),

    /// Projectile error
    #[error("Projectile error: {0}")]
    Projectile(#[from] ProjectileError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Simulation error
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Scenario error
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Discovery error
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Global config error
    #[error("Config error: {0}")]
    Config(#[from] GlobalConfigError),

    /// Generic error
    #[error("{0}")]
    Generic(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_reports_max_range() {
        let err = SolverError::OutOfRange {
            distance: 500.0,
            height: 0.0,
            max_range: 101.936_799,
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("101.94"));
    }

    #[test]
    fn test_top_level_wraps_domain_errors() {
        let err: BallisticsError = ProjectileError::TooFewSamples { samples: 1 }.into();
        assert!(matches!(err, BallisticsError::Projectile(_)));
        assert!(err.to_string().starts_with("Projectile error:"));
    }

    #[test]
    fn test_scenario_error_from_angle_error() {
        let err: ScenarioError = AngleError::Invalid {
            input: "north".to_string(),
        }
        .into();
        assert!(err.to_string().contains("north"));
    }
}
