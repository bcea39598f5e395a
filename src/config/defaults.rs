//! Default configuration values

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// ISA sea-level air density in kg/m³
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;

/// Default integration time step in seconds
pub const DEFAULT_TIME_STEP: f64 = 0.001;

/// Default upper bound on simulated flight time in seconds
pub const DEFAULT_MAX_TIME: f64 = 120.0;

/// Upper bound on RK4 steps in one simulation run
pub const MAX_SIMULATION_STEPS: usize = 1_000_000;

/// Default number of trajectory points kept for output
pub const DEFAULT_SAMPLES: usize = 50;

/// Name of the global config file inside the config directory
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// File extension of scenario files
pub const SCENARIO_EXTENSION: &str = "toml";
