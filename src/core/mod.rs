//! Core logic module
//!
//! # Submodules
//!
//! - [`angle`] - Angle units and parsing
//! - [`scenario`] - Scenario file parsing, validation and execution
//! - [`batch`] - Concurrent execution of many scenarios
//! - [`global_config`] - Global configuration management

pub mod angle;
pub mod batch;
pub mod global_config;
pub mod scenario;
