//! Ballistics calculator
//!
//! Projectile motion in a uniform gravity field: vector algebra, closed-form
//! vacuum trajectories, firing solutions and a numerical drag model.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`types`] - Cartesian and spherical vectors
//! - [`projectiles`] - Vacuum, solver and drag models
//! - [`core`] - Angles, scenarios, batches and global configuration
//! - [`infra`] - Platform directories and scenario discovery
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`config`] - Constants and defaults
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod projectiles;
pub mod types;

#[cfg(test)]
pub mod test_utils;
