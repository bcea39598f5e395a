//! Configuration and constants
//!
//! - [`defaults`] - Built-in physical constants and simulation defaults

pub mod defaults;
