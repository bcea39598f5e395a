//! Infrastructure layer
//!
//! Handles filesystem concerns: platform directories and scenario discovery.

pub mod dirs;
pub mod discovery;
