//! Projectile models
//!
//! - [`simple`] - closed-form motion in a vacuum, in the vertical plane
//! - [`solver`] - elevation angles that hit a target in a vacuum
//! - [`drag`] - numerical 3D point-mass motion with quadratic drag and wind

pub mod drag;
pub mod simple;
pub mod solver;
