//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::types::Vec3D;

    /// Generate a finite vector component of moderate magnitude
    pub fn finite_component() -> impl Strategy<Value = f64> {
        -1.0e3f64..1.0e3
    }

    /// Generate a finite 3D vector
    pub fn vec3d() -> impl Strategy<Value = Vec3D> {
        (finite_component(), finite_component(), finite_component())
            .prop_map(|(x, y, z)| Vec3D::new(x, y, z))
    }

    /// Generate a launch speed in m/s
    pub fn launch_speed() -> impl Strategy<Value = f64> {
        1.0f64..1500.0
    }

    /// Generate a launch elevation in degrees, strictly between 0 and 90
    pub fn elevation_degrees() -> impl Strategy<Value = f64> {
        1.0f64..89.0
    }

    /// Generate a gravity magnitude covering the Moon up to Jupiter
    pub fn gravity() -> impl Strategy<Value = f64> {
        1.6f64..25.0
    }

    /// Generate a non-negative launch height in metres
    pub fn launch_height() -> impl Strategy<Value = f64> {
        0.0f64..500.0
    }

    /// Generate a valid scenario name
    pub fn scenario_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,20}"
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_vec3d_generator_is_finite(v in vec3d()) {
            prop_assert!(v.is_finite());
        }

        #[test]
        fn test_scenario_name_generator(name in scenario_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        }

        #[test]
        fn test_elevation_generator_in_open_quadrant(deg in elevation_degrees()) {
            prop_assert!(deg > 0.0 && deg < 90.0);
        }
    }
}
