//! Firing solutions in a vacuum
//!
//! Finds the launch elevations whose trajectory passes through a target at
//! horizontal distance `d` and height `h` relative to the launch point.
//! With k = v⁴ − g(g·d² + 2·h·v²) the solutions are
//! θ = atan((v² ± √k) / (g·d)).

use serde::Serialize;

use crate::core::angle::Angle;
use crate::error::SolverError;

/// The two elevations that reach a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiringSolution {
    /// Flat arc
    pub low: Angle,
    /// Lobbed arc
    pub high: Angle,
    /// Time to target along the flat arc
    pub low_time: f64,
    /// Time to target along the lobbed arc
    pub high_time: f64,
}

impl FiringSolution {
    /// True when only one elevation reaches the target
    pub fn is_single(&self) -> bool {
        (self.high.radians() - self.low.radians()).abs() < f64::EPSILON
    }
}

/// Flat-ground maximum range for a launch speed
pub fn max_range(speed: f64, gravity: f64) -> f64 {
    speed * speed / gravity
}

fn require_positive(name: &'static str, value: f64) -> Result<(), SolverError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidParameter { name, value })
    }
}

/// Solve for the elevations that hit a target
///
/// `height` is the target height relative to the launch point and may be
/// negative.
pub fn solve_elevation(
    speed: f64,
    distance: f64,
    height: f64,
    gravity: f64,
) -> Result<FiringSolution, SolverError> {
    require_positive("speed", speed)?;
    require_positive("distance", distance)?;
    require_positive("gravity", gravity)?;
    if !height.is_finite() {
        return Err(SolverError::InvalidParameter {
            name: "height",
            value: height,
        });
    }

    let v2 = speed * speed;
    let k = v2 * v2 - gravity * (gravity * distance * distance + 2.0 * height * v2);
    if k < 0.0 {
        return Err(SolverError::OutOfRange {
            distance,
            height,
            max_range: max_range(speed, gravity),
        });
    }

    let root = k.sqrt();
    let gd = gravity * distance;
    let low = ((v2 - root) / gd).atan();
    let high = ((v2 + root) / gd).atan();
    let time = |theta: f64| distance / (speed * theta.cos());

    tracing::debug!(
        low_deg = low.to_degrees(),
        high_deg = high.to_degrees(),
        "Solved firing elevations"
    );

    Ok(FiringSolution {
        low: Angle::from_radians(low),
        high: Angle::from_radians(high),
        low_time: time(low),
        high_time: time(high),
    })
}
