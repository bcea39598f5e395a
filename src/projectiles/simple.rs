//! Closed-form projectile motion in a vacuum
//!
//! Motion happens in the vertical plane: x is the horizontal distance from
//! the launch point, y is the height above ground. Gravity is a positive
//! magnitude pulling towards negative y.

use serde::Serialize;

use crate::core::angle::Angle;
use crate::error::ProjectileError;
use crate::types::{Vec2D, Vec2DSphere};

/// A projectile launched in a uniform gravity field without air
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Launch velocity
    pub velocity: Vec2D,

    /// Gravity magnitude in m/s²
    pub gravity: f64,

    /// Launch height above ground in metres
    pub height: f64,
}

/// Position and velocity at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    /// Seconds since launch
    pub time: f64,
    pub position: Vec2D,
    pub velocity: Vec2D,
}

/// Key figures of a vacuum trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightSummary {
    pub time_of_flight: f64,
    pub range: f64,
    pub max_height: f64,
    pub time_to_apex: f64,
    pub impact_speed: f64,
    /// Angle below the horizon at impact
    pub impact_angle: Angle,
}

impl Projectile {
    /// Create a projectile launched from ground level
    pub fn new(velocity: Vec2D, gravity: f64) -> Self {
        Self {
            velocity,
            gravity,
            height: 0.0,
        }
    }

    /// Create a projectile from launch speed and elevation above the horizon
    pub fn from_launch(speed: f64, elevation: Angle, gravity: f64) -> Self {
        let velocity = Vec2DSphere {
            polar: elevation.radians(),
            radius: speed,
        }
        .to_vec();
        Self::new(velocity, gravity)
    }

    /// Set the launch height
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Check that the parameters describe a projectile that lands
    pub fn validate(&self) -> Result<(), ProjectileError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ProjectileError::InvalidGravity {
                gravity: self.gravity,
            });
        }
        if !(self.height.is_finite() && self.height >= 0.0) {
            return Err(ProjectileError::InvalidHeight {
                height: self.height,
            });
        }
        if !self.velocity.is_finite() {
            return Err(ProjectileError::InvalidVelocity {
                x: self.velocity.x,
                y: self.velocity.y,
            });
        }
        Ok(())
    }

    /// Position at time `t`
    pub fn position_at(&self, t: f64) -> Vec2D {
        Vec2D {
            x: self.velocity.x * t,
            y: self.height + self.velocity.y * t - 0.5 * self.gravity * t * t,
        }
    }

    /// Velocity at time `t`
    pub fn velocity_at(&self, t: f64) -> Vec2D {
        Vec2D {
            x: self.velocity.x,
            y: self.velocity.y - self.gravity * t,
        }
    }

    /// Time until the vertical velocity reaches zero
    ///
    /// Zero when the projectile is launched level or downwards.
    pub fn time_to_apex(&self) -> Result<f64, ProjectileError> {
        self.validate()?;
        Ok((self.velocity.y / self.gravity).max(0.0))
    }

    /// Highest point above ground
    pub fn max_height(&self) -> Result<f64, ProjectileError> {
        self.validate()?;
        let vy = self.velocity.y;
        if vy > 0.0 {
            Ok(self.height + vy * vy / (2.0 * self.gravity))
        } else {
            Ok(self.height)
        }
    }

    /// Time until the projectile returns to ground level
    pub fn time_of_flight(&self) -> Result<f64, ProjectileError> {
        self.validate()?;
        let vy = self.velocity.y;
        let discriminant = vy * vy + 2.0 * self.gravity * self.height;
        Ok(((vy + discriminant.sqrt()) / self.gravity).max(0.0))
    }

    /// Horizontal distance covered before landing
    pub fn range(&self) -> Result<f64, ProjectileError> {
        Ok(self.velocity.x * self.time_of_flight()?)
    }

    /// Velocity on impact with the ground
    pub fn impact_velocity(&self) -> Result<Vec2D, ProjectileError> {
        Ok(self.velocity_at(self.time_of_flight()?))
    }

    /// Sample the trajectory at `samples` evenly spaced times
    ///
    /// The first point is the launch, the last point is the impact.
    pub fn trajectory(&self, samples: usize) -> Result<Vec<TrajectoryPoint>, ProjectileError> {
        if samples < 2 {
            return Err(ProjectileError::TooFewSamples { samples });
        }
        let flight = self.time_of_flight()?;
        let step = flight / (samples - 1) as f64;

        Ok((0..samples)
            .map(|i| {
                // Pin the last sample to the impact time exactly
                let time = if i == samples - 1 {
                    flight
                } else {
                    step * i as f64
                };
                TrajectoryPoint {
                    time,
                    position: self.position_at(time),
                    velocity: self.velocity_at(time),
                }
            })
            .collect())
    }

    /// Compute all key figures of the trajectory
    pub fn summary(&self) -> Result<FlightSummary, ProjectileError> {
        let time_of_flight = self.time_of_flight()?;
        let impact = self.velocity_at(time_of_flight);

        Ok(FlightSummary {
            time_of_flight,
            range: self.velocity.x * time_of_flight,
            max_height: self.max_height()?,
            time_to_apex: self.time_to_apex()?,
            impact_speed: impact.length(),
            impact_angle: Angle::from_radians((-impact.y).atan2(impact.x)),
        })
    }
}
