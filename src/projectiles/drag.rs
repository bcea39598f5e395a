//! Numerical point-mass model with quadratic air drag
//!
//! Integrates the 3D equations of motion with classic fourth-order
//! Runge-Kutta. z points up; the ground is the plane z = 0.
//!
//! a = (0, 0, -g) - (ρ·Cd·A / 2m)·|v - w|·(v - w)

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    DEFAULT_MAX_TIME, DEFAULT_TIME_STEP, MAX_SIMULATION_STEPS, SEA_LEVEL_AIR_DENSITY,
    STANDARD_GRAVITY,
};
use crate::core::angle::Angle;
use crate::error::SimulationError;
use crate::types::{Vec3D, Vec3DSphere};

/// Physical properties of the projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Mass in kg
    pub mass: f64,
    /// Diameter in m
    pub diameter: f64,
    /// Dimensionless drag coefficient
    pub drag_coefficient: f64,
}

impl Body {
    /// Frontal reference area in m²
    pub fn reference_area(&self) -> f64 {
        std::f64::consts::PI * self.diameter * self.diameter / 4.0
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let checks = [
            ("mass", self.mass, self.mass > 0.0),
            ("diameter", self.diameter, self.diameter > 0.0),
            (
                "drag_coefficient",
                self.drag_coefficient,
                self.drag_coefficient >= 0.0,
            ),
        ];
        for (field, value, ok) in checks {
            if !(ok && value.is_finite()) {
                return Err(SimulationError::InvalidBody { field, value });
            }
        }
        Ok(())
    }
}

/// The medium the projectile flies through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Gravity magnitude in m/s²
    pub gravity: f64,
    /// Air density in kg/m³
    pub air_density: f64,
    /// Wind velocity in m/s
    pub wind: Vec3D,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            air_density: SEA_LEVEL_AIR_DENSITY,
            wind: Vec3D::ZERO,
        }
    }
}

impl Environment {
    /// Environment without air
    pub fn vacuum(gravity: f64) -> Self {
        Self {
            gravity,
            air_density: 0.0,
            wind: Vec3D::ZERO,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(SimulationError::InvalidEnvironment {
                field: "gravity",
                value: self.gravity,
            });
        }
        if !(self.air_density.is_finite() && self.air_density >= 0.0) {
            return Err(SimulationError::InvalidEnvironment {
                field: "air_density",
                value: self.air_density,
            });
        }
        if !self.wind.is_finite() {
            return Err(SimulationError::InvalidEnvironment {
                field: "wind",
                value: self.wind.length(),
            });
        }
        Ok(())
    }
}

/// Position and velocity at launch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchState {
    pub position: Vec3D,
    pub velocity: Vec3D,
    /// Firing direction, the reference line for drift
    pub azimuth: Angle,
}

impl LaunchState {
    /// Launch from `height` above the origin
    ///
    /// `elevation` is measured up from the horizon, `azimuth` from +x towards +y.
    pub fn from_angles(speed: f64, elevation: Angle, azimuth: Angle, height: f64) -> Self {
        let velocity = Vec3DSphere {
            azimuth: azimuth.radians(),
            polar: FRAC_PI_2 - elevation.radians(),
            radius: speed,
        }
        .to_vec();

        Self {
            position: Vec3D::new(0.0, 0.0, height),
            velocity,
            azimuth,
        }
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if self.position.is_finite()
            && self.velocity.is_finite()
            && self.azimuth.radians().is_finite()
            && self.position.z >= 0.0
        {
            Ok(())
        } else {
            Err(SimulationError::InvalidLaunch)
        }
    }
}

/// A point on a simulated trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint3D {
    pub time: f64,
    pub position: Vec3D,
    pub velocity: Vec3D,
}

/// Ground contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Impact {
    pub time: f64,
    pub position: Vec3D,
    pub velocity: Vec3D,
    /// Horizontal distance from the launch point
    pub range: f64,
    /// Signed lateral offset from the launch azimuth line, positive to the left
    pub drift: f64,
}

/// Output of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// State after every integration step, plus the launch point
    pub points: Vec<TrajectoryPoint3D>,
    /// Number of RK4 steps taken
    pub steps: usize,
    /// `None` when `max_time` elapsed before landing
    pub impact: Option<Impact>,
    /// Highest point reached
    pub apex: TrajectoryPoint3D,
}

/// Integration settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Step size in seconds
    pub time_step: f64,
    /// Hard stop in seconds
    pub max_time: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            max_time: DEFAULT_MAX_TIME,
        }
    }
}

#[derive(Clone, Copy)]
struct State {
    position: Vec3D,
    velocity: Vec3D,
}

impl Simulation {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimulationError::InvalidSettings {
                field: "time_step",
                value: self.time_step,
            });
        }
        if !(self.max_time.is_finite() && self.max_time >= self.time_step) {
            return Err(SimulationError::InvalidSettings {
                field: "max_time",
                value: self.max_time,
            });
        }
        let steps = (self.max_time / self.time_step).ceil();
        if steps > MAX_SIMULATION_STEPS as f64 {
            return Err(SimulationError::TooManySteps {
                steps,
                limit: MAX_SIMULATION_STEPS,
            });
        }
        Ok(())
    }

    /// Integrate the trajectory until ground contact or `max_time`
    pub fn run(
        &self,
        body: &Body,
        env: &Environment,
        launch: LaunchState,
    ) -> Result<SimulationResult, SimulationError> {
        self.validate()?;
        body.validate()?;
        env.validate()?;
        launch.validate()?;

        let drag_factor = 0.5 * env.air_density * body.drag_coefficient * body.reference_area()
            / body.mass;
        let gravity = Vec3D::new(0.0, 0.0, -env.gravity);
        let wind = env.wind;
        let accel = |v: Vec3D| {
            let relative = v - wind;
            gravity - relative * (drag_factor * relative.length())
        };

        let dt = self.time_step;
        let mut time = 0.0;
        let mut state = State {
            position: launch.position,
            velocity: launch.velocity,
        };
        let mut points = vec![TrajectoryPoint3D {
            time,
            position: state.position,
            velocity: state.velocity,
        }];
        let mut apex = points[0];
        let mut impact = None;
        let mut steps = 0;

        tracing::debug!(dt, max_time = self.max_time, drag_factor, "Starting simulation");

        while time < self.max_time {
            let step = dt.min(self.max_time - time);
            let next = rk4_step(state, step, &accel);
            let next_time = time + step;
            steps += 1;

            if !(next.position.is_finite() && next.velocity.is_finite()) {
                return Err(SimulationError::Diverged { time: next_time });
            }

            if next.position.z < 0.0 {
                let hit = interpolate_ground(time, state, step, next);
                points.push(hit);
                impact = Some(make_impact(hit, &launch));
                break;
            }

            time = next_time;
            state = next;
            let point = TrajectoryPoint3D {
                time,
                position: state.position,
                velocity: state.velocity,
            };
            if point.position.z > apex.position.z {
                apex = point;
            }
            points.push(point);
        }

        if impact.is_none() {
            tracing::warn!(
                max_time = self.max_time,
                height = state.position.z,
                "Projectile did not land before max_time"
            );
        }

        Ok(SimulationResult {
            points,
            steps,
            impact,
            apex,
        })
    }
}

fn rk4_step(state: State, dt: f64, accel: &impl Fn(Vec3D) -> Vec3D) -> State {
    let k1_v = accel(state.velocity);
    let k1_x = state.velocity;

    let v2 = state.velocity + k1_v * (dt / 2.0);
    let k2_v = accel(v2);
    let k2_x = v2;

    let v3 = state.velocity + k2_v * (dt / 2.0);
    let k3_v = accel(v3);
    let k3_x = v3;

    let v4 = state.velocity + k3_v * dt;
    let k4_v = accel(v4);
    let k4_x = v4;

    State {
        position: state.position + (k1_x + k2_x * 2.0 + k3_x * 2.0 + k4_x) * (dt / 6.0),
        velocity: state.velocity + (k1_v + k2_v * 2.0 + k3_v * 2.0 + k4_v) * (dt / 6.0),
    }
}

/// Linear interpolation of the z = 0 crossing inside one step
fn interpolate_ground(time: f64, before: State, dt: f64, after: State) -> TrajectoryPoint3D {
    let z0 = before.position.z;
    let z1 = after.position.z;
    let fraction = if z0 - z1 > 0.0 { z0 / (z0 - z1) } else { 0.0 };

    let mut position = before.position + (after.position - before.position) * fraction;
    position.z = 0.0;

    TrajectoryPoint3D {
        time: time + dt * fraction,
        position,
        velocity: before.velocity + (after.velocity - before.velocity) * fraction,
    }
}

fn make_impact(hit: TrajectoryPoint3D, launch: &LaunchState) -> Impact {
    let offset = hit.position - launch.position;
    let flat = Vec3D::new(offset.x, offset.y, 0.0);

    let azimuth = launch.azimuth.radians();
    let heading = Vec3D::new(azimuth.cos(), azimuth.sin(), 0.0);
    let drift = heading.cross(&flat).z;

    Impact {
        time: hit.time,
        position: hit.position,
        velocity: hit.velocity,
        range: flat.length(),
        drift,
    }
}

/// Keep about `n` evenly spaced points, always including the first and last
pub fn decimate(points: &[TrajectoryPoint3D], n: usize) -> Vec<TrajectoryPoint3D> {
    let n = n.max(2);
    if points.len() <= n {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut indices: Vec<usize> = (0..n).map(|i| i * last / (n - 1)).collect();
    indices.dedup();
    indices.into_iter().map(|i| points[i]).collect()
}
