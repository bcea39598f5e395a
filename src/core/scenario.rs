//! Scenario files
//!
//! A scenario describes one drag simulation in TOML: launch conditions,
//! projectile body, environment and integration settings. Environment and
//! simulation fields are optional and resolved against the global config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::angle::Angle;
use crate::core::global_config::GlobalConfig;
use crate::error::ScenarioError;
use crate::projectiles::drag::{
    decimate, Body, Environment, Impact, LaunchState, Simulation, TrajectoryPoint3D,
};
use crate::types::Vec3D;

/// A scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario: ScenarioInfo,
    pub launch: LaunchConfig,
    pub body: Body,
    #[serde(default)]
    pub environment: EnvironmentOverrides,
    #[serde(default)]
    pub simulation: SimulationOverrides,
}

/// Scenario metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Launch conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Muzzle speed in m/s
    pub speed: f64,
    /// Elevation above the horizon
    pub elevation: Angle,
    /// Heading from +x towards +y
    #[serde(default)]
    pub azimuth: Angle,
    /// Launch height in m
    #[serde(default)]
    pub height: f64,
}

/// Environment fields that override the global config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Vec3D>,
}

/// Simulation fields that override the global config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
}

/// A scenario with every default filled in, ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    pub name: String,
    pub launch: LaunchState,
    pub body: Body,
    pub environment: Environment,
    pub simulation: Simulation,
    pub samples: usize,
}

/// Outcome of running a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    /// `None` when the projectile had not landed at `max_time`
    pub impact: Option<Impact>,
    pub apex: TrajectoryPoint3D,
    /// Number of integration steps taken
    pub steps: usize,
    /// Decimated trajectory
    pub points: Vec<TrajectoryPoint3D>,
}

/// Check a scenario name: lowercase letters, digits, '-' and '_'
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

impl Scenario {
    /// Parse a scenario from TOML
    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        toml::from_str(content).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Serialize the scenario to TOML
    pub fn to_toml(&self) -> Result<String, ScenarioError> {
        toml::to_string_pretty(self).map_err(|e| ScenarioError::Serialize(e.to_string()))
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScenarioError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// A valid starter scenario
    pub fn template(name: &str) -> Self {
        Self {
            scenario: ScenarioInfo {
                name: name.to_string(),
                description: Some("Baseball hit at 45 degrees".to_string()),
            },
            launch: LaunchConfig {
                speed: 40.0,
                elevation: Angle::from_degrees(45.0),
                azimuth: Angle::ZERO,
                height: 1.0,
            },
            body: Body {
                mass: 0.145,
                diameter: 0.074,
                drag_coefficient: 0.35,
            },
            environment: EnvironmentOverrides {
                gravity: None,
                air_density: None,
                wind: Some(Vec3D::ZERO),
            },
            simulation: SimulationOverrides::default(),
        }
    }

    fn invalid(&self, field: &str, reason: &str) -> ScenarioError {
        ScenarioError::InvalidField {
            scenario: self.scenario.name.clone(),
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check fields that do not depend on the global config
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !is_valid_name(&self.scenario.name) {
            return Err(ScenarioError::InvalidName {
                name: self.scenario.name.clone(),
            });
        }
        if !(self.launch.speed.is_finite() && self.launch.speed > 0.0) {
            return Err(self.invalid("launch.speed", "must be positive and finite"));
        }
        if !(self.launch.height.is_finite() && self.launch.height >= 0.0) {
            return Err(self.invalid("launch.height", "must be non-negative and finite"));
        }
        if let Some(samples) = self.simulation.samples {
            if samples < 2 {
                return Err(self.invalid("simulation.samples", "must be at least 2"));
            }
        }
        self.body.validate()?;
        Ok(())
    }

    /// Fill unset fields from the global config and validate the result
    pub fn resolve(&self, global: &GlobalConfig) -> Result<ResolvedScenario, ScenarioError> {
        self.validate()?;

        let environment = Environment {
            gravity: self.environment.gravity.unwrap_or_else(|| global.gravity()),
            air_density: self
                .environment
                .air_density
                .unwrap_or_else(|| global.air_density()),
            wind: self.environment.wind.unwrap_or(Vec3D::ZERO),
        };
        environment.validate()?;

        let simulation = Simulation {
            time_step: self
                .simulation
                .time_step
                .unwrap_or_else(|| global.time_step()),
            max_time: self.simulation.max_time.unwrap_or_else(|| global.max_time()),
        };
        simulation.validate()?;

        let samples = self.simulation.samples.unwrap_or_else(|| global.samples());
        if samples < 2 {
            return Err(self.invalid("simulation.samples", "must be at least 2"));
        }

        Ok(ResolvedScenario {
            name: self.scenario.name.clone(),
            launch: LaunchState::from_angles(
                self.launch.speed,
                self.launch.elevation,
                self.launch.azimuth,
                self.launch.height,
            ),
            body: self.body,
            environment,
            simulation,
            samples,
        })
    }
}

impl ResolvedScenario {
    /// Run the simulation
    pub fn run(&self) -> Result<ScenarioReport, ScenarioError> {
        let result = self
            .simulation
            .run(&self.body, &self.environment, self.launch)?;

        tracing::info!(
            scenario = %self.name,
            steps = result.steps,
            landed = result.impact.is_some(),
            "Scenario finished"
        );

        Ok(ScenarioReport {
            name: self.name.clone(),
            impact: result.impact,
            apex: result.apex,
            steps: result.steps,
            points: decimate(&result.points, self.samples),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{DEFAULT_SAMPLES, STANDARD_GRAVITY};
    use crate::core::global_config::{EnvironmentConfig, SimulationConfig};
    use crate::test_utils::generators::scenario_name;
    use proptest::prelude::*;

    const SAMPLE: &str = r#"
[scenario]
name = "rifle-100"
description = "Flat shot"

[launch]
speed = 850.0
elevation = "0.1deg"
height = 1.5

[body]
mass = 0.0095
diameter = 0.00782
drag_coefficient = 0.295

[environment]
wind = { x = 0.0, y = 3.0, z = 0.0 }

[simulation]
time_step = 0.0005
samples = 20
"#;

    #[test]
    fn test_parse_sample() {
        let scenario = Scenario::from_toml(SAMPLE).unwrap();

        assert_eq!(scenario.scenario.name, "rifle-100");
        assert_eq!(scenario.launch.speed, 850.0);
        assert!((scenario.launch.elevation.degrees() - 0.1).abs() < 1e-12);
        assert_eq!(scenario.launch.azimuth, Angle::ZERO);
        assert_eq!(scenario.environment.wind, Some(Vec3D::new(0.0, 3.0, 0.0)));
        assert_eq!(scenario.environment.gravity, None);
        assert_eq!(scenario.simulation.samples, Some(20));
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_missing_body_is_parse_error() {
        let content = r#"
[scenario]
name = "x"

[launch]
speed = 10.0
elevation = 45
"#;
        assert!(matches!(
            Scenario::from_toml(content),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn test_bad_angle_is_parse_error() {
        let content = SAMPLE.replace("\"0.1deg\"", "\"up\"");
        let err = Scenario::from_toml(&content).unwrap_err();
        assert!(err.to_string().contains("up"));
    }

    #[test]
    fn test_resolve_prefers_scenario_then_global_then_builtin() {
        let scenario = Scenario::from_toml(SAMPLE).unwrap();
        let global = GlobalConfig {
            environment: EnvironmentConfig {
                gravity: None,
                air_density: Some(1.0),
            },
            simulation: SimulationConfig {
                time_step: Some(0.01),
                max_time: Some(10.0),
                samples: Some(99),
            },
            ..GlobalConfig::default()
        };

        let resolved = scenario.resolve(&global).unwrap();

        assert_eq!(resolved.environment.gravity, STANDARD_GRAVITY);
        assert_eq!(resolved.environment.air_density, 1.0);
        assert_eq!(resolved.simulation.time_step, 0.0005);
        assert_eq!(resolved.simulation.max_time, 10.0);
        assert_eq!(resolved.samples, 20);
        assert_eq!(resolved.launch.position, Vec3D::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut scenario = Scenario::template("ok");

        scenario.scenario.name = "Bad Name".to_string();
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::InvalidName { .. })
        ));

        scenario.scenario.name = "ok".to_string();
        scenario.launch.speed = 0.0;
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::InvalidField { ref field, .. }) if field == "launch.speed"
        ));

        scenario.launch.speed = 10.0;
        scenario.body.mass = -1.0;
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::Simulation(_))
        ));

        scenario.body.mass = 1.0;
        scenario.environment.gravity = Some(0.0);
        assert!(matches!(
            scenario.resolve(&GlobalConfig::default()),
            Err(ScenarioError::Simulation(_))
        ));
    }

    #[test]
    fn test_template_runs_and_lands() {
        let report = Scenario::template("starter")
            .resolve(&GlobalConfig::default())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(report.name, "starter");
        let impact = report.impact.unwrap();
        assert!(impact.range > 50.0 && impact.range < 163.0);
        assert_eq!(report.points.len(), DEFAULT_SAMPLES);
        assert!(report.steps > DEFAULT_SAMPLES);
    }

    #[test]
    fn test_resolve_rejects_global_samples_below_two() {
        let global: GlobalConfig = toml::from_str("[simulation]\nsamples = 0\n").unwrap();

        let err = Scenario::template("x").resolve(&global).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::InvalidField { ref field, .. } if field == "simulation.samples"
        ));
    }

    #[test]
    fn test_report_counts_integration_steps() {
        let mut scenario = Scenario::template("short");
        scenario.simulation.time_step = Some(0.5);
        scenario.simulation.max_time = Some(1.0);
        scenario.launch.speed = 100.0;
        scenario.launch.elevation = Angle::from_degrees(80.0);

        let report = scenario
            .resolve(&GlobalConfig::default())
            .unwrap()
            .run()
            .unwrap();

        assert!(report.impact.is_none());
        assert_eq!(report.steps, 2);
        assert_eq!(report.points.len(), 3);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Scenario::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ScenarioError::Read { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Templates are valid and survive a TOML round trip
        #[test]
        fn prop_template_toml_roundtrip(name in scenario_name()) {
            let scenario = Scenario::template(&name);
            prop_assert!(scenario.validate().is_ok());

            let toml_str = scenario.to_toml().unwrap();
            let parsed = Scenario::from_toml(&toml_str).unwrap();
            prop_assert_eq!(parsed.scenario, scenario.scenario);
            prop_assert_eq!(parsed.body, scenario.body);
            prop_assert!((parsed.launch.elevation.radians() - scenario.launch.elevation.radians()).abs() < 1e-12);
        }
    }
}
