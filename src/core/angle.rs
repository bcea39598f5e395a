//! Angle parsing and unit conversion
//!
//! Angles are stored in radians. Text input accepts an optional unit suffix:
//! `deg` (or `°`), `rad` or `mil`. A bare number is read as degrees.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AngleError;

/// NATO mils in a full turn
pub const MILS_PER_TURN: f64 = 6400.0;

/// An angle, stored in radians
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// Zero angle
    pub const ZERO: Angle = Angle(0.0);

    /// Create an angle from radians
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Create an angle from degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// Create an angle from NATO mils
    pub fn from_mils(mils: f64) -> Self {
        Self(mils * std::f64::consts::TAU / MILS_PER_TURN)
    }

    /// Value in radians
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// Value in degrees
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Value in NATO mils
    pub fn mils(self) -> f64 {
        self.0 * MILS_PER_TURN / std::f64::consts::TAU
    }
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AngleError::Invalid {
            input: s.to_string(),
        };

        let re = Regex::new(
            r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(deg|°|rad|mil)?\s*$",
        )
        .map_err(|_| invalid())?;

        let caps = re.captures(s).ok_or_else(invalid)?;
        let value: f64 = caps[1].parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(AngleError::NotFinite {
                input: s.to_string(),
            });
        }

        let angle = match caps.get(2).map(|m| m.as_str()) {
            Some("rad") => Angle::from_radians(value),
            Some("mil") => Angle::from_mils(value),
            _ => Angle::from_degrees(value),
        };
        Ok(angle)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}deg", p, self.degrees()),
            None => write!(f, "{}deg", self.degrees()),
        }
    }
}

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Raw::Number(deg) if deg.is_finite() => Ok(Angle::from_degrees(deg)),
            Raw::Number(deg) => Err(serde::de::Error::custom(format!(
                "angle {deg} is not finite"
            ))),
        }
    }
}
