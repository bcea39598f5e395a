//! CLI implementation for `ballistics vector`

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::num;
use crate::cli::Context;
use crate::types::{Vec2D, Vec2DSphere, Vec3D, Vec3DSphere};

/// Everything shown for a vector
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VectorReport {
    Planar {
        vector: Vec2D,
        length: f64,
        polar: Vec2DSphere,
        polar_deg: f64,
    },
    Spatial {
        vector: Vec3D,
        length: f64,
        length_xy: f64,
        sphere: Vec3DSphere,
        azimuth_deg: f64,
        polar_deg: f64,
        projection: Vec2D,
    },
}

/// Build the report for a 2D or 3D vector
pub fn report(x: f64, y: f64, z: Option<f64>) -> VectorReport {
    match z {
        None => {
            let vector = Vec2D::new(x, y);
            let polar = vector.to_sphere();
            VectorReport::Planar {
                vector,
                length: vector.length(),
                polar,
                polar_deg: polar.polar.to_degrees(),
            }
        }
        Some(z) => {
            let vector = Vec3D::new(x, y, z);
            let sphere = vector.to_sphere();
            VectorReport::Spatial {
                vector,
                length: vector.length(),
                length_xy: vector.length_xy(),
                sphere,
                azimuth_deg: sphere.azimuth.to_degrees(),
                polar_deg: sphere.polar.to_degrees(),
                projection: vector.to_2d(),
            }
        }
    }
}

/// Execute the vector command
pub fn execute(ctx: &Context, x: f64, y: f64, z: Option<f64>) -> Result<()> {
    let out = &ctx.output;
    let report = report(x, y, z);

    if out.json {
        return out.print_json(&report);
    }

    match report {
        VectorReport::Planar {
            vector,
            length,
            polar_deg,
            ..
        } => {
            out.line(format!("Vector     ({}, {})", vector.x, vector.y));
            out.line(format!("Length     {}", num(length, 0, 6)));
            out.line(format!("Polar      {} deg", num(polar_deg, 0, 4)));
        }
        VectorReport::Spatial {
            vector,
            length,
            length_xy,
            azimuth_deg,
            polar_deg,
            projection,
            ..
        } => {
            out.line(format!(
                "Vector     ({}, {}, {})",
                vector.x, vector.y, vector.z
            ));
            out.line(format!("Length     {}", num(length, 0, 6)));
            out.line(format!("Length xy  {}", num(length_xy, 0, 6)));
            out.line(format!("Azimuth    {} deg", num(azimuth_deg, 0, 4)));
            out.line(format!("Polar      {} deg", num(polar_deg, 0, 4)));
            out.line(format!(
                "2D         ({}, {})",
                num(projection.x, 0, 6),
                num(projection.y, 0, 6)
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_report() {
        match report(3.0, 4.0, None) {
            VectorReport::Planar { length, .. } => assert_eq!(length, 5.0),
            VectorReport::Spatial { .. } => panic!("expected planar report"),
        }
    }

    #[test]
    fn test_spatial_report() {
        match report(3.0, 4.0, Some(12.0)) {
            VectorReport::Spatial {
                length,
                length_xy,
                projection,
                ..
            } => {
                assert_eq!(length, 13.0);
                assert_eq!(length_xy, 5.0);
                assert_eq!(projection, Vec2D::new(5.0, 12.0));
            }
            VectorReport::Planar { .. } => panic!("expected spatial report"),
        }
    }
}
