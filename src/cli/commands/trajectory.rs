//! CLI implementation for `ballistics trajectory`

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::output::num;
use crate::cli::Context;
use crate::core::angle::Angle;
use crate::error::ProjectileError;
use crate::projectiles::simple::{FlightSummary, Projectile, TrajectoryPoint};

/// Parsed arguments of the trajectory command
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryArgs {
    pub speed: f64,
    pub angle: Angle,
    pub height: f64,
    pub gravity: Option<f64>,
    pub samples: Option<usize>,
}

#[derive(Debug, Serialize)]
struct TrajectoryOutput {
    speed: f64,
    elevation: Angle,
    height: f64,
    gravity: f64,
    summary: FlightSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Vec<TrajectoryPoint>>,
}

/// Execute the trajectory command
pub fn execute(ctx: &Context, args: &TrajectoryArgs) -> Result<()> {
    let out = &ctx.output;
    let gravity = match args.gravity {
        Some(g) => g,
        None => ctx.global_config()?.gravity(),
    };

    if !(args.speed.is_finite() && args.speed >= 0.0) {
        return Err(ProjectileError::InvalidSpeed { speed: args.speed }.into());
    }

    let projectile =
        Projectile::from_launch(args.speed, args.angle, gravity).with_height(args.height);
    tracing::debug!(?projectile, "Computing vacuum trajectory");

    let summary = projectile
        .summary()
        .context("Failed to compute trajectory")?;
    let points = args
        .samples
        .map(|n| projectile.trajectory(n))
        .transpose()
        .context("Failed to sample trajectory")?;

    if out.json {
        return out.print_json(&TrajectoryOutput {
            speed: args.speed,
            elevation: args.angle,
            height: args.height,
            gravity,
            summary,
            points,
        });
    }

    out.line(format!(
        "Launch: {} m/s at {:.2} from {} m (g = {} m/s²)",
        args.speed, args.angle, args.height, gravity
    ));
    out.line(format!("  Time of flight  {} s", num(summary.time_of_flight, 10, 3)));
    out.line(format!("  Range           {} m", num(summary.range, 10, 3)));
    out.line(format!("  Max height      {} m", num(summary.max_height, 10, 3)));
    out.line(format!("  Time to apex    {} s", num(summary.time_to_apex, 10, 3)));
    out.line(format!("  Impact speed    {} m/s", num(summary.impact_speed, 10, 3)));
    out.line(format!(
        "  Impact angle    {} deg",
        num(summary.impact_angle.degrees(), 10, 3)
    ));

    if let Some(points) = points {
        out.line("");
        out.line(format!(
            "{:>10} {:>12} {:>12} {:>10} {:>10}",
            "t (s)", "x (m)", "y (m)", "vx (m/s)", "vy (m/s)"
        ));
        for p in &points {
            out.line(format!(
                "{} {} {} {} {}",
                num(p.time, 10, 3),
                num(p.position.x, 12, 3),
                num(p.position.y, 12, 3),
                num(p.velocity.x, 10, 3),
                num(p.velocity.y, 10, 3)
            ));
        }
    }

    Ok(())
}
