//! CLI implementation for `ballistics solve`

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::output::num;
use crate::cli::Context;
use crate::projectiles::solver::{solve_elevation, FiringSolution};

#[derive(Debug, Serialize)]
struct SolveOutput {
    speed: f64,
    distance: f64,
    height: f64,
    gravity: f64,
    solution: FiringSolution,
}

/// Execute the solve command
pub fn execute(
    ctx: &Context,
    speed: f64,
    distance: f64,
    height: f64,
    gravity: Option<f64>,
) -> Result<()> {
    let out = &ctx.output;
    let gravity = match gravity {
        Some(g) => g,
        None => ctx.global_config()?.gravity(),
    };

    let solution = solve_elevation(speed, distance, height, gravity)
        .context("No firing solution")?;

    if out.json {
        return out.print_json(&SolveOutput {
            speed,
            distance,
            height,
            gravity,
            solution,
        });
    }

    out.line(format!(
        "Target: {distance} m away, {height} m up, at {speed} m/s (g = {gravity} m/s²)"
    ));
    if solution.is_single() {
        out.success(format!(
            "Single solution: {} deg, {} s to target",
            num(solution.low.degrees(), 0, 3),
            num(solution.low_time, 0, 3)
        ));
    } else {
        out.success(format!(
            "Low arc:  {} deg, {} s to target",
            num(solution.low.degrees(), 8, 3),
            num(solution.low_time, 0, 3)
        ));
        out.success(format!(
            "High arc: {} deg, {} s to target",
            num(solution.high.degrees(), 8, 3),
            num(solution.high_time, 0, 3)
        ));
    }
    Ok(())
}
