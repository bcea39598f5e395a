//! CLI implementation for `ballistics config`

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Context;

#[derive(Debug, Serialize)]
struct EffectiveConfig {
    path: String,
    gravity: f64,
    air_density: f64,
    time_step: f64,
    max_time: f64,
    samples: usize,
    json: bool,
}

/// Print the effective configuration
pub fn execute_show(ctx: &Context) -> Result<()> {
    let out = &ctx.output;
    let config = ctx.global_config()?;
    let effective = EffectiveConfig {
        path: ctx.dirs.global_config_path().display().to_string(),
        gravity: config.gravity(),
        air_density: config.air_density(),
        time_step: config.time_step(),
        max_time: config.max_time(),
        samples: config.samples(),
        json: config.json(),
    };

    if out.json {
        return out.print_json(&effective);
    }

    out.line(format!("# {}", effective.path));
    out.line(format!("environment.gravity = {}", effective.gravity));
    out.line(format!("environment.air_density = {}", effective.air_density));
    out.line(format!("simulation.time_step = {}", effective.time_step));
    out.line(format!("simulation.max_time = {}", effective.max_time));
    out.line(format!("simulation.samples = {}", effective.samples));
    out.line(format!("output.json = {}", effective.json));
    Ok(())
}

/// Print the config file location
pub fn execute_path(ctx: &Context) -> Result<()> {
    let path = ctx.dirs.global_config_path();
    if ctx.output.json {
        return ctx
            .output
            .print_json(&serde_json::json!({ "path": path.display().to_string() }));
    }
    if !ctx.output.quiet {
        println!("{}", path.display());
    }
    Ok(())
}

/// Set a value and save the config file
pub fn execute_set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.global_config()?;
    config.set(key, value)?;
    config
        .save(&ctx.dirs)
        .context("Failed to save global config")?;

    tracing::info!(key, value, "Updated global config");
    if ctx.output.json {
        return ctx
            .output
            .print_json(&serde_json::json!({ "key": key, "value": value }));
    }
    ctx.output.success(format!("Set {key} = {value}"));
    Ok(())
}
