//! CLI implementation for `ballistics init`
//!
//! Writes `<name>.toml` with a runnable starter scenario.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::config::defaults::SCENARIO_EXTENSION;
use crate::core::scenario::{is_valid_name, Scenario};
use crate::error::ScenarioError;

#[derive(Debug, Serialize)]
struct InitOutput {
    name: String,
    path: PathBuf,
    overwritten: bool,
}

/// Write a template scenario into `dir`
///
/// Returns the path written and whether an existing file was replaced.
pub fn write_template(
    dir: &Path,
    name: &str,
    force: bool,
) -> Result<(PathBuf, bool), ScenarioError> {
    if !is_valid_name(name) {
        return Err(ScenarioError::InvalidName {
            name: name.to_string(),
        });
    }

    let path = dir.join(format!("{name}.{SCENARIO_EXTENSION}"));
    let exists = path.exists();
    if exists && !force {
        return Err(ScenarioError::Write {
            path,
            error: "file already exists (use --force to overwrite)".to_string(),
        });
    }

    let content = Scenario::template(name).to_toml()?;
    std::fs::create_dir_all(dir).map_err(|e| ScenarioError::Write {
        path: dir.to_path_buf(),
        error: e.to_string(),
    })?;
    std::fs::write(&path, content).map_err(|e| ScenarioError::Write {
        path: path.clone(),
        error: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), "Wrote scenario template");
    Ok((path, exists))
}

/// Execute the init command
pub fn execute(ctx: &Context, dir: &Path, name: &str, force: bool) -> Result<()> {
    let out = &ctx.output;
    let (path, overwritten) = write_template(dir, name, force)?;

    if out.json {
        return out.print_json(&InitOutput {
            name: name.to_string(),
            path,
            overwritten,
        });
    }

    out.success(format!("Created scenario {}", path.display()));
    out.line(format!("  Run it with: ballistics simulate {}", path.display()));
    Ok(())
}
