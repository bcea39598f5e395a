//! CLI implementation for `ballistics simulate`
//!
//! Expands the given paths into scenario files, runs them concurrently and
//! prints one block per scenario.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::output::{num, status};
use crate::cli::Context;
use crate::core::batch::{run_batch, BatchOutcome};
use crate::core::scenario::ScenarioReport;
use crate::infra::discovery::discover_all;

fn print_report(ctx: &Context, outcome: &BatchOutcome, report: &ScenarioReport) {
    let out = &ctx.output;
    out.success(format!("{} ({})", report.name, outcome.path.display()));

    match &report.impact {
        Some(impact) => {
            out.line(format!("  Flight time  {} s", num(impact.time, 10, 3)));
            out.line(format!("  Range        {} m", num(impact.range, 10, 3)));
            out.line(format!("  Drift        {} m", num(impact.drift, 10, 3)));
            out.line(format!(
                "  Impact speed {} m/s",
                num(impact.velocity.length(), 10, 3)
            ));
        }
        None => out.line(format!(
            "  {} Did not land within max_time",
            status::WARNING
        )),
    }
    out.line(format!(
        "  Apex         {} m at {} s",
        num(report.apex.position.z, 10, 3),
        num(report.apex.time, 0, 3)
    ));

    if out.verbose > 0 {
        out.line(format!(
            "  {:>8} {:>10} {:>10} {:>10}",
            "t (s)", "x (m)", "y (m)", "z (m)"
        ));
        for p in &report.points {
            out.line(format!(
                "  {} {} {} {}",
                num(p.time, 8, 3),
                num(p.position.x, 10, 3),
                num(p.position.y, 10, 3),
                num(p.position.z, 10, 3)
            ));
        }
    }
}

/// Execute the simulate command
pub async fn execute(
    ctx: &Context,
    paths: &[PathBuf],
    jobs: Option<usize>,
    samples: Option<usize>,
) -> Result<()> {
    let out = &ctx.output;
    if let Some(n) = samples {
        if n < 2 {
            anyhow::bail!("--samples must be at least 2, got {n}");
        }
    }

    let global = ctx.global_config()?;
    let files = discover_all(paths).context("Failed to find scenario files")?;
    if files.is_empty() {
        anyhow::bail!("No scenario files found");
    }

    let jobs = jobs.unwrap_or_else(num_cpus::get);
    let total = files.len();
    let spinner = out.spinner(&format!("Simulating {total} scenario(s)..."));
    let outcomes = run_batch(files, global, jobs, samples).await;
    spinner.finish_and_clear();

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();

    if out.json {
        out.print_json(&outcomes)?;
    } else {
        for outcome in &outcomes {
            match (&outcome.report, &outcome.error) {
                (Some(report), _) => print_report(ctx, outcome, report),
                (None, error) => eprintln!(
                    "{} {}: {}",
                    status::ERROR,
                    outcome.path.display(),
                    error.as_deref().unwrap_or("unknown error")
                ),
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} scenario(s) failed");
    }
    Ok(())
}
