//! Concurrent scenario execution
//!
//! Scenario files are read asynchronously and simulated on tokio's blocking
//! pool. A semaphore bounds how many simulations run at once. Failures are
//! reported per scenario and never abort the batch.

use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::Semaphore;

use crate::core::global_config::GlobalConfig;
use crate::core::scenario::{Scenario, ScenarioReport};
use crate::error::{BallisticsError, ScenarioError};

/// Result of one scenario in a batch
#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    /// Scenario file
    pub path: PathBuf,
    /// Report on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ScenarioReport>,
    /// Error message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchOutcome {
    fn from_result(path: PathBuf, result: Result<ScenarioReport, BallisticsError>) -> Self {
        match result {
            Ok(report) => Self {
                path,
                report: Some(report),
                error: None,
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Scenario failed");
                Self {
                    path,
                    report: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.report.is_some()
    }
}

async fn run_one(
    path: PathBuf,
    global: Arc<GlobalConfig>,
    samples: Option<usize>,
) -> Result<ScenarioReport, BallisticsError> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ScenarioError::Read {
            path: path.clone(),
            error: e.to_string(),
        })?;

    let handle = tokio::task::spawn_blocking(move || -> Result<ScenarioReport, BallisticsError> {
        let scenario = Scenario::from_toml(&content)?;
        let mut resolved = scenario.resolve(&global)?;
        if let Some(samples) = samples {
            resolved.samples = samples;
        }
        Ok(resolved.run()?)
    });

    handle
        .await
        .map_err(|e| BallisticsError::Generic(format!("Simulation task failed: {e}")))?
}

/// Run every scenario with at most `jobs` simulations in flight
///
/// Outcomes are returned in input order. `samples` overrides the number of
/// trajectory points kept per report.
pub async fn run_batch(
    paths: Vec<PathBuf>,
    global: GlobalConfig,
    jobs: usize,
    samples: Option<usize>,
) -> Vec<BatchOutcome> {
    let jobs = jobs.max(1);
    let semaphore = Arc::new(Semaphore::new(jobs));
    let global = Arc::new(global);

    tracing::info!(scenarios = paths.len(), jobs, "Running batch");

    let tasks = paths.into_iter().map(|path| {
        let semaphore = Arc::clone(&semaphore);
        let global = Arc::clone(&global);
        async move {
            let result = match semaphore.acquire().await {
                Ok(_permit) => run_one(path.clone(), global, samples).await,
                Err(e) => Err(BallisticsError::Generic(e.to_string())),
            };
            BatchOutcome::from_result(path, result)
        }
    });

    join_all(tasks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_template(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(format!("{name}.toml"));
        let toml = Scenario::template(name).to_toml().unwrap();
        std::fs::write(&path, toml).unwrap();
        path
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_isolates_failures() {
        let dir = TempDir::new().unwrap();
        let first = write_template(&dir, "first");
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[scenario]\nname = 'broken'\n").unwrap();
        let missing = dir.path().join("missing.toml");
        let last = write_template(&dir, "last");

        let outcomes = run_batch(
            vec![first.clone(), broken.clone(), missing.clone(), last.clone()],
            GlobalConfig::default(),
            2,
            Some(5),
        )
        .await;

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].path, first);
        assert_eq!(outcomes[3].path, last);

        assert!(outcomes[0].is_success());
        assert_eq!(outcomes[0].report.as_ref().unwrap().points.len(), 5);
        assert!(!outcomes[1].is_success());
        assert!(outcomes[1].error.as_ref().unwrap().contains("parse"));
        assert!(!outcomes[2].is_success());
        assert!(outcomes[3].is_success());
        assert_eq!(outcomes[3].report.as_ref().unwrap().name, "last");
    }

    #[tokio::test]
    async fn test_zero_jobs_still_runs() {
        let dir = TempDir::new().unwrap();
        let only = write_template(&dir, "only");

        let outcomes = run_batch(vec![only], GlobalConfig::default(), 0, None).await;
        assert!(outcomes[0].is_success());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let outcomes = run_batch(Vec::new(), GlobalConfig::default(), 4, None).await;
        assert!(outcomes.is_empty());
    }
}
