//! Scenario file discovery
//!
//! Expands command-line paths into scenario files. Directories are walked
//! recursively for `*.toml`; hidden entries are skipped.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::defaults::SCENARIO_EXTENSION;
use crate::error::DiscoveryError;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_scenario_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SCENARIO_EXTENSION))
}

/// Expand a path into scenario files
///
/// A file is returned as given, whatever its extension. A directory yields
/// its `*.toml` files in sorted order.
pub fn discover_scenarios(path: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !path.exists() {
        return Err(DiscoveryError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| DiscoveryError::Walk {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        if is_scenario_file(entry.path()) {
            found.push(entry.into_path());
        }
    }
    found.sort();

    tracing::debug!(path = %path.display(), count = found.len(), "Discovered scenarios");
    Ok(found)
}

/// Expand several paths, keeping their order and dropping duplicates
pub fn discover_all(paths: &[PathBuf]) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut all: Vec<PathBuf> = Vec::new();
    for path in paths {
        for file in discover_scenarios(path)? {
            if !all.contains(&file) {
                all.push(file);
            }
        }
    }
    Ok(all)
}
