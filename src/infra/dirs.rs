//! Platform-specific directory management
//!
//! Follows the XDG Base Directory Specification on Linux and standard
//! locations on macOS and Windows.
//!
//! `BALLISTICS_CONFIG_DIR` overrides the config directory.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::GLOBAL_CONFIG_FILE;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "BALLISTICS_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "ballistics";

/// Platform-specific directory provider
#[derive(Debug, Clone)]
pub struct BallisticsDirs {
    config_dir: PathBuf,
}

impl BallisticsDirs {
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/ballistics` or `~/.config/ballistics`
    /// - macOS: `~/Library/Application Support/ballistics`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Path to `config.toml` in the config directory
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(GLOBAL_CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for BallisticsDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_new_creates_instance() {
        let dirs = BallisticsDirs::new();
        assert!(!dirs.config_dir().as_os_str().is_empty());
    }

    #[test]
    fn test_global_config_path_is_under_config_dir() {
        let dirs = BallisticsDirs::new();
        assert!(dirs.global_config_path().starts_with(dirs.config_dir()));
        assert!(dirs.global_config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_explicit_config_dir() {
        let dirs = BallisticsDirs::with_config_dir("/tmp/ballistics-test");
        assert_eq!(
            dirs.global_config_path(),
            PathBuf::from("/tmp/ballistics-test/config.toml")
        );
    }
}
