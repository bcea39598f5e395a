//! Output formatting and progress indicators
//!
//! Human-readable output goes to stdout unless `--quiet` is set. With
//! `--json`, each command prints exactly one JSON document instead. Errors
//! always go to stderr.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// How command output should be rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub quiet: bool,
    pub json: bool,
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// True when human-readable text should be printed
    pub fn is_human(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Print a plain line of human output
    pub fn line(&self, message: impl AsRef<str>) {
        if self.is_human() {
            println!("{}", message.as_ref());
        }
    }

    /// Print a success line of human output
    pub fn success(&self, message: impl AsRef<str>) {
        self.line(format!("{} {}", status::SUCCESS, message.as_ref()));
    }

    /// Print a warning to stderr unless quiet
    pub fn warn(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{} {}", status::WARNING, message.as_ref());
        }
    }

    /// Print a value as pretty JSON when in JSON mode
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(())
    }

    /// Spinner for long-running work, hidden unless output is human
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.is_human() {
            create_spinner(message)
        } else {
            ProgressBar::hidden()
        }
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error, json: bool) {
    if json {
        let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": error.to_string(),
            "causes": causes,
        });
        eprintln!("{body}");
        return;
    }

    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Format a number with fixed precision, right-aligned
pub fn num(value: f64, width: usize, precision: usize) -> String {
    format!("{value:>width$.precision$}")
}
