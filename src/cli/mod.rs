//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! Calculations belong in [`crate::projectiles`] and [`crate::core`].

pub mod commands;
pub mod output;

use anyhow::{Context as _, Result};
use clap::Parser;

use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::BallisticsDirs;
use commands::Commands;
use output::OutputConfig;

/// Ballistics - projectile motion calculator
///
/// Vacuum trajectories, firing solutions and drag simulations.
#[derive(Parser, Debug)]
#[command(name = "ballistics")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Shared state handed to every command
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputConfig,
    pub dirs: BallisticsDirs,
}

impl Context {
    /// Load the global config from the config directory
    pub fn global_config(&self) -> Result<GlobalConfig> {
        GlobalConfig::load(&self.dirs).with_context(|| {
            format!(
                "Failed to load global config from {}",
                self.dirs.global_config_path().display()
            )
        })
    }
}

impl Cli {
    /// Resolve the output configuration, honouring `output.json` from the
    /// global config when `--json` is not given
    pub fn output_config(&self, dirs: &BallisticsDirs) -> OutputConfig {
        let json = self.json
            || GlobalConfig::load(dirs)
                .map(|config| config.json())
                .unwrap_or(false);
        OutputConfig::new(self.quiet, json, self.verbose)
    }

    /// Execute the CLI command
    pub async fn run(self, ctx: &Context) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run(ctx).await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ballistics", "info", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_output_config_reads_json_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let dirs = BallisticsDirs::with_config_dir(dir.path());
        std::fs::write(dirs.global_config_path(), "[output]\njson = true\n").unwrap();

        let cli = Cli::parse_from(["ballistics", "info"]);
        assert!(cli.output_config(&dirs).json);
    }
}
