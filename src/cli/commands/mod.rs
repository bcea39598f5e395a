//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod info;
pub mod init;
pub mod simulate;
pub mod solve;
pub mod trajectory;
pub mod vector;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::Context;
use crate::core::angle::Angle;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a 2D or 3D vector
    #[command(allow_negative_numbers = true)]
    Vector {
        /// x component
        x: f64,

        /// y component
        y: f64,

        /// z component (omit for a 2D vector)
        z: Option<f64>,
    },

    /// Compute a vacuum trajectory
    #[command(allow_negative_numbers = true)]
    Trajectory {
        /// Launch speed in m/s
        #[arg(short, long)]
        speed: f64,

        /// Elevation above the horizon (e.g. 45, 45deg, 0.8rad, 800mil)
        #[arg(short, long)]
        angle: Angle,

        /// Launch height above ground in m
        #[arg(long, default_value_t = 0.0)]
        height: f64,

        /// Gravity in m/s² (defaults to the global config)
        #[arg(short, long)]
        gravity: Option<f64>,

        /// Print a table with this many evenly spaced points
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Find the elevations that hit a target in a vacuum
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Launch speed in m/s
        #[arg(short, long)]
        speed: f64,

        /// Horizontal distance to the target in m
        #[arg(short, long)]
        distance: f64,

        /// Target height relative to the launch point in m
        #[arg(long, default_value_t = 0.0)]
        height: f64,

        /// Gravity in m/s² (defaults to the global config)
        #[arg(short, long)]
        gravity: Option<f64>,
    },

    /// Run drag simulations from scenario files
    Simulate {
        /// Scenario files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Number of simulations to run in parallel
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Trajectory points kept per scenario
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Create a scenario file from a template
    Init {
        /// Scenario name (lowercase letters, digits, '-' and '_')
        name: String,

        /// Directory to write into
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Manage global configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show build information
    Info,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Set a configuration value
    Set {
        /// Dotted key, e.g. simulation.time_step
        key: String,

        /// New value
        value: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Vector { x, y, z } => vector::execute(ctx, x, y, z),
            Self::Trajectory {
                speed,
                angle,
                height,
                gravity,
                samples,
            } => trajectory::execute(
                ctx,
                &trajectory::TrajectoryArgs {
                    speed,
                    angle,
                    height,
                    gravity,
                    samples,
                },
            ),
            Self::Solve {
                speed,
                distance,
                height,
                gravity,
            } => solve::execute(ctx, speed, distance, height, gravity),
            Self::Simulate {
                paths,
                jobs,
                samples,
            } => simulate::execute(ctx, &paths, jobs, samples).await,
            Self::Init { name, dir, force } => {
                let dir = match dir {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                init::execute(ctx, &dir, &name, force)
            }
            Self::Config { command } => match command {
                ConfigCommands::Show => config::execute_show(ctx),
                ConfigCommands::Path => config::execute_path(ctx),
                ConfigCommands::Set { key, value } => config::execute_set(ctx, &key, &value),
            },
            Self::Info => info::execute(ctx),
        }
    }
}
