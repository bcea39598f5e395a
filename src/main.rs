//! Ballistics CLI - projectile motion calculator
//!
//! Entry point for the ballistics command-line application.

use anyhow::Result;
use clap::Parser;

use ballistics_calculator::cli::output::display_error;
use ballistics_calculator::cli::{Cli, Context};
use ballistics_calculator::infra::dirs::BallisticsDirs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let dirs = BallisticsDirs::new();
    let output = cli.output_config(&dirs);
    let ctx = Context { output, dirs };

    // Run the command and handle errors
    match cli.run(&ctx).await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e, output.json);
            std::process::exit(1);
        }
    }
}
