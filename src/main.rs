//! ReelMix CLI
//!
//! Batch video remixer: every clip in the input folder is trimmed, faded in,
//! mirrored, decorated with an arrow and an image, given a random audio track
//! and filter, and encoded to the next numbered output file.
//!
//! # Usage
//!
//! ```bash
//! reelmix                      # same as `reelmix run`
//! reelmix run --seed 42 --dry-run
//! reelmix estimate
//! reelmix next-name --no-pause
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use reelmix::app::{AppContainer, ContainerOptions};
use reelmix::cli::{Cli, Commands};
use reelmix::output::report;
use reelmix::utils::logging::LoggingConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    LoggingConfig {
        level: cli.log_level.clone(),
        json: cli.log_json,
    }
    .initialize();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting reelmix");

    let code = match execute(&cli).await {
        Ok(()) => {
            info!("reelmix completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("\n{}", report::error_banner(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    };

    if !cli.no_pause {
        if let Err(e) = wait_for_enter() {
            eprintln!("Error: {}", e);
        }
    }
    code
}

/// Execute the selected command
async fn execute(cli: &Cli) -> Result<()> {
    let container = AppContainer::new(ContainerOptions {
        config_path: cli.config.clone(),
        stats_path: cli.stats.clone(),
        ffmpeg_binary: cli.run.ffmpeg.clone(),
        seed: cli.run.seed,
        show_progress: !cli.run.no_progress,
    });

    match cli.selected_command() {
        Commands::Run => {
            reelmix::init().context("Failed to initialize libav")?;

            let mut interactor = container.batch_interactor();
            let batch = interactor
                .run(cli.run.dry_run)
                .await
                .context("Batch aborted")?;

            if batch.dry_run {
                println!("{}", report::jobs_json(&batch.jobs)?);
            }
        }
        Commands::Estimate => {
            let estimate = container
                .batch_interactor()
                .estimate()
                .context("Failed to estimate batch time")?;
            println!("Estimated time: {}", report::format_estimate(&estimate));
        }
        Commands::NextName => {
            let path = container
                .batch_interactor()
                .next_output_path()
                .context("Failed to compute next output name")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Keep the console window open until the user presses Enter
fn wait_for_enter() -> io::Result<()> {
    print!("Press Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
