//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Options of the `run` command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Seed for asset and filter selection
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// ffmpeg executable
    #[arg(long, env = "REELMIX_FFMPEG", default_value = "ffmpeg", global = true)]
    pub ffmpeg: PathBuf,

    /// Plan every job and print it as JSON without encoding
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Hide the per-file progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,
}
