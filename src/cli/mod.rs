//! CLI module for reelmix
//!
//! This module handles command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;

pub use args::RunArgs;

/// reelmix batch video remixer
///
/// Trims, mirrors and decorates every clip in the input folder, adds a random
/// audio track and a random filter, and writes numbered outputs.
#[derive(Parser, Debug)]
#[command(name = "reelmix")]
#[command(about = "Batch video remixer driven by a TOML settings file")]
#[command(version)]
pub struct Cli {
    /// Settings file
    #[arg(long, env = "REELMIX_CONFIG", default_value = "settings/config.toml", global = true)]
    pub config: PathBuf,

    /// Run statistics file
    #[arg(long, env = "REELMIX_STATS", default_value = "settings/total_time.txt", global = true)]
    pub stats: PathBuf,

    /// Logging level, overridden by RUST_LOG
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Exit without waiting for Enter
    #[arg(long, global = true)]
    pub no_pause: bool,

    #[command(flatten)]
    pub run: RunArgs,

    /// The command to execute, `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Remix every input file
    Run,
    /// Print the estimated batch time for the current input folder
    Estimate,
    /// Print the next output file name
    NextName,
}

impl Cli {
    /// Selected command with the default applied
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}
