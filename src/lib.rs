//! ReelMix batch video remixer library
//!
//! Trims, mirrors and decorates every clip of an input folder with a random
//! arrow, image, audio track and ffmpeg filter, then renders numbered outputs.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{BatchReport, MediaInfo, RenderJob, RunStats, Settings};
pub use error::{ReelMixError, ReelMixResult};

/// Initialize libav, once per process before probing
pub fn init() -> ReelMixResult<()> {
    ffmpeg_next::init().map_err(|e| ReelMixError::FFmpegInitError {
        message: e.to_string(),
    })?;

    Ok(())
}
