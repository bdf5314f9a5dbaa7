//! Error handling module for ReelMix

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ReelMix operations
#[derive(Error, Debug)]
pub enum ReelMixError {
    /// Domain rule or port failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// FFmpeg initialization error
    #[error("Failed to initialize FFmpeg: {message}")]
    FFmpegInitError { message: String },

    /// Job plan serialization error (dry runs)
    #[error("Failed to serialize job plan: {0}")]
    PlanSerialization(#[from] serde_json::Error),
}

/// Result type alias for ReelMix operations
pub type ReelMixResult<T> = std::result::Result<T, ReelMixError>;
