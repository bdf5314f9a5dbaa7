// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Configuration file missing, unreadable or malformed
    BadConfig(String),
    /// A `filter.unq_params` line that is not `name=graph`
    InvalidFilterEntry(String),
    /// File system operation failed
    FsFail(String),
    /// Media probing failed
    ProbeFail(String),
    /// External encoder failed
    ExecFail(String),
    /// Random selection over an empty asset list
    EmptyChoice(String),
    /// Crop window collapsed after clamping to the media duration
    InvalidCropWindow { start: f64, end: f64, duration: f64 },
    /// An existing output file whose stem is not an integer
    NonNumericOutputName(String),
    /// Run statistics file absent or unparsable
    MalformedStats(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadConfig(msg) => write!(f, "Bad config: {}", msg),
            DomainError::InvalidFilterEntry(line) => write!(
                f,
                "Invalid filter entry '{}': expected name=filter_graph",
                line
            ),
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
            DomainError::ProbeFail(msg) => write!(f, "Probe failed: {}", msg),
            DomainError::ExecFail(msg) => write!(f, "Encoder failed: {}", msg),
            DomainError::EmptyChoice(what) => {
                write!(f, "Nothing to choose from: no {} available", what)
            }
            DomainError::InvalidCropWindow {
                start,
                end,
                duration,
            } => write!(
                f,
                "Invalid crop window: [{:.3}, {:.3}) for media of {:.3}s",
                start, end, duration
            ),
            DomainError::NonNumericOutputName(name) => {
                write!(f, "Output directory contains a non-numeric file name: {}", name)
            }
            DomainError::MalformedStats(msg) => write!(f, "Malformed run statistics: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
