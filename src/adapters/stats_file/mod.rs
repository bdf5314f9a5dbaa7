// Run statistics adapter - Cumulative time and file count in a plain text file

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::RunStats;
use crate::ports::*;

/// Statistics stored as two newline-separated numbers: seconds, then files
pub struct StatsFileAdapter {
    path: PathBuf,
}

impl StatsFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the file contents; one trailing newline is tolerated
    pub fn parse(content: &str) -> Result<RunStats, DomainError> {
        let content = content.strip_suffix('\n').unwrap_or(content);
        let values = content
            .split('\n')
            .map(|line| {
                line.trim().parse::<f64>().map_err(|e| {
                    DomainError::MalformedStats(format!("'{}' is not a number: {}", line, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [seconds, files] if *files > 0.0 && *seconds >= 0.0 => {
                Ok(RunStats::new(*seconds, *files))
            }
            [_, _] => Err(DomainError::MalformedStats(
                "totals must be non-negative with at least one file".to_string(),
            )),
            other => Err(DomainError::MalformedStats(format!(
                "expected 2 lines, found {}",
                other.len()
            ))),
        }
    }

    /// Render totals in the on-disk format
    pub fn render(stats: &RunStats) -> String {
        format!("{:?}\n{:?}", stats.total_seconds, stats.total_files)
    }
}

impl StatsPort for StatsFileAdapter {
    fn load_stats(&self) -> Result<RunStats, DomainError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::MalformedStats(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        Self::parse(&content)
    }

    fn save_stats(&self, stats: &RunStats) -> Result<(), DomainError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)
            .map_err(|e| DomainError::FsFail(format!("Failed to create temp file: {}", e)))?;
        file.write_all(Self::render(stats).as_bytes())
            .map_err(|e| DomainError::FsFail(format!("Failed to write run statistics: {}", e)))?;
        file.persist(&self.path).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        info!(
            total_seconds = stats.total_seconds,
            total_files = stats.total_files,
            "Saved run statistics"
        );
        Ok(())
    }
}
