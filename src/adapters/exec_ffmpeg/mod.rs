//! FFmpeg execution adapter
//!
//! Runs the ffmpeg binary for one planned job and follows its progress output.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::engine::command;
use crate::ports::*;

/// Number of stderr lines kept in error messages
const STDERR_TAIL_LINES: usize = 8;

/// One parsed `-progress` line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// Output timestamp reached, in seconds
    OutTime(f64),
    /// ffmpeg reported `progress=end`
    End,
}

/// Parse a `key=value` line from `-progress pipe:1`.
///
/// Both `out_time_us` and `out_time_ms` carry microseconds.
pub fn parse_progress_line(line: &str) -> Option<ProgressEvent> {
    let (key, value) = line.trim().split_once('=')?;
    match key {
        "out_time_us" | "out_time_ms" => value
            .parse::<i64>()
            .ok()
            .map(|us| ProgressEvent::OutTime(us.max(0) as f64 / 1_000_000.0)),
        "progress" if value == "end" => Some(ProgressEvent::End),
        _ => None,
    }
}

/// FFmpeg-based execution adapter
pub struct FfmpegExecAdapter {
    binary: PathBuf,
    show_progress: bool,
}

impl FfmpegExecAdapter {
    /// Create new FFmpeg adapter using the given binary
    pub fn new(binary: impl Into<PathBuf>, show_progress: bool) -> Self {
        Self {
            binary: binary.into(),
            show_progress,
        }
    }

    fn progress_bar(&self, job: &RenderJob) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let total_ms = (job.duration() * 1000.0).max(1.0) as u64;
        let bar = ProgressBar::new(total_ms);
        bar.set_style(
            ProgressStyle::with_template(
                "  [{elapsed_precise}] [{bar:40.cyan/blue}] {percent:>3}% ETA {eta_precise}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
        );
        bar
    }

    fn stderr_tail(stderr: &str) -> String {
        let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
        let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
        lines[start..].join("\n")
    }
}

#[async_trait]
impl ExecutePort for FfmpegExecAdapter {
    async fn execute_job(&self, job: &RenderJob) -> Result<OutputReport, DomainError> {
        let started = Instant::now();
        let args = command::build_args(job);
        debug!(binary = %self.binary.display(), args = ?command::display_args(&args), "Spawning ffmpeg");

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DomainError::ExecFail(format!(
                    "Failed to start {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| DomainError::ExecFail("ffmpeg stdout not captured".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| DomainError::ExecFail("ffmpeg stderr not captured".to_string()))?;

        let bar = self.progress_bar(job);
        let mut lines = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr);

        let progress = async {
            while let Some(line) = lines.next_line().await? {
                match parse_progress_line(&line) {
                    Some(ProgressEvent::OutTime(seconds)) => {
                        bar.set_position((seconds * 1000.0) as u64);
                    }
                    Some(ProgressEvent::End) => bar.finish(),
                    None => {}
                }
            }
            Ok::<_, std::io::Error>(())
        };
        let errors = async {
            let mut buffer = String::new();
            stderr_reader.read_to_string(&mut buffer).await?;
            Ok::<_, std::io::Error>(buffer)
        };

        let (progress_result, stderr_result, status) = tokio::join!(progress, errors, child.wait());
        bar.finish_and_clear();

        if let Err(e) = progress_result {
            warn!("Lost ffmpeg progress output: {}", e);
        }
        let stderr_text = stderr_result.unwrap_or_default();
        let status = status
            .map_err(|e| DomainError::ExecFail(format!("Failed to wait for ffmpeg: {}", e)))?;

        if !status.success() {
            return Err(DomainError::ExecFail(format!(
                "ffmpeg exited with {} while writing {}:\n{}",
                status,
                job.output.display(),
                Self::stderr_tail(&stderr_text)
            )));
        }

        Ok(OutputReport {
            output_path: job.output.clone(),
            duration: job.duration(),
            processing_time: started.elapsed(),
        })
    }
}
