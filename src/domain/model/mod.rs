// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::rules;

/// Batch settings loaded once from the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub path: PathSettings,
    pub crop: CropSettings,
    pub fadein: FadeInSettings,
    pub image: ImageSettings,
    pub filter: FilterSettings,
}

/// Input, output and asset locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// A single image file or a directory of images
    pub image: PathBuf,
    pub audio: PathBuf,
    pub arrow: PathBuf,
}

/// Nominal crop window in whole seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropSettings {
    pub start: u32,
    pub end: u32,
    /// Reuse the last clamped end as the nominal end for the next file
    #[serde(default)]
    pub carry_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FadeInSettings {
    pub duration: u32,
}

/// Image overlay display time (seconds) and scale factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSettings {
    pub duration: u32,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSettings {
    /// Header line followed by `name=filter_graph` lines
    pub unq_params: String,
}

impl Settings {
    /// Nominal crop window as configured
    pub fn crop_window(&self) -> CropWindow {
        CropWindow::new(f64::from(self.crop.start), f64::from(self.crop.end))
    }

    /// Parse the named filter variants
    pub fn filter_variants(&self) -> Result<Vec<FilterVariant>, DomainError> {
        rules::parse_filter_variants(&self.filter.unq_params)
    }
}

/// A named ffmpeg filter chain applied to the composited video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterVariant {
    pub name: String,
    pub graph: String,
}

/// Half-open time range `[start, end)` in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropWindow {
    pub start: f64,
    pub end: f64,
}

impl CropWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Clamp against the media duration, see [`rules::clamp_crop_window`]
    pub fn clamp_to(&self, media_duration: f64) -> Result<CropWindow, DomainError> {
        rules::clamp_crop_window(*self, media_duration)
    }
}

impl fmt::Display for CropWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Probed media properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub path: PathBuf,
    /// Container duration in seconds
    pub duration: f64,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MediaInfo {
    /// Frame size, or a probe error when the file carries no video stream
    pub fn frame_size(&self) -> Result<(u32, u32), DomainError> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(DomainError::ProbeFail(format!(
                "No video stream in {}",
                self.path.display()
            ))),
        }
    }
}

/// Asset lists resolved once at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCatalog {
    pub inputs: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
    pub audios: Vec<PathBuf>,
    pub arrows: Vec<PathBuf>,
}

/// Decorative arrow placed near the lower-right corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowOverlay {
    pub path: PathBuf,
    /// Target height in pixels after scaling
    pub height: u32,
    /// Top-left corner as fractions of the base frame size
    pub x_frac: f64,
    pub y_frac: f64,
    /// Clockwise rotation in degrees
    pub rotation_deg: f64,
}

/// Still image shown near the end of the clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOverlay {
    pub path: PathBuf,
    pub scale: f64,
    /// Top edge as a fraction of the base frame height, horizontally centred
    pub y_frac: f64,
    /// Seconds from the start of the output
    pub start: f64,
    pub duration: f64,
}

/// Everything needed to render one output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub video_window: CropWindow,
    pub audio_window: CropWindow,
    pub audio: PathBuf,
    pub fade_in: f64,
    pub mirror: bool,
    pub arrow: ArrowOverlay,
    pub image: ImageOverlay,
    pub filter: FilterVariant,
}

impl RenderJob {
    /// Output duration in seconds
    pub fn duration(&self) -> f64 {
        self.video_window.duration()
    }
}

/// Cumulative processing time across all previous runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub total_seconds: f64,
    pub total_files: f64,
}

impl RunStats {
    pub fn new(total_seconds: f64, total_files: f64) -> Self {
        Self {
            total_seconds,
            total_files,
        }
    }

    /// Average seconds per file, rounded to a tenth
    pub fn per_file(&self) -> f64 {
        rules::round_tenths(self.total_seconds / self.total_files)
    }

    /// Estimate for a batch of `files` inputs
    pub fn estimate(&self, files: usize) -> Estimate {
        let per_file = self.per_file();
        Estimate {
            files,
            per_file,
            total: per_file * files as f64,
        }
    }

    /// Totals after a batch of `files` inputs took `elapsed` seconds
    pub fn record(&self, elapsed: f64, files: usize) -> RunStats {
        RunStats {
            total_seconds: self.total_seconds + elapsed,
            total_files: self.total_files + files as f64,
        }
    }
}

/// Predicted batch duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub files: usize,
    pub per_file: f64,
    pub total: f64,
}

/// Result of a completed batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Jobs in processing order; rendered unless `dry_run`
    pub jobs: Vec<RenderJob>,
    pub estimate: Estimate,
    /// Wall-clock seconds, rounded to a tenth
    pub elapsed: f64,
    pub dry_run: bool,
}

impl BatchReport {
    pub fn outputs(&self) -> impl Iterator<Item = &PathBuf> {
        self.jobs.iter().map(|job| &job.output)
    }
}

#[cfg(test)]
mod tests;
