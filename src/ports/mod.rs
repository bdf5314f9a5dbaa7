// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe duration and frame size of a media file
    async fn probe_media(&self, file_path: &Path) -> Result<MediaInfo, DomainError>;
}

/// Port for rendering a planned job to disk
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Render the job; returns once the output file is complete
    async fn execute_job(&self, job: &RenderJob) -> Result<OutputReport, DomainError>;
}

/// Summary of one rendered file
#[derive(Debug, Clone, PartialEq)]
pub struct OutputReport {
    pub output_path: PathBuf,
    pub duration: f64,
    pub processing_time: std::time::Duration,
}

/// Port for file system listings
pub trait FsPort: Send + Sync {
    /// Immediate entries of a directory in enumeration order
    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError>;

    /// A single image file, or the entries of an image directory
    fn list_image_source(&self, source: &Path) -> Result<Vec<PathBuf>, DomainError>;
}

/// Port for configuration loading
pub trait ConfigPort: Send + Sync {
    /// Load and validate the batch settings
    fn load_settings(&self) -> Result<Settings, DomainError>;

    /// Location the settings are read from
    fn config_file_path(&self) -> &Path;
}

/// Port for persisted run statistics
pub trait StatsPort: Send + Sync {
    fn load_stats(&self) -> Result<RunStats, DomainError>;

    /// Replace the stored totals
    fn save_stats(&self, stats: &RunStats) -> Result<(), DomainError>;
}

/// Port for random selection
pub trait PickerPort: Send {
    /// Index into a list of `len` items, `None` when the list is empty
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}

/// Pick one item or fail with [`DomainError::EmptyChoice`]
pub fn pick<'a, T>(
    picker: &mut dyn PickerPort,
    what: &str,
    items: &'a [T],
) -> Result<&'a T, DomainError> {
    picker
        .pick_index(items.len())
        .and_then(|index| items.get(index))
        .ok_or_else(|| DomainError::EmptyChoice(what.to_string()))
}
