use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{
    FfmpegExecAdapter, LocalFsAdapter, ProbeLibavAdapter, RandomPicker, StatsFileAdapter,
    TomlConfigAdapter,
};
use crate::app::batch_interactor::BatchInteractor;
use crate::ports::{ConfigPort, ExecutePort, FsPort, PickerPort, ProbePort, StatsPort};

/// Locations and switches resolved from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerOptions {
    pub config_path: PathBuf,
    pub stats_path: PathBuf,
    pub ffmpeg_binary: PathBuf,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

/// Wires the production adapters into the interactor
pub struct AppContainer {
    probe_port: Arc<dyn ProbePort>,
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
    config_port: Arc<dyn ConfigPort>,
    stats_port: Arc<dyn StatsPort>,
    seed: Option<u64>,
}

impl AppContainer {
    /// libav must be initialized before the probe adapter is used
    pub fn new(options: ContainerOptions) -> Self {
        Self {
            probe_port: Arc::new(ProbeLibavAdapter::new()),
            execute_port: Arc::new(FfmpegExecAdapter::new(
                options.ffmpeg_binary,
                options.show_progress,
            )),
            fs_port: Arc::new(LocalFsAdapter::new()),
            config_port: Arc::new(TomlConfigAdapter::new(options.config_path)),
            stats_port: Arc::new(StatsFileAdapter::new(options.stats_path)),
            seed: options.seed,
        }
    }

    fn picker(&self) -> Box<dyn PickerPort> {
        match self.seed {
            Some(seed) => Box::new(RandomPicker::seeded(seed)),
            None => Box::new(RandomPicker::from_entropy()),
        }
    }

    pub fn batch_interactor(&self) -> BatchInteractor {
        BatchInteractor::new(
            Arc::clone(&self.probe_port),
            Arc::clone(&self.execute_port),
            Arc::clone(&self.fs_port),
            Arc::clone(&self.config_port),
            Arc::clone(&self.stats_port),
            self.picker(),
        )
    }
}
