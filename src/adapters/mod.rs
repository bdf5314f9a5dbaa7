// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod fs_local;
pub mod probe_libav;
pub mod random_picker;
pub mod stats_file;
pub mod toml_config;

// Re-export adapters
pub use exec_ffmpeg::FfmpegExecAdapter;
pub use fs_local::LocalFsAdapter;
pub use probe_libav::ProbeLibavAdapter;
pub use random_picker::RandomPicker;
pub use stats_file::StatsFileAdapter;
pub use toml_config::TomlConfigAdapter;
