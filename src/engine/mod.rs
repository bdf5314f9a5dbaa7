//! Render engine: turns a planned job into an ffmpeg invocation

pub mod command;
pub mod filter_graph;

/// Output video codec
pub const VIDEO_CODEC: &str = "libx264";
/// Output audio codec
pub const AUDIO_CODEC: &str = "aac";
/// Output pixel format
pub const PIXEL_FORMAT: &str = "yuv420p";
/// Output container extension
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Input indices in the ffmpeg argument list
pub(crate) mod inputs {
    pub const BASE: usize = 0;
    pub const ARROW: usize = 1;
    pub const IMAGE: usize = 2;
    pub const AUDIO: usize = 3;
}

/// Label of the final video stream
pub const VIDEO_OUT: &str = "vout";
/// Label of the final audio stream
pub const AUDIO_OUT: &str = "aout";
