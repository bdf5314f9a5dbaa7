// Probe LibAV adapter - Media file analysis using libav

use std::path::Path;

use async_trait::async_trait;
use ffmpeg_next as ffmpeg;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// LibAV-based media probing adapter
pub struct ProbeLibavAdapter;

impl ProbeLibavAdapter {
    /// Create new LibAV probing adapter; libav must already be initialized
    pub fn new() -> Self {
        Self
    }

    /// Container duration in seconds, 0 when unknown
    fn container_duration(input_ctx: &ffmpeg::format::context::Input) -> f64 {
        let duration = input_ctx.duration();
        if duration <= 0 || duration == ffmpeg::ffi::AV_NOPTS_VALUE {
            0.0
        } else {
            duration as f64 / f64::from(ffmpeg::ffi::AV_TIME_BASE)
        }
    }

    /// Width and height of the best video stream
    fn frame_size(
        input_ctx: &ffmpeg::format::context::Input,
        file_path: &Path,
    ) -> Result<Option<(u32, u32)>, DomainError> {
        let Some(stream) = input_ctx.streams().best(ffmpeg::media::Type::Video) else {
            return Ok(None);
        };

        let decoder = ffmpeg::codec::context::Context::from_parameters(stream.parameters())
            .and_then(|ctx| ctx.decoder().video())
            .map_err(|e| {
                DomainError::ProbeFail(format!(
                    "Failed to read video parameters of {}: {}",
                    file_path.display(),
                    e
                ))
            })?;

        Ok(Some((decoder.width(), decoder.height())))
    }
}

impl Default for ProbeLibavAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProbePort for ProbeLibavAdapter {
    async fn probe_media(&self, file_path: &Path) -> Result<MediaInfo, DomainError> {
        if !file_path.exists() {
            return Err(DomainError::ProbeFail(format!(
                "File does not exist: {}",
                file_path.display()
            )));
        }

        let input_ctx = ffmpeg::format::input(&file_path).map_err(|e| {
            DomainError::ProbeFail(format!("Cannot open {}: {}", file_path.display(), e))
        })?;

        let duration = Self::container_duration(&input_ctx);
        let size = Self::frame_size(&input_ctx, file_path)?;

        debug!(
            path = %file_path.display(),
            duration,
            size = ?size,
            "Probed media"
        );

        Ok(MediaInfo {
            path: file_path.to_path_buf(),
            duration,
            width: size.map(|(w, _)| w),
            height: size.map(|(_, h)| h),
        })
    }
}
