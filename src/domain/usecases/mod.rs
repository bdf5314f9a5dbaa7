// Domain use cases - Per-file job planning

use std::path::PathBuf;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::{self, ARROW_HEIGHT, ARROW_ROTATION_DEG, IMAGE_LEAD_OUT, IMAGE_Y_FRAC};

/// Probed inputs and chosen assets for one output file
#[derive(Debug, Clone)]
pub struct JobInputs<'a> {
    pub video: &'a MediaInfo,
    pub arrow: &'a MediaInfo,
    pub audio: &'a MediaInfo,
    pub image: PathBuf,
    pub filter: FilterVariant,
    pub output: PathBuf,
    /// Nominal crop window before clamping
    pub crop: CropWindow,
}

/// Core use case: turn probed inputs into a render job
pub struct PlanJobUseCase;

impl PlanJobUseCase {
    /// Build the render job for one input file.
    ///
    /// The video window is clamped to the clip, then the audio window is
    /// clamped from the video window to the audio track.
    pub fn execute(settings: &Settings, inputs: JobInputs<'_>) -> Result<RenderJob, DomainError> {
        let video_window = inputs.crop.clamp_to(inputs.video.duration)?;
        let audio_window = video_window.clamp_to(inputs.audio.duration)?;

        let (base_width, _) = inputs.video.frame_size()?;
        let arrow_size = inputs.arrow.frame_size()?;
        let (x_frac, y_frac) = rules::arrow_position(arrow_size, base_width);

        let arrow = ArrowOverlay {
            path: inputs.arrow.path.clone(),
            height: ARROW_HEIGHT,
            x_frac,
            y_frac,
            rotation_deg: ARROW_ROTATION_DEG,
        };

        let image = ImageOverlay {
            path: inputs.image,
            scale: settings.image.size,
            y_frac: IMAGE_Y_FRAC,
            start: video_window.duration() - IMAGE_LEAD_OUT,
            duration: f64::from(settings.image.duration),
        };

        Ok(RenderJob {
            input: inputs.video.path.clone(),
            output: inputs.output,
            video_window,
            audio_window,
            audio: inputs.audio.path.clone(),
            fade_in: f64::from(settings.fadein.duration),
            mirror: true,
            arrow,
            image,
            filter: inputs.filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            path: PathSettings {
                input: PathBuf::from("in"),
                output: PathBuf::from("out"),
                image: PathBuf::from("img"),
                audio: PathBuf::from("snd"),
                arrow: PathBuf::from("arr"),
            },
            crop: CropSettings {
                start: 2,
                end: 10,
                carry_over: false,
            },
            fadein: FadeInSettings { duration: 1 },
            image: ImageSettings {
                duration: 3,
                size: 0.4,
            },
            filter: FilterSettings {
                unq_params: "filters".to_string(),
            },
        }
    }

    fn media(path: &str, duration: f64, size: Option<(u32, u32)>) -> MediaInfo {
        MediaInfo {
            path: PathBuf::from(path),
            duration,
            width: size.map(|s| s.0),
            height: size.map(|s| s.1),
        }
    }

    fn filter() -> FilterVariant {
        FilterVariant {
            name: "plain".to_string(),
            graph: "null".to_string(),
        }
    }

    fn plan(video: &MediaInfo, audio: &MediaInfo) -> Result<RenderJob, DomainError> {
        let arrow = media("arr/arrow.mov", 2.0, Some((150, 150)));
        PlanJobUseCase::execute(
            &settings(),
            JobInputs {
                video,
                arrow: &arrow,
                audio,
                image: PathBuf::from("img/logo.png"),
                filter: filter(),
                output: PathBuf::from("out/1.mp4"),
                crop: CropWindow::new(2.0, 10.0),
            },
        )
    }

    #[test]
    fn test_plan_job_clamps_video_window() {
        let video = media("in/a.mp4", 6.0, Some((1000, 1800)));
        let audio = media("snd/track.mp3", 60.0, None);

        let job = plan(&video, &audio).unwrap();
        assert_eq!(job.video_window, CropWindow::new(2.0, 4.0));
        assert_eq!(job.audio_window, CropWindow::new(2.0, 4.0));
    }

    #[test]
    fn test_plan_job_clamps_audio_from_video_window() {
        let video = media("in/a.mp4", 30.0, Some((1000, 1800)));
        let audio = media("snd/track.mp3", 9.0, None);

        let job = plan(&video, &audio).unwrap();
        assert_eq!(job.video_window, CropWindow::new(2.0, 10.0));
        assert_eq!(job.audio_window, CropWindow::new(2.0, 7.0));
    }

    #[test]
    fn test_plan_job_fails_when_audio_too_short() {
        let video = media("in/a.mp4", 30.0, Some((1000, 1800)));
        let audio = media("snd/track.mp3", 3.0, None);

        let result = plan(&video, &audio);
        assert!(matches!(result, Err(DomainError::InvalidCropWindow { .. })));
    }

    #[test]
    fn test_plan_job_overlay_placement() {
        let video = media("in/a.mp4", 30.0, Some((1000, 1800)));
        let audio = media("snd/track.mp3", 60.0, None);

        let job = plan(&video, &audio).unwrap();
        assert_eq!(job.duration(), 8.0);
        assert_eq!(job.image.start, 3.0);
        assert_eq!(job.image.duration, 3.0);
        assert_eq!(job.image.scale, 0.4);
        assert_eq!(job.arrow.height, 75);
        assert_eq!(job.arrow.rotation_deg, 45.0);
        assert!((job.arrow.x_frac - 0.7375).abs() < 1e-9);
        assert_eq!(job.fade_in, 1.0);
        assert!(job.mirror);
    }

    #[test]
    fn test_plan_job_requires_video_stream() {
        let video = media("in/a.mp4", 30.0, None);
        let audio = media("snd/track.mp3", 60.0, None);

        let result = plan(&video, &audio);
        assert!(matches!(result, Err(DomainError::ProbeFail(_))));
    }
}
