// Unit tests for domain models

#[cfg(test)]
mod tests {
    use crate::domain::errors::*;
    use crate::domain::model::*;
    use std::path::PathBuf;

    fn sample_settings(unq_params: &str) -> Settings {
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
                size: 0.5,
            },
            filter: FilterSettings {
                unq_params: unq_params.to_string(),
            },
        }
    }

    #[test]
    fn test_crop_window_from_settings() {
        let settings = sample_settings("filters");
        let window = settings.crop_window();
        assert_eq!(window, CropWindow::new(2.0, 10.0));
        assert_eq!(window.duration(), 8.0);
        assert_eq!(window.to_string(), "2:10");
    }

    #[test]
    fn test_crop_window_clamped_to_short_clip() {
        let window = CropWindow::new(2.0, 10.0).clamp_to(6.0).unwrap();
        assert_eq!(window.end, 4.0);
        assert_eq!(window.start, 2.0);
    }

    #[test]
    fn test_crop_window_kept_for_long_clip() {
        let window = CropWindow::new(2.0, 10.0).clamp_to(30.0).unwrap();
        assert_eq!(window, CropWindow::new(2.0, 10.0));
    }

    #[test]
    fn test_header_only_filters_parse_to_empty_list() {
        let settings = sample_settings("name=filter");
        assert!(settings.filter_variants().unwrap().is_empty());
    }

    #[test]
    fn test_filter_variants_from_settings() {
        let settings = sample_settings("name=filter\nwarm=eq=saturation=1.3\ncold=hue=h=20");
        let variants = settings.filter_variants().unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].name, "warm");
        assert_eq!(variants[0].graph, "eq=saturation=1.3");
        assert_eq!(variants[1].name, "cold");
    }

    #[test]
    fn test_run_stats_estimate() {
        let stats = RunStats::new(100.0, 20.0);
        let estimate = stats.estimate(5);
        assert_eq!(estimate.per_file, 5.0);
        assert_eq!(estimate.total, 25.0);
        assert_eq!(estimate.files, 5);
    }

    #[test]
    fn test_run_stats_per_file_is_rounded() {
        let stats = RunStats::new(100.0, 3.0);
        assert_eq!(stats.per_file(), 33.3);
    }

    #[test]
    fn test_run_stats_record_adds_elapsed_and_files() {
        let stats = RunStats::new(100.0, 20.0).record(12.5, 3);
        assert_eq!(stats, RunStats::new(112.5, 23.0));
    }

    #[test]
    fn test_media_info_frame_size() {
        let info = MediaInfo {
            path: PathBuf::from("clip.mp4"),
            duration: 12.0,
            width: Some(1080),
            height: Some(1920),
        };
        assert_eq!(info.frame_size().unwrap(), (1080, 1920));

        let audio_only = MediaInfo {
            path: PathBuf::from("track.mp3"),
            duration: 60.0,
            width: None,
            height: None,
        };
        assert!(matches!(
            audio_only.frame_size(),
            Err(DomainError::ProbeFail(_))
        ));
    }
}
