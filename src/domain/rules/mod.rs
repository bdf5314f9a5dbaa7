// Business rules - Pure computations shared by the pipeline

use crate::domain::errors::DomainError;
use crate::domain::model::{CropWindow, FilterVariant};

/// Arrow overlay height in pixels
pub const ARROW_HEIGHT: u32 = 75;
/// Arrow clockwise rotation in degrees
pub const ARROW_ROTATION_DEG: f64 = 45.0;
/// Image overlay top edge relative to frame height
pub const IMAGE_Y_FRAC: f64 = 0.68;
/// The image overlay appears this many seconds before the clip ends
pub const IMAGE_LEAD_OUT: f64 = 5.0;

/// Clamp a crop window to a media duration.
///
/// When `end` runs past the media, the end becomes `duration - start`.
/// A window left empty or inverted is rejected.
pub fn clamp_crop_window(window: CropWindow, duration: f64) -> Result<CropWindow, DomainError> {
    let end = if window.end > duration {
        duration - window.start
    } else {
        window.end
    };

    if end <= window.start {
        return Err(DomainError::InvalidCropWindow {
            start: window.start,
            end,
            duration,
        });
    }

    Ok(CropWindow::new(window.start, end))
}

/// Next sequential output index from the stems already in the output directory
pub fn next_output_index<'a, I>(stems: I) -> Result<u64, DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut max = 0;
    for stem in stems {
        let index: u64 = stem
            .parse()
            .map_err(|_| DomainError::NonNumericOutputName(stem.to_string()))?;
        max = max.max(index);
    }
    Ok(max + 1)
}

/// Parse `filter.unq_params`: the first line is a header, then `name=graph` lines
pub fn parse_filter_variants(raw: &str) -> Result<Vec<FilterVariant>, DomainError> {
    raw.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (name, graph) = line
                .split_once('=')
                .ok_or_else(|| DomainError::InvalidFilterEntry(line.to_string()))?;
            Ok(FilterVariant {
                name: name.trim().to_string(),
                graph: graph.trim().to_string(),
            })
        })
        .collect()
}

/// Relative top-left corner of the arrow for a given arrow source size and base width
pub fn arrow_position(arrow_size: (u32, u32), base_width: u32) -> (f64, f64) {
    let scaled_width = scaled_width_for_height(arrow_size, ARROW_HEIGHT);
    let x = 0.5 + 0.5_f64.powi(2) + 0.5_f64.powi(4) - scaled_width / f64::from(base_width);
    let y = 0.5 + 0.5_f64.powi(2);
    (x, y)
}

/// Width after scaling to `height` with the aspect ratio kept
pub fn scaled_width_for_height(size: (u32, u32), height: u32) -> f64 {
    let (w, h) = size;
    (f64::from(w) * f64::from(height) / f64::from(h)).round()
}

/// Round to one decimal place
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
