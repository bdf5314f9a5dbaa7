//! Human-readable console output for a batch run

use std::fmt::Write as _;
use std::path::Path;

use console::style;

use crate::domain::model::{Estimate, FilterVariant, RenderJob, Settings};
use crate::error::ReelMixResult;
use crate::utils::time::format_minutes_seconds;

/// `"{m}m {s}s ({n} files | {per:.1}s per file)"`
pub fn format_estimate(estimate: &Estimate) -> String {
    format!(
        "{} ({} files | {:.1}s per file)",
        format_minutes_seconds(estimate.total),
        estimate.files,
        estimate.per_file
    )
}

/// Paths, settings, filters and the time estimate shown before a batch
pub fn render_summary(settings: &Settings, filters: &[FilterVariant], estimate: &Estimate) -> String {
    let mut out = String::new();
    let paths = &settings.path;

    let _ = writeln!(out, "Paths:");
    let _ = writeln!(out, "\t INPUT | {}", paths.input.display());
    let _ = writeln!(out, "\tOUTPUT | {}", paths.output.display());
    let _ = writeln!(out, "\tIMAGES | {}", paths.image.display());
    let _ = writeln!(out, "\tAUDIOS | {}", paths.audio.display());
    let _ = writeln!(out, "\tARROWS | {}", paths.arrow.display());
    let _ = writeln!(out);
    let _ = writeln!(out, "Settings:");
    let _ = writeln!(out, "\t  CROP | {}:{}", settings.crop.start, settings.crop.end);
    if settings.crop.carry_over {
        let _ = writeln!(out, "\t        | carry over clamped end");
    }
    let _ = writeln!(out, "\tFADEIN | {}", settings.fadein.duration);
    let _ = writeln!(out, "\t IMAGE | {} {}", settings.image.duration, settings.image.size);
    let _ = writeln!(out);
    let _ = writeln!(out, "Unique filters:");
    for filter in filters {
        let _ = writeln!(out, " {} | {}", filter.name, filter.graph);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        style(format!("Estimated time: {} ", format_estimate(estimate))).on_yellow()
    );
    out
}

/// Printed before each input file
pub fn processing_line(input: &Path) -> String {
    format!("{} {}", style("Processing:").on_yellow(), input.display())
}

/// Printed after each output file
pub fn completed_line(output: &Path, done: usize, total: usize) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        (done as f64 / total as f64 * 100.0).round()
    };
    format!(
        "{} {} {}",
        style(" Completed:").on_green(),
        output.display(),
        style(format!("{} of {} | {}%", done, total, percent)).on_green()
    )
}

/// Estimated versus actual time after a batch
pub fn render_timings(estimate: &Estimate, elapsed: f64) -> String {
    format!(
        "\n     Estimated time: {:.1}s\nActual elapsed time: {:.1}s",
        estimate.total, elapsed
    )
}

/// Error banner for stderr
pub fn error_banner(message: &str) -> String {
    style(message).on_red().for_stderr().to_string()
}

/// Planned jobs as pretty JSON, printed by dry runs
pub fn jobs_json(jobs: &[RenderJob]) -> ReelMixResult<String> {
    Ok(serde_json::to_string_pretty(jobs)?)
}
