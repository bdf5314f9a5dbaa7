//! Time formatting utilities

/// Format seconds as `"{m}m {s}s"`.
///
/// Minutes are truncated and the remaining seconds rounded.
pub fn format_minutes_seconds(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).trunc();
    let rest = (seconds % 60.0).round();
    format!("{}m {}s", minutes, rest)
}

/// Wall-clock seconds rounded to a tenth
pub fn elapsed_tenths(elapsed: std::time::Duration) -> f64 {
    crate::domain::rules::round_tenths(elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_minutes_seconds() {
        assert_eq!(format_minutes_seconds(0.0), "0m 0s");
        assert_eq!(format_minutes_seconds(25.0), "0m 25s");
        assert_eq!(format_minutes_seconds(125.4), "2m 5s");
        assert_eq!(format_minutes_seconds(3599.6), "59m 60s");
    }

    #[test]
    fn test_elapsed_tenths() {
        assert_eq!(elapsed_tenths(Duration::from_millis(31_440)), 31.4);
        assert_eq!(elapsed_tenths(Duration::from_millis(950)), 1.0);
    }
}
