/// Formats a playback position as zero-padded `MM:SS`.
///
/// Seconds are floored. Minutes keep counting past 59. Values the media
/// element reports before metadata loads (`NaN`, infinities, negatives)
/// render as `00:00`.
pub fn format_mmss(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Text of the progress readout, e.g. `01:05 / 03:30`.
pub fn progress_label(current_time: f64, duration: f64) -> String {
    format!("{} / {}", format_mmss(current_time), format_mmss(duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(65.0), "01:05");
        assert_eq!(format_mmss(5.0), "00:05");
        assert_eq!(format_mmss(0.0), "00:00");
        assert_eq!(format_mmss(59.999), "00:59");
        assert_eq!(format_mmss(600.0), "10:00");
        assert_eq!(format_mmss(3725.0), "62:05");
    }

    #[test]
    fn test_format_mmss_non_finite() {
        assert_eq!(format_mmss(f64::NAN), "00:00");
        assert_eq!(format_mmss(f64::INFINITY), "00:00");
        assert_eq!(format_mmss(-3.0), "00:00");
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(progress_label(65.4, 210.0), "01:05 / 03:30");
        assert_eq!(progress_label(0.0, f64::NAN), "00:00 / 00:00");
    }
}
