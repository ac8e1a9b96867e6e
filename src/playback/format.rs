/// Render whole seconds as `m:ss`.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Elapsed share of the track in percent, or `None` while the duration is unknown.
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some((current / duration * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(7.9), "0:07");
        assert_eq!(format_clock(65.0), "1:05");
        assert_eq!(format_clock(3600.0), "60:00");
    }

    #[test]
    fn clock_tolerates_garbage() {
        assert_eq!(format_clock(-3.0), "0:00");
        assert_eq!(format_clock(f64::NAN), "0:00");
        assert_eq!(format_clock(f64::INFINITY), "0:00");
    }

    #[test]
    fn progress_needs_a_duration() {
        assert_eq!(progress_percent(10.0, 0.0), None);
        assert_eq!(progress_percent(10.0, f64::NAN), None);
        assert_eq!(progress_percent(30.0, 120.0), Some(25.0));
        assert_eq!(progress_percent(130.0, 120.0), Some(100.0));
    }
}
