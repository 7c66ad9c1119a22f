//! Time formatting helpers.

/// Format a duration in seconds to a short human-readable string.
///
/// Zero remainders are dropped, so `300` renders as `"5m"`, not `"5m 0s"`.
pub fn format_duration(secs: u64) -> String {
    let (value, unit, rem, rem_unit) = if secs < 60 {
        return format!("{secs}s");
    } else if secs < 3600 {
        (secs / 60, "m", secs % 60, "s")
    } else if secs < 86400 {
        (secs / 3600, "h", (secs % 3600) / 60, "m")
    } else {
        (secs / 86400, "d", (secs % 86400) / 3600, "h")
    };

    if rem == 0 {
        format!("{value}{unit}")
    } else {
        format!("{value}{unit} {rem}{rem_unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_zero_remainders() {
        assert_eq!(format_duration(300), "5m");
        assert_eq!(format_duration(3600), "1h");
        assert_eq!(format_duration(86400), "1d");
    }

    #[test]
    fn keeps_nonzero_remainders() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(330), "5m 30s");
        assert_eq!(format_duration(3660), "1h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }
}
