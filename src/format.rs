const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

// Missing, NaN, infinite and negative inputs all collapse to zero.
fn whole_seconds(seconds: Option<f64>) -> f64 {
    match seconds {
        Some(secs) if secs.is_finite() && secs > 0.0 => secs.floor(),
        _ => 0.0,
    }
}

// Splits whole seconds into (quotient, remainder) by `unit`. The quotient
// stays a float so huge inputs keep their magnitude instead of saturating.
fn split_whole(total: f64, unit: u64) -> (f64, u64) {
    let unit = unit as f64;
    let rem = total % unit;
    ((total - rem) / unit, rem as u64)
}

/// Formats an uptime in seconds as `"1d 2h 3m"`.
///
/// Only non-zero units are shown, always in day, hour, minute order.
/// Leftover seconds are dropped, so anything under a minute (including
/// missing or unparseable input) renders as `"0m"`.
pub fn format_uptime(seconds: Option<f64>) -> String {
    let (days, mut remaining) = split_whole(whole_seconds(seconds), SECS_PER_DAY);

    let hours = remaining / SECS_PER_HOUR;
    remaining %= SECS_PER_HOUR;
    let minutes = remaining / SECS_PER_MINUTE;

    let mut parts = Vec::with_capacity(3);
    if days > 0.0 {
        parts.push(format!("{:.0}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }

    if parts.is_empty() {
        return "0m".to_string();
    }
    parts.join(" ")
}

/// Formats a countdown as `M:SS`. Minutes are never padded or capped.
pub fn format_countdown(seconds: Option<f64>) -> String {
    let (minutes, secs) = split_whole(whole_seconds(seconds), SECS_PER_MINUTE);
    format!("{:.0}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_under_a_minute() {
        for secs in 0..60 {
            assert_eq!(format_uptime(Some(secs as f64)), "0m");
        }
    }

    #[test]
    fn test_uptime_all_units() {
        assert_eq!(format_uptime(Some(90061.0)), "1d 1h 1m");
    }

    #[test]
    fn test_uptime_skips_zero_units() {
        assert_eq!(format_uptime(Some(3600.0)), "1h");
        assert_eq!(format_uptime(Some(86400.0 + 120.0)), "1d 2m");
        assert_eq!(format_uptime(Some(2.0 * 86400.0)), "2d");
    }

    #[test]
    fn test_uptime_fractional_input_is_floored() {
        assert_eq!(format_uptime(Some(119.99)), "1m");
        assert_eq!(format_uptime(Some(12345.67)), "3h 25m");
    }

    #[test]
    fn test_uptime_missing_or_invalid() {
        assert_eq!(format_uptime(None), "0m");
        assert_eq!(format_uptime(Some(f64::NAN)), "0m");
        assert_eq!(format_uptime(Some(f64::INFINITY)), "0m");
    }

    #[test]
    fn test_uptime_negative_is_clamped() {
        assert_eq!(format_uptime(Some(-1.0)), "0m");
        assert_eq!(format_uptime(Some(-90061.0)), "0m");
    }

    #[test]
    fn test_countdown_basic() {
        assert_eq!(format_countdown(Some(65.0)), "1:05");
        assert_eq!(format_countdown(Some(5.0)), "0:05");
        assert_eq!(format_countdown(Some(600.0)), "10:00");
    }

    #[test]
    fn test_countdown_minutes_unbounded() {
        assert_eq!(format_countdown(Some(7325.0)), "122:05");
    }

    #[test]
    fn test_huge_values_do_not_saturate() {
        let big = (1u64 << 60) as f64;
        assert_eq!(format_uptime(Some(big * 86400.0)), "1152921504606846976d");
        assert_eq!(format_uptime(Some((1u64 << 30) as f64 * 86400.0 + 3661.0)), "1073741824d 1h 1m");
        assert_eq!(format_countdown(Some(big * 60.0)), "1152921504606846976:00");
    }

    #[test]
    fn test_countdown_clamps_and_defaults() {
        assert_eq!(format_countdown(Some(-10.0)), "0:00");
        assert_eq!(format_countdown(None), "0:00");
        assert_eq!(format_countdown(Some(f64::NAN)), "0:00");
        assert_eq!(format_countdown(Some(59.9)), "0:59");
    }

    #[test]
    fn test_formatters_are_repeatable() {
        assert_eq!(format_uptime(Some(90061.0)), format_uptime(Some(90061.0)));
        assert_eq!(format_countdown(Some(65.0)), format_countdown(Some(65.0)));
    }
}
