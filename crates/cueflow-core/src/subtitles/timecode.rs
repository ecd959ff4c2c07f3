//! Timestamp Conversion
//!
//! Converts timestamp tokens (`HH:MM:SS,mmm`, `HH:MM:SS.mmm`, `MM:SS.mmm`)
//! to seconds and back. Comma and period are both accepted as fractional
//! separators regardless of source format, since exported files mix the two
//! conventions freely.

use tracing::debug;

use crate::TimeSec;

// =============================================================================
// Parsing
// =============================================================================

/// Parses a timestamp token into seconds.
///
/// Lenient by contract: a token with no `:`, or with any unparsable
/// component, yields `0.0` rather than an error. Parsing never fails the
/// surrounding cue parse.
pub fn parse_timestamp(token: &str) -> TimeSec {
    match try_parse_timestamp(token) {
        Some(seconds) => seconds,
        None => {
            debug!("Unparsable timestamp token '{}', defaulting to 0", token);
            0.0
        }
    }
}

fn try_parse_timestamp(token: &str) -> Option<TimeSec> {
    let parts: Vec<&str> = token.trim().split(':').collect();

    match parts.len() {
        // MM:SS[.,]mmm format
        2 => {
            let minutes: f64 = parts[0].parse().ok()?;
            let seconds = parse_seconds_segment(parts[1])?;
            Some(minutes * 60.0 + seconds)
        }
        // HH:MM:SS[.,]mmm format
        3 => {
            let hours: f64 = parts[0].parse().ok()?;
            let minutes: f64 = parts[1].parse().ok()?;
            let seconds = parse_seconds_segment(parts[2])?;
            Some(hours * 3600.0 + minutes * 60.0 + seconds)
        }
        _ => None,
    }
}

/// Parses the final `SS[.,]mmm` segment of a token.
///
/// The fractional part is right-padded to exactly three digits, truncated
/// if longer, then divided by 1000.
fn parse_seconds_segment(segment: &str) -> Option<TimeSec> {
    let normalized = segment.replace(',', ".");
    let (secs_part, frac_part) = match normalized.split_once('.') {
        Some((secs, frac)) => (secs, frac),
        None => (normalized.as_str(), ""),
    };

    let seconds: f64 = secs_part.parse().ok()?;

    if frac_part.is_empty() {
        return Some(seconds);
    }

    let mut digits = frac_part.to_string();
    digits.truncate(3);
    while digits.len() < 3 {
        digits.push('0');
    }
    let millis: f64 = digits.parse().ok()?;

    Some(seconds + millis / 1000.0)
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats seconds as an SRT timestamp (00:00:00,000).
pub fn format_srt_timestamp(seconds: TimeSec) -> String {
    let (hours, mins, secs, ms) = split_clock_parts(seconds);
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, ms)
}

/// Formats seconds as a VTT timestamp (00:00:00.000).
pub fn format_vtt_timestamp(seconds: TimeSec) -> String {
    let (hours, mins, secs, ms) = split_clock_parts(seconds);
    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, ms)
}

/// Formats seconds for display: `MM:SS`, or `HH:MM:SS` once hours are
/// nonzero. Fractions are dropped.
pub fn format_clock(seconds: TimeSec) -> String {
    let (hours, mins, secs, _ms) = split_clock_parts(seconds);
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

fn split_clock_parts(seconds: TimeSec) -> (u64, u64, u64, u64) {
    // Negative and non-finite inputs clamp to zero.
    let total_ms = if seconds.is_finite() {
        (seconds.max(0.0) * 1000.0).round() as u64
    } else {
        0
    };
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;
    (hours, mins, secs, ms)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Parsing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_three_part_timestamps() {
        assert_eq!(parse_timestamp("00:00:01,500"), 1.5);
        assert_eq!(parse_timestamp("00:01:30,000"), 90.0);
        assert_eq!(parse_timestamp("01:30:00,000"), 5400.0);
        assert_eq!(parse_timestamp("00:00:00,100"), 0.1);
    }

    #[test]
    fn test_parse_two_part_timestamps() {
        assert_eq!(parse_timestamp("01:23.456"), 83.456);
        assert_eq!(parse_timestamp("00:01.000"), 1.0);
        assert_eq!(parse_timestamp("10:00.000"), 600.0);
    }

    #[test]
    fn test_comma_and_period_are_equivalent() {
        assert_eq!(parse_timestamp("00:00:01,500"), parse_timestamp("00:00:01.500"));
        assert_eq!(parse_timestamp("01:23,456"), parse_timestamp("01:23.456"));
    }

    #[test]
    fn test_fraction_is_padded_to_milliseconds() {
        // "5" reads as 500ms, "45" as 450ms
        assert_eq!(parse_timestamp("00:00:01.5"), 1.5);
        assert_eq!(parse_timestamp("00:00:01.45"), 1.45);
    }

    #[test]
    fn test_fraction_longer_than_three_digits_truncates() {
        assert_eq!(parse_timestamp("00:00:01.23456"), 1.234);
    }

    #[test]
    fn test_no_colon_defaults_to_zero() {
        assert_eq!(parse_timestamp("12"), 0.0);
        assert_eq!(parse_timestamp("garbage"), 0.0);
        assert_eq!(parse_timestamp(""), 0.0);
    }

    #[test]
    fn test_unparsable_component_defaults_to_zero() {
        assert_eq!(parse_timestamp("00:00:invalid"), 0.0);
        assert_eq!(parse_timestamp("xx:00:01,000"), 0.0);
        assert_eq!(parse_timestamp("00:00:01.2a"), 0.0);
    }

    #[test]
    fn test_four_part_split_defaults_to_zero() {
        assert_eq!(parse_timestamp("1:02:03:04"), 0.0);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_timestamp("  00:00:02,000  "), 2.0);
    }

    // -------------------------------------------------------------------------
    // Formatting Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_srt_timestamp() {
        assert_eq!(format_srt_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_srt_timestamp(1.5), "00:00:01,500");
        assert_eq!(format_srt_timestamp(90.0), "00:01:30,000");
        assert_eq!(format_srt_timestamp(5400.0), "01:30:00,000");
    }

    #[test]
    fn test_format_vtt_timestamp() {
        assert_eq!(format_vtt_timestamp(0.0), "00:00:00.000");
        assert_eq!(format_vtt_timestamp(1.5), "00:00:01.500");
        assert_eq!(format_vtt_timestamp(83.456), "00:01:23.456");
    }

    #[test]
    fn test_format_clamps_negative_and_non_finite() {
        assert_eq!(format_srt_timestamp(-3.0), "00:00:00,000");
        assert_eq!(format_vtt_timestamp(f64::NAN), "00:00:00.000");
        assert_eq!(format_vtt_timestamp(f64::INFINITY), "00:00:00.000");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(90.0), "01:30");
        assert_eq!(format_clock(3661.0), "01:01:01");
        assert_eq!(format_clock(59.9), "00:59");
    }

    #[test]
    fn test_parse_format_roundtrip_at_millisecond_precision() {
        for token in ["00:00:01.500", "00:01:23.456", "01:30:00.000"] {
            let seconds = parse_timestamp(token);
            assert_eq!(format_vtt_timestamp(seconds), token);
        }
    }
}
