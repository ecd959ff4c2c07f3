//! SRT (SubRip) Parsing and Export
//!
//! # SRT Format
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! First cue text
//!
//! 2
//! 00:00:05,500 --> 00:00:08,000
//! Second cue text
//! with multiple lines
//! ```
//!
//! The index line is optional on input; the timing line is found by
//! scanning each block for the arrow token rather than by position.

use tracing::debug;

use super::block::{cue_from_block, split_blocks};
use super::models::Cue;
use super::timecode::format_srt_timestamp;

/// Parses SRT content into cues.
///
/// Total over arbitrary input: malformed blocks are dropped, and fully
/// malformed or empty content yields an empty sequence.
pub fn parse_srt(content: &str) -> Vec<Cue> {
    let mut cues = Vec::new();

    for block in split_blocks(content) {
        if let Some(cue) = cue_from_block(&block, cues.len() + 1) {
            cues.push(cue);
        }
    }

    cues
}

/// Exports cues to SRT format.
///
/// Untimed cues cannot be represented and are skipped; emitted cues are
/// renumbered contiguously from 1.
pub fn write_srt(cues: &[Cue]) -> String {
    let mut output = String::new();
    let mut index = 0;

    for cue in cues {
        let (start_sec, end_sec) = match (cue.start_time, cue.end_time) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                debug!("Skipping untimed cue '{}' in SRT export", cue.id);
                continue;
            }
        };

        index += 1;
        output.push_str(&format!("{}\n", index));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_timestamp(start_sec),
            format_srt_timestamp(end_sec)
        ));
        output.push_str(&cue.text);
        output.push_str("\n\n");
    }

    output.trim_end().to_string()
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
    fn test_parse_srt_basic() {
        let srt = "1\n00:00:01,000 --> 00:00:04,000\nHello world\n\n2\n00:00:05,500 --> 00:00:08,000\nSecond line";

        let cues = parse_srt(srt);
        assert_eq!(cues.len(), 2);

        assert_eq!(cues[0].start_time, Some(1.0));
        assert_eq!(cues[0].end_time, Some(4.0));
        assert_eq!(cues[0].text, "Hello world");
        assert_eq!(cues[0].id, "1");

        assert_eq!(cues[1].start_time, Some(5.5));
        assert_eq!(cues[1].end_time, Some(8.0));
        assert_eq!(cues[1].text, "Second line");
    }

    #[test]
    fn test_parse_srt_multiline_text() {
        let srt = r#"1
00:00:00,000 --> 00:00:05,000
Line one
Line two
Line three
"#;

        let cues = parse_srt(srt);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Line one\nLine two\nLine three");
    }

    #[test]
    fn test_parse_srt_without_index_lines() {
        let srt = "00:00:01,000 --> 00:00:02,000\nfirst\n\n00:00:03,000 --> 00:00:04,000\nsecond";

        let cues = parse_srt(srt);
        assert_eq!(cues.len(), 2);
        // No preceding line, so ids fall back to the running counter
        assert_eq!(cues[0].id, "1");
        assert_eq!(cues[1].id, "2");
    }

    #[test]
    fn test_parse_srt_drops_arrowless_block() {
        let srt = r#"1
00:00:01,000 --> 00:00:04,000
valid before

broken block without timing

3
00:00:05,000 --> 00:00:08,000
valid after
"#;

        let cues = parse_srt(srt);
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "valid before");
        assert_eq!(cues[1].text, "valid after");
    }

    #[test]
    fn test_parse_srt_strips_inline_tags() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\n<i>italic</i> words";
        let cues = parse_srt(srt);
        assert_eq!(cues[0].text, "italic words");
    }

    #[test]
    fn test_parse_srt_mangled_timestamp_degrades_to_zero() {
        let srt = "1\n00:00:bad --> 00:00:04,000\nstill kept";
        let cues = parse_srt(srt);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].start_time, Some(0.0));
        assert_eq!(cues[0].end_time, Some(4.0));
    }

    #[test]
    fn test_parse_srt_accepts_period_decimals() {
        let srt = "1\n00:00:01.500 --> 00:00:04.000\nperiod style";
        let cues = parse_srt(srt);
        assert_eq!(cues[0].start_time, Some(1.5));
    }

    #[test]
    fn test_parse_srt_empty_input() {
        assert!(parse_srt("").is_empty());
        assert!(parse_srt("\n\n").is_empty());
        assert!(parse_srt("complete garbage").is_empty());
    }

    #[test]
    fn test_chronological_input_stays_ascending() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\na\n\n2\n00:00:03,000 --> 00:00:04,000\nb\n\n3\n00:01:00,000 --> 00:01:05,000\nc";
        let cues = parse_srt(srt);
        assert_eq!(cues.len(), 3);
        assert!(cues
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time));
    }

    // -------------------------------------------------------------------------
    // Export Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_write_srt() {
        let cues = vec![
            Cue::timed("1", 1.0, 4.0, "Hello world").unwrap(),
            Cue::timed("2", 5.5, 8.0, "Second line").unwrap(),
        ];

        let srt = write_srt(&cues);
        assert!(srt.starts_with("1\n00:00:01,000 --> 00:00:04,000\nHello world"));
        assert!(srt.contains("00:00:05,500 --> 00:00:08,000"));
    }

    #[test]
    fn test_write_srt_skips_untimed_and_renumbers() {
        let cues = vec![
            Cue::timed("a", 1.0, 2.0, "first").unwrap(),
            Cue::untimed("b", "no timing").unwrap(),
            Cue::timed("c", 3.0, 4.0, "second").unwrap(),
        ];

        let srt = write_srt(&cues);
        assert!(!srt.contains("no timing"));
        assert!(srt.contains("1\n00:00:01,000"));
        assert!(srt.contains("2\n00:00:03,000"));
    }

    #[test]
    fn test_srt_roundtrip() {
        let original = vec![
            Cue::timed("1", 1.0, 4.0, "First cue").unwrap(),
            Cue::timed("2", 5.5, 8.5, "Second\nMultiline").unwrap(),
        ];

        let parsed = parse_srt(&write_srt(&original));
        assert_eq!(parsed.len(), original.len());
        assert_eq!(parsed[0].start_time, original[0].start_time);
        assert_eq!(parsed[0].end_time, original[0].end_time);
        assert_eq!(parsed[0].text, original[0].text);
        assert_eq!(parsed[1].text, original[1].text);
    }
}
