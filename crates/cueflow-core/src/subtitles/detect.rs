//! Format Detection and Dispatch
//!
//! The single parse entry point for the rest of the application. An
//! explicit format hint is authoritative; content sniffing is reserved for
//! genuinely unlabeled input, since sniffing is inherently ambiguous for
//! edge cases (VTT without its header, SRT exports using period decimals).

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::block::strip_bom;
use super::models::{ParsedResult, SubtitleFormat};
use super::plain::parse_plain;
use super::srt::parse_srt;
use super::vtt::parse_vtt;

/// Matches the comma-decimal SRT timing line shape.
fn srt_timing_regex() -> &'static Regex {
    static SRT_TIMING: OnceLock<Regex> = OnceLock::new();
    SRT_TIMING.get_or_init(|| {
        Regex::new(r"^\d{1,2}:\d{2}:\d{2},\d{1,3}\s*-->\s*\d{1,2}:\d{2}:\d{2},\d{1,3}")
            .expect("valid SRT timing pattern")
    })
}

/// Parses subtitle content, dispatching on an optional format hint.
///
/// Empty input always yields the empty `Unknown` result, hint or not. An
/// unrecognized hint falls back to sniffing. This function is total: it
/// returns a well-formed [`ParsedResult`] for arbitrary input.
pub fn parse_subtitles(content: &str, hint: Option<&str>) -> ParsedResult {
    if strip_bom(content).trim().is_empty() {
        return ParsedResult::default();
    }

    if let Some(hint) = hint {
        match SubtitleFormat::from_hint(hint) {
            Some(format) => return parse_as(content, format),
            None => debug!("Unrecognized format hint '{}', sniffing content", hint),
        }
    }

    parse_as(content, detect_format(content))
}

/// Parses content as a specific format.
///
/// `Unknown` has no parser and yields an empty result.
pub fn parse_as(content: &str, format: SubtitleFormat) -> ParsedResult {
    let cues = match format {
        SubtitleFormat::Srt => parse_srt(content),
        SubtitleFormat::Vtt => parse_vtt(content),
        SubtitleFormat::Txt => parse_plain(content),
        SubtitleFormat::Unknown => Vec::new(),
    };
    ParsedResult::new(cues, format)
}

/// Sniffs the format of unlabeled content.
///
/// Signals, in order: the `WEBVTT` header; a digits line followed by a
/// comma-decimal SRT timing line; any arrow line, disambiguated by the
/// fractional separator; otherwise plain text. Empty input is `Unknown`.
pub fn detect_format(content: &str) -> SubtitleFormat {
    let body = strip_bom(content);
    if body.trim().is_empty() {
        return SubtitleFormat::Unknown;
    }

    if body.trim_start().starts_with("WEBVTT") {
        return SubtitleFormat::Vtt;
    }

    let lines: Vec<&str> = body.lines().map(str::trim).collect();

    for pair in lines.windows(2) {
        if is_digit_line(pair[0]) && srt_timing_regex().is_match(pair[1]) {
            return SubtitleFormat::Srt;
        }
    }

    if let Some(arrow_line) = lines.iter().find(|l| l.contains("-->")) {
        if arrow_line.contains(',') {
            return SubtitleFormat::Srt;
        }
        return SubtitleFormat::Vtt;
    }

    SubtitleFormat::Txt
}

fn is_digit_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Tests
// =============================================================================
