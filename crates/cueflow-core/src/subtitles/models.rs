//! Subtitle Data Models
//!
//! Defines the cue model shared by all parsers and the parsed-result shape
//! consumed by the rest of the application.

use serde::{Deserialize, Serialize};

use crate::{CueId, TimeSec};

// =============================================================================
// Subtitle Format
// =============================================================================

/// Wire format of a subtitle asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// SubRip (comma fractional separator)
    Srt,
    /// WebVTT (period fractional separator, optional hours)
    Vtt,
    /// Untimed plain text, one cue per line
    Txt,
    /// Undetermined (empty input)
    Unknown,
}

impl SubtitleFormat {
    /// Maps an explicit format hint to a format, case-insensitively.
    ///
    /// Returns `None` for unrecognized hints so callers can fall back to
    /// content sniffing.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "srt" => Some(Self::Srt),
            "vtt" | "webvtt" => Some(Self::Vtt),
            "txt" | "text" | "plain" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Returns the lowercase wire token for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Txt => "txt",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Cue
// =============================================================================

/// A single unit of timed or untimed subtitle/lyric text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    /// Display identifier. Advisory only; never a lookup key.
    pub id: CueId,
    /// Start time in seconds; absent for untimed cues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeSec>,
    /// End time in seconds; present only when `start_time` is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeSec>,
    /// Trimmed text with inline markup stripped; internal line breaks kept
    pub text: String,
}

impl Cue {
    /// Creates a timed cue.
    ///
    /// The text is trimmed; a cue whose text is empty after trimming is
    /// never retained, so `None` is returned instead.
    pub fn timed(id: &str, start_sec: TimeSec, end_sec: TimeSec, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: id.to_string(),
            start_time: Some(start_sec),
            end_time: Some(end_sec),
            text: text.to_string(),
        })
    }

    /// Creates an untimed cue, subject to the same non-empty-text rule.
    pub fn untimed(id: &str, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: id.to_string(),
            start_time: None,
            end_time: None,
            text: text.to_string(),
        })
    }

    /// Returns true if this cue carries timing information.
    pub fn is_timed(&self) -> bool {
        self.start_time.is_some()
    }

    /// Returns the duration in seconds, when both endpoints are present.
    pub fn duration(&self) -> Option<TimeSec> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Returns true if the given time falls inside this cue's interval,
    /// inclusive on both ends. Untimed cues contain no time.
    pub fn contains(&self, time_sec: TimeSec) -> bool {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => time_sec >= start && time_sec <= end,
            _ => false,
        }
    }
}

// =============================================================================
// Parsed Result
// =============================================================================

/// The sole output of a parse: an ordered cue sequence plus the format it
/// was read as.
///
/// Immutable once produced. A new track or media selection replaces the
/// whole structure; nothing is ever mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResult {
    /// Cues in source order; ascending by start time for timed formats
    pub cues: Vec<Cue>,
    /// Format the content was parsed as
    pub format: SubtitleFormat,
    /// True iff `cues` is non-empty and the first cue is timed
    pub has_timestamps: bool,
}

impl ParsedResult {
    /// Wraps parsed cues, deriving `has_timestamps` from the first cue.
    pub fn new(cues: Vec<Cue>, format: SubtitleFormat) -> Self {
        let has_timestamps = cues.first().map(|c| c.start_time.is_some()).unwrap_or(false);
        Self {
            cues,
            format,
            has_timestamps,
        }
    }

    /// Returns the end time of the last cue, or 0 for empty/untimed results.
    pub fn duration(&self) -> TimeSec {
        self.cues
            .last()
            .and_then(|c| c.end_time)
            .unwrap_or(0.0)
    }

    /// Returns the number of cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Returns true if the result holds no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl Default for ParsedResult {
    fn default() -> Self {
        Self::new(Vec::new(), SubtitleFormat::Unknown)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Format Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_from_hint_case_insensitive() {
        assert_eq!(SubtitleFormat::from_hint("srt"), Some(SubtitleFormat::Srt));
        assert_eq!(SubtitleFormat::from_hint("SRT"), Some(SubtitleFormat::Srt));
        assert_eq!(SubtitleFormat::from_hint("WebVTT"), Some(SubtitleFormat::Vtt));
        assert_eq!(SubtitleFormat::from_hint(" vtt "), Some(SubtitleFormat::Vtt));
        assert_eq!(SubtitleFormat::from_hint("Plain"), Some(SubtitleFormat::Txt));
    }

    #[test]
    fn test_from_hint_unrecognized() {
        assert_eq!(SubtitleFormat::from_hint("ass"), None);
        assert_eq!(SubtitleFormat::from_hint(""), None);
        assert_eq!(SubtitleFormat::from_hint("unknown"), None);
    }

    #[test]
    fn test_format_serde_tokens() {
        let json = serde_json::to_string(&SubtitleFormat::Vtt).unwrap();
        assert_eq!(json, "\"vtt\"");
        let back: SubtitleFormat = serde_json::from_str("\"srt\"").unwrap();
        assert_eq!(back, SubtitleFormat::Srt);
    }

    // -------------------------------------------------------------------------
    // Cue Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_timed_cue_trims_text() {
        let cue = Cue::timed("1", 1.0, 4.0, "  Hello world  ").unwrap();
        assert_eq!(cue.text, "Hello world");
        assert_eq!(cue.start_time, Some(1.0));
        assert_eq!(cue.end_time, Some(4.0));
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(Cue::timed("1", 1.0, 4.0, "   ").is_none());
        assert!(Cue::untimed("1", "").is_none());
    }

    #[test]
    fn test_internal_line_breaks_are_preserved() {
        let cue = Cue::timed("1", 0.0, 2.0, "one\ntwo\n").unwrap();
        assert_eq!(cue.text, "one\ntwo");
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let cue = Cue::timed("1", 1.0, 4.0, "x").unwrap();
        assert!(cue.contains(1.0));
        assert!(cue.contains(2.5));
        assert!(cue.contains(4.0));
        assert!(!cue.contains(0.999));
        assert!(!cue.contains(4.001));
    }

    #[test]
    fn test_untimed_cue_contains_nothing() {
        let cue = Cue::untimed("1", "lyric line").unwrap();
        assert!(!cue.contains(0.0));
        assert_eq!(cue.duration(), None);
        assert!(!cue.is_timed());
    }

    // -------------------------------------------------------------------------
    // ParsedResult Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_has_timestamps_follows_first_cue() {
        let timed = ParsedResult::new(
            vec![Cue::timed("1", 0.0, 1.0, "a").unwrap()],
            SubtitleFormat::Srt,
        );
        assert!(timed.has_timestamps);

        let untimed = ParsedResult::new(
            vec![Cue::untimed("1", "a").unwrap()],
            SubtitleFormat::Txt,
        );
        assert!(!untimed.has_timestamps);

        let empty = ParsedResult::new(Vec::new(), SubtitleFormat::Srt);
        assert!(!empty.has_timestamps);
    }

    #[test]
    fn test_default_is_empty_unknown() {
        let result = ParsedResult::default();
        assert!(result.is_empty());
        assert_eq!(result.format, SubtitleFormat::Unknown);
        assert!(!result.has_timestamps);
        assert_eq!(result.duration(), 0.0);
    }

    #[test]
    fn test_duration_is_last_cue_end() {
        let result = ParsedResult::new(
            vec![
                Cue::timed("1", 0.0, 2.0, "a").unwrap(),
                Cue::timed("2", 3.0, 5.5, "b").unwrap(),
            ],
            SubtitleFormat::Srt,
        );
        assert_eq!(result.duration(), 5.5);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_cue_serializes_camel_case() {
        let cue = Cue::timed("7", 1.0, 2.0, "hi").unwrap();
        let json = serde_json::to_string(&cue).unwrap();
        assert!(json.contains("\"startTime\":1.0"));
        assert!(json.contains("\"endTime\":2.0"));

        let untimed = Cue::untimed("1", "hi").unwrap();
        let json = serde_json::to_string(&untimed).unwrap();
        assert!(!json.contains("startTime"));
    }
}
