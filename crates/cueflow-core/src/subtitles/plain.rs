//! Plain-Text Parsing
//!
//! Untimed lyric sheets: one cue per non-blank line, no timestamps.

use super::models::Cue;

/// Parses plain text into untimed cues.
///
/// Each non-blank line becomes one cue whose id is its 1-based position
/// among the retained lines.
pub fn parse_plain(content: &str) -> Vec<Cue> {
    let mut cues = Vec::new();

    for line in content.lines() {
        if let Some(cue) = Cue::untimed(&(cues.len() + 1).to_string(), line) {
            cues.push(cue);
        }
    }

    cues
}

// =============================================================================
// Tests
// =============================================================================
