//! Lyrics Document
//!
//! The JSON shape a synchronized-lyrics front end consumes: the cue lines
//! plus summary metadata. Serialized camelCase like every other wire type
//! in the engine.

use serde::{Deserialize, Serialize};

use crate::subtitles::Cue;
use crate::TimeSec;

// =============================================================================
// Document
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsMetadata {
    pub total_lines: usize,
    pub total_words: usize,
    /// End time of the last line in seconds, 0 when there are no lines
    pub duration: TimeSec,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsDocument {
    pub lines: Vec<Cue>,
    pub metadata: LyricsMetadata,
}

impl LyricsDocument {
    /// Builds a document from segmented lines and the source word count.
    pub fn from_cues(lines: Vec<Cue>, total_words: usize) -> Self {
        let duration = lines
            .last()
            .and_then(|cue| cue.end_time)
            .unwrap_or(0.0);
        Self {
            metadata: LyricsMetadata {
                total_lines: lines.len(),
                total_words,
                duration,
            },
            lines,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
