//! WebVTT Parsing and Export
//!
//! # VTT Format
//!
//! ```text
//! WEBVTT
//!
//! cue-1
//! 00:01.000 --> 00:04.000
//! First cue text
//!
//! 00:00:05.500 --> 00:00:08.000 position:50%
//! Second cue text
//! ```
//!
//! Hours are optional on either side of the timing line independently, cue
//! identifier lines are optional, and cue settings after the end timestamp
//! are ignored. `NOTE` and `STYLE` blocks are skipped.

use tracing::debug;

use super::block::{cue_from_block, split_blocks, strip_bom};
use super::models::Cue;
use super::timecode::format_vtt_timestamp;

/// Parses WebVTT content into cues.
///
/// Total over arbitrary input. A missing `WEBVTT` header is tolerated so
/// that hint-forced parses of headerless files still recover their cues.
pub fn parse_vtt(content: &str) -> Vec<Cue> {
    let content = strip_bom(content);
    let mut cues = Vec::new();
    let mut first_block = true;

    for block in split_blocks(content) {
        let lead = block[0].trim_start();

        // The header block is the WEBVTT line plus any metadata lines that
        // follow it up to the first blank line.
        if first_block && lead.starts_with("WEBVTT") {
            first_block = false;
            continue;
        }
        first_block = false;

        if lead.starts_with("NOTE") || lead.starts_with("STYLE") {
            debug!("Skipping VTT comment/style block");
            continue;
        }

        if let Some(cue) = cue_from_block(&block, cues.len() + 1) {
            cues.push(cue);
        }
    }

    cues
}

/// Exports cues to WebVTT format.
///
/// Each cue is written with a `cue-N` identifier line. Untimed cues cannot
/// be represented and are skipped.
pub fn write_vtt(cues: &[Cue]) -> String {
    let mut output = String::from("WEBVTT\n\n");
    let mut index = 0;

    for cue in cues {
        let (start_sec, end_sec) = match (cue.start_time, cue.end_time) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                debug!("Skipping untimed cue '{}' in VTT export", cue.id);
                continue;
            }
        };

        index += 1;
        output.push_str(&format!("cue-{}\n", index));
        output.push_str(&format!(
            "{} --> {}\n",
            format_vtt_timestamp(start_sec),
            format_vtt_timestamp(end_sec)
        ));
        output.push_str(&cue.text);
        output.push_str("\n\n");
    }

    output.trim_end().to_string()
}

// =============================================================================
// Tests
// =============================================================================
