//! Cue Block Assembly
//!
//! Shared machinery for the timed parsers: blank-line block splitting,
//! timing-line discovery, and cue construction. SRT and VTT differ only in
//! their preamble handling; the per-block rules live here once.

use tracing::debug;

use super::models::Cue;
use super::timecode::parse_timestamp;
use crate::TimeSec;

/// Splits content into blocks of consecutive non-blank lines.
///
/// Lines are kept verbatim; `str::lines` already strips `\r\n` endings.
pub(crate) fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Builds a cue from one block of lines.
///
/// The timing line is discovered by scanning for the first line containing
/// the arrow token; an index or identifier line may or may not precede it.
/// The cue id is the line immediately before the timing line when one
/// exists, else `next_ordinal`. Text is every line after the timing line,
/// joined, with inline markup stripped and the result trimmed.
///
/// Returns `None` for blocks with no timing line or with empty text after
/// stripping; such blocks are dropped, never surfaced as errors.
pub(crate) fn cue_from_block(lines: &[&str], next_ordinal: usize) -> Option<Cue> {
    let timing_pos = match lines.iter().position(|l| l.contains("-->")) {
        Some(pos) => pos,
        None => {
            debug!("Dropping block without a timing line");
            return None;
        }
    };

    let (start_sec, end_sec) = split_timing_line(lines[timing_pos])?;

    let id = if timing_pos > 0 {
        lines[timing_pos - 1].trim().to_string()
    } else {
        next_ordinal.to_string()
    };

    let text = strip_markup_tags(&lines[timing_pos + 1..].join("\n"));
    let cue = Cue::timed(&id, start_sec, end_sec, &text);
    if cue.is_none() {
        debug!("Dropping block with empty text after tag stripping");
    }
    cue
}

/// Splits a timing line into start/end seconds.
///
/// Cue settings riding after the end timestamp (VTT) are ignored by taking
/// only the first whitespace-separated token of the end side. Each side is
/// parsed leniently, so a mangled timestamp degrades to zero rather than
/// dropping the cue.
pub(crate) fn split_timing_line(line: &str) -> Option<(TimeSec, TimeSec)> {
    let (start_part, end_part) = line.split_once("-->")?;
    let end_token = end_part.split_whitespace().next().unwrap_or("");
    Some((
        parse_timestamp(start_part.trim()),
        parse_timestamp(end_token),
    ))
}

/// Strips `<...>` markup from text.
///
/// Good enough for display purposes; this also removes legitimate VTT
/// cue-settings syntax and is not a general markup sanitizer.
pub(crate) fn strip_markup_tags(text: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Strips a leading UTF-8 byte order mark.
pub(crate) fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

// =============================================================================
// Tests
// =============================================================================
