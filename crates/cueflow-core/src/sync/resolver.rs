//! Active Cue Resolution
//!
//! Given a cue sequence sorted ascending by start time and a playback time,
//! finds the cue that should be highlighted. Stateless and cheap: a single
//! forward scan with early exit, called on every playback tick.

use serde::Serialize;

use crate::subtitles::Cue;
use crate::TimeSec;

/// A resolved cue together with its index in the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCue<'a> {
    pub index: usize,
    pub cue: &'a Cue,
}

/// Resolves the active cue for a playback time.
///
/// An exact interval match (inclusive on both ends) wins outright; with
/// overlapping cues the first match in ascending-start order is returned.
/// When the time falls in a gap between cues, the most recently started
/// cue is returned instead so the last line stays visible until the next
/// one begins. A time earlier than the first cue resolves to `None`, as
/// does a sequence of untimed cues.
pub fn resolve_active(cues: &[Cue], time_sec: TimeSec) -> Option<ActiveCue<'_>> {
    let mut last_passed: Option<usize> = None;

    for (index, cue) in cues.iter().enumerate() {
        let start_sec = match cue.start_time {
            Some(start) => start,
            None => continue,
        };

        if cue.contains(time_sec) {
            return Some(ActiveCue { index, cue });
        }

        if time_sec >= start_sec {
            last_passed = Some(index);
        } else {
            // Cues are ascending by start; nothing later can match.
            break;
        }
    }

    last_passed.map(|index| ActiveCue {
        index,
        cue: &cues[index],
    })
}

/// A bounded slice of cues around a resolved index.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextWindow<'a> {
    pub before: &'a [Cue],
    pub after: &'a [Cue],
}

/// Extracts up to `before` preceding and `after` following cues around an
/// index.
///
/// An absent index defaults to 0 and an out-of-range index clamps to the
/// last cue. The cue at the index itself is never included in either side.
pub fn context_window(
    cues: &[Cue],
    index: Option<usize>,
    before: usize,
    after: usize,
) -> ContextWindow<'_> {
    if cues.is_empty() {
        return ContextWindow {
            before: &[],
            after: &[],
        };
    }

    let idx = index.unwrap_or(0).min(cues.len() - 1);
    let lo = idx.saturating_sub(before);
    let hi = idx.saturating_add(1).saturating_add(after).min(cues.len());

    ContextWindow {
        before: &cues[lo..idx],
        after: &cues[idx + 1..hi],
    }
}

// =============================================================================
// Tests
// =============================================================================
