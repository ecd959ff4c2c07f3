//! Playhead Tracking
//!
//! Owns the previous-tick state the display contract requires. On every
//! playback-time update the tracker resolves the active cue and exposes
//! `(previousTime, currentTime, previousIndex, currentIndex, activeCue)`.
//! The rendering layer re-centers when the index changes and skips the
//! scroll animation when the jump between times marks a scrub; the engine
//! supplies the data but never decides the animation mode.

use serde::Serialize;

use super::resolver::resolve_active;
use crate::subtitles::Cue;
use crate::TimeSec;

/// Time jump, in seconds, beyond which a transition counts as a scrub/seek
/// rather than normal playback.
pub const SCRUB_THRESHOLD_SEC: TimeSec = 2.0;

/// One tick of the display synchronization contract.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncUpdate<'a> {
    pub previous_time: TimeSec,
    pub current_time: TimeSec,
    pub previous_index: Option<usize>,
    pub current_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_cue: Option<&'a Cue>,
}

impl SyncUpdate<'_> {
    /// Returns true if the active-cue index changed on this tick.
    pub fn index_changed(&self) -> bool {
        self.previous_index != self.current_index
    }

    /// Returns true if the time jump exceeds the given threshold.
    pub fn is_scrub(&self, threshold_sec: TimeSec) -> bool {
        (self.current_time - self.previous_time).abs() > threshold_sec
    }
}

/// Tracks playback time across ticks for one cue sequence.
///
/// Holds no cue data itself; reset it wholesale when the track or media
/// changes so a stale previous time is never compared against a new
/// timeline.
#[derive(Clone, Debug, Default)]
pub struct PlayheadTracker {
    last_time: TimeSec,
    last_index: Option<usize>,
}

impl PlayheadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to a new playback time, resolving the active cue.
    pub fn advance<'a>(&mut self, time_sec: TimeSec, cues: &'a [Cue]) -> SyncUpdate<'a> {
        let previous_time = self.last_time;
        let previous_index = self.last_index;

        let active = resolve_active(cues, time_sec);
        let current_index = active.map(|a| a.index);

        self.last_time = time_sec;
        self.last_index = current_index;

        SyncUpdate {
            previous_time,
            current_time: time_sec,
            previous_index,
            current_index,
            active_cue: active.map(|a| a.cue),
        }
    }

    /// Forgets all previous-tick state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Tests
// =============================================================================
