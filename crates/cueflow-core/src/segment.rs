//! Word-Timing Segmentation
//!
//! Folds a recognized word stream into subtitle lines using natural breaks
//! and timing constraints, producing cues ready for the writers or the
//! lyrics document. A break occurs on a long silence, a full line, an
//! overlong line, or after sentence-ending punctuation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::subtitles::Cue;
use crate::{EngineResult, TimeSec};

// =============================================================================
// Word Timings
// =============================================================================

/// One recognized word with its start/end seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTiming {
    pub word: String,
    #[serde(default)]
    pub start: TimeSec,
    #[serde(default)]
    pub end: TimeSec,
}

impl WordTiming {
    pub fn new(word: &str, start: TimeSec, end: TimeSec) -> Self {
        Self {
            word: word.to_string(),
            start,
            end,
        }
    }
}

/// Decodes a word-timing array from JSON.
pub fn parse_word_timings(json: &str) -> EngineResult<Vec<WordTiming>> {
    Ok(serde_json::from_str(json)?)
}

// =============================================================================
// Segmenter Options
// =============================================================================

/// Line segmentation constraints.
///
/// Deserializes with per-field defaults so partial configs work; call
/// [`SegmenterOptions::normalize`] after loading to clamp out-of-range
/// values back to sane ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmenterOptions {
    /// Maximum words per subtitle line
    #[serde(default = "default_words_per_line")]
    pub words_per_line: usize,
    /// Minimum seconds a line stays on screen
    #[serde(default = "default_min_line_duration")]
    pub min_line_duration: TimeSec,
    /// Maximum seconds a line may span before a forced break
    #[serde(default = "default_max_line_duration")]
    pub max_line_duration: TimeSec,
    /// Seconds of silence between words that forces a line break
    #[serde(default = "default_pause_threshold")]
    pub pause_threshold: TimeSec,
}

fn default_words_per_line() -> usize {
    8
}

fn default_min_line_duration() -> TimeSec {
    1.5
}

fn default_max_line_duration() -> TimeSec {
    7.0
}

fn default_pause_threshold() -> TimeSec {
    0.7
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            words_per_line: default_words_per_line(),
            min_line_duration: default_min_line_duration(),
            max_line_duration: default_max_line_duration(),
            pause_threshold: default_pause_threshold(),
        }
    }
}

impl SegmenterOptions {
    /// Clamps fields into usable ranges.
    pub fn normalize(&mut self) {
        if self.words_per_line == 0 {
            warn!("wordsPerLine of 0 is unusable, resetting to default");
            self.words_per_line = default_words_per_line();
        }
        self.min_line_duration = clamp_sec(self.min_line_duration, 0.0, 60.0);
        self.max_line_duration = clamp_sec(self.max_line_duration, 0.5, 600.0);
        self.pause_threshold = clamp_sec(self.pause_threshold, 0.0, 60.0);

        if self.max_line_duration < self.min_line_duration {
            warn!(
                "maxLineDuration {} below minLineDuration {}, swapping",
                self.max_line_duration, self.min_line_duration
            );
            std::mem::swap(&mut self.max_line_duration, &mut self.min_line_duration);
        }
    }
}

fn clamp_sec(value: TimeSec, min: TimeSec, max: TimeSec) -> TimeSec {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

// =============================================================================
// Segmentation
// =============================================================================

/// Segments a word stream into timed cues.
///
/// Whitespace-only words are skipped. A break occurs before a word when the
/// silence gap since the previous word reaches `pauseThreshold`, when the
/// line is already full, when the line's span reaches `maxLineDuration`, or
/// when the previous word ends a sentence. Each closed line ends at the
/// previous word's end time, then `minLineDuration` is applied as a floor
/// on line ends, clamped so a line never runs into its successor.
pub fn segment_words(words: &[WordTiming], options: &SegmenterOptions) -> Vec<Cue> {
    let mut cues: Vec<Cue> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut line_start: TimeSec = 0.0;

    for (i, timing) in words.iter().enumerate() {
        let word = timing.word.trim();
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            line_start = timing.start;
            current.push(word);
            continue;
        }

        let mut should_break = false;

        if i > 0 {
            let pause = timing.start - words[i - 1].end;
            if pause >= options.pause_threshold {
                should_break = true;
            }
        }

        if current.len() >= options.words_per_line {
            should_break = true;
        }

        if timing.end - line_start >= options.max_line_duration {
            should_break = true;
        }

        if let Some(last) = current.last() {
            if last.ends_with(['.', '!', '?']) {
                should_break = true;
            }
        }

        if should_break {
            push_line(&mut cues, &current, line_start, words[i - 1].end);
            current.clear();
            current.push(word);
            line_start = timing.start;
        } else {
            current.push(word);
        }
    }

    if !current.is_empty() {
        let last_end = words.last().map(|w| w.end).unwrap_or(line_start);
        push_line(&mut cues, &current, line_start, last_end);
    }

    apply_min_duration(&mut cues, options.min_line_duration);
    cues
}

fn push_line(cues: &mut Vec<Cue>, words: &[&str], start_sec: TimeSec, end_sec: TimeSec) {
    let id = (cues.len() + 1).to_string();
    if let Some(cue) = Cue::timed(&id, start_sec, end_sec, &words.join(" ")) {
        cues.push(cue);
    }
}

/// Floors each line's end at `start + min_sec`, stopping short of the next
/// line's start so lines never overlap. Ends are only ever extended.
fn apply_min_duration(cues: &mut [Cue], min_sec: TimeSec) {
    if min_sec <= 0.0 {
        return;
    }

    for i in 0..cues.len() {
        let (start, end) = match (cues[i].start_time, cues[i].end_time) {
            (Some(start), Some(end)) => (start, end),
            _ => continue,
        };

        let next_start = cues
            .get(i + 1)
            .and_then(|c| c.start_time)
            .unwrap_or(f64::INFINITY);

        let floored = (start + min_sec).min(next_start);
        if floored > end {
            cues[i].end_time = Some(floored);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
