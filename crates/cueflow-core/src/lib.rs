//! CueFlow Core Engine
//!
//! Subtitle/lyric parsing and time-synchronized cue resolution for media
//! playback. Raw timed-text assets (SRT, WebVTT, plain text) are normalized
//! into a single cue model, and the active cue is resolved for an arbitrary,
//! possibly discontinuous, playback time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        CueFlow Engine                            │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  subtitles/  - cue model, SRT/VTT/plain parsers, writers,        │
//! │                format detection and dispatch                     │
//! │  sync/       - active-cue resolution, context windows,           │
//! │                playhead tracking for the display layer           │
//! │  segment     - word-timing stream -> subtitle line segmentation  │
//! │  lyrics      - player-facing lyrics JSON document                │
//! │  tracks      - track catalog, async fetch boundary, stale-load   │
//! │                discard                                           │
//! │  fs          - crash-tolerant file output for exports            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing and resolution are pure synchronous computations; the only async
//! surface is the [`tracks::SubtitleSource`] fetch boundary implemented by
//! the embedding application.

pub mod fs;
pub mod lyrics;
pub mod segment;
pub mod subtitles;
pub mod sync;
pub mod tracks;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
