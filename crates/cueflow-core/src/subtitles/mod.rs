//! Subtitle Parsing Module
//!
//! Normalizes raw timed-text assets into the engine's cue model:
//! - Cue and parsed-result data structures
//! - SRT, WebVTT, and plain-text parsing
//! - SRT/VTT export
//! - Format detection and dispatch
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Subtitle Parsing                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  models.rs    - Cue, ParsedResult, SubtitleFormat               │
//! │  timecode.rs  - timestamp token <-> seconds                     │
//! │  block.rs     - shared block splitting and cue assembly         │
//! │  srt.rs       - SRT (SubRip) parsing and export                 │
//! │  vtt.rs       - WebVTT parsing and export                       │
//! │  plain.rs     - untimed plain-text parsing                      │
//! │  detect.rs    - format sniffing and the parse entry point       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every parser is a total function: arbitrary input, including the empty
//! string, yields a well-formed result. Malformed blocks are dropped and
//! malformed timestamps degrade to zero seconds; neither aborts a parse.

mod block;
mod detect;
mod models;
mod plain;
mod srt;
mod timecode;
mod vtt;

// Re-export models
pub use models::{Cue, ParsedResult, SubtitleFormat};

// Re-export format functions
pub use detect::{detect_format, parse_as, parse_subtitles};
pub use plain::parse_plain;
pub use srt::{parse_srt, write_srt};
pub use timecode::{
    format_clock, format_srt_timestamp, format_vtt_timestamp, parse_timestamp,
};
pub use vtt::{parse_vtt, write_vtt};
