//! CueFlow Core Type Definitions
//!
//! Fundamental aliases shared across the engine.

// =============================================================================
// ID Types
// =============================================================================

/// Cue display identifier. Advisory only: parsed from the source file when
/// present, not guaranteed unique or stable across re-parses, and never used
/// as a lookup key.
pub type CueId = String;

/// Subtitle track unique identifier (ULID)
pub type TrackId = String;

// =============================================================================
// Time Types
// =============================================================================

/// Time in seconds (floating point)
pub type TimeSec = f64;
