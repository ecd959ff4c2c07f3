//! CueFlow Error Definitions
//!
//! Error types for the engine's true failure boundaries: file output, word
//! timing decode, and the track fetch boundary. Parsing itself never fails;
//! malformed subtitle input degrades to partial or empty results instead.

use thiserror::Error;

use super::TrackId;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    #[error("Fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Engine result type
pub type EngineResult<T> = Result<T, EngineError>;
