//! Subtitle Tracks
//!
//! The track catalog an embedding player exposes (one entry per available
//! subtitle/lyric file) and the load session that fetches track content
//! through an async capability. Rapid track switching is handled with
//! generation tickets: a fetch that completes after another load began is
//! discarded instead of clobbering the newer selection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::subtitles::{parse_subtitles, ParsedResult};
use crate::{EngineResult, TrackId};

// =============================================================================
// Track Model
// =============================================================================

/// One selectable subtitle/lyric track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleTrack {
    pub id: TrackId,
    /// Location the track content is fetched from
    pub file_url: String,
    /// Format hint passed to the parser ("srt", "vtt", "txt")
    pub format: String,
    /// Human-readable label shown in track menus
    pub label: String,
    #[serde(default)]
    pub is_default: bool,
}

impl SubtitleTrack {
    pub fn new(id: &str, file_url: &str, format: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            file_url: file_url.to_string(),
            format: format.to_string(),
            label: label.to_string(),
            is_default: false,
        }
    }

    /// Creates a track with a generated id.
    pub fn create(file_url: &str, format: &str, label: &str) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            file_url: file_url.to_string(),
            format: format.to_string(),
            label: label.to_string(),
            is_default: false,
        }
    }
}

// =============================================================================
// Track Catalog
// =============================================================================

/// The set of tracks available for one piece of media.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackCatalog {
    pub tracks: Vec<SubtitleTrack>,
}

impl TrackCatalog {
    pub fn new(tracks: Vec<SubtitleTrack>) -> Self {
        Self { tracks }
    }

    /// The track selected when nothing was chosen explicitly: the first
    /// entry flagged default, else the first entry.
    pub fn default_track(&self) -> Option<&SubtitleTrack> {
        self.tracks
            .iter()
            .find(|t| t.is_default)
            .or_else(|| self.tracks.first())
    }

    pub fn get(&self, id: &str) -> Option<&SubtitleTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl From<Vec<SubtitleTrack>> for TrackCatalog {
    fn from(tracks: Vec<SubtitleTrack>) -> Self {
        Self::new(tracks)
    }
}

// =============================================================================
// Fetch Boundary
// =============================================================================

/// Capability for retrieving track content, implemented by the embedding
/// application (HTTP client, local file reader, test stub).
#[async_trait]
pub trait SubtitleSource: Send + Sync {
    /// Fetches the raw text behind a track URL.
    async fn fetch(&self, url: &str) -> EngineResult<String>;
}

// =============================================================================
// Load Session
// =============================================================================

/// Proof of which load request a fetch response belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadTicket {
    track_id: TrackId,
    generation: u64,
}

/// Owns the currently selected track and its parsed content.
///
/// Every [`TrackSession::begin_load`] bumps the generation counter and
/// returns a ticket; only the ticket from the newest load may install or
/// clear content. Installation replaces the whole [`ParsedResult`], so a
/// consumer never observes a half-switched track.
#[derive(Debug, Default)]
pub struct TrackSession {
    active_track: Option<TrackId>,
    generation: u64,
    installed: Option<ParsedResult>,
}

impl TrackSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a track as selected and returns the ticket its fetch must
    /// present. Any ticket issued earlier becomes stale immediately.
    pub fn begin_load(&mut self, track_id: &str) -> LoadTicket {
        self.generation += 1;
        self.active_track = Some(track_id.to_string());
        LoadTicket {
            track_id: track_id.to_string(),
            generation: self.generation,
        }
    }

    /// Parses fetched content and installs it, unless the ticket is stale.
    /// Returns whether the content was installed.
    pub fn accept(&mut self, ticket: &LoadTicket, content: &str, hint: Option<&str>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale subtitle fetch for track {} (generation {} != {})",
                ticket.track_id, ticket.generation, self.generation
            );
            return false;
        }
        self.installed = Some(parse_subtitles(content, hint));
        true
    }

    /// Records a failed load by clearing any installed content, unless the
    /// ticket is stale. Returns whether the failure was applied.
    pub fn fail(&mut self, ticket: &LoadTicket) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Ignoring stale subtitle failure for track {}",
                ticket.track_id
            );
            return false;
        }
        self.installed = None;
        true
    }

    /// Fetches and installs a track end to end. Returns whether content
    /// was installed; a fetch error degrades to "no subtitles" with a log.
    pub async fn load_track(&mut self, source: &dyn SubtitleSource, track: &SubtitleTrack) -> bool {
        let ticket = self.begin_load(&track.id);
        match source.fetch(&track.file_url).await {
            Ok(content) => self.accept(&ticket, &content, Some(&track.format)),
            Err(e) => {
                warn!("Subtitle fetch failed for track {}: {}", track.id, e);
                self.fail(&ticket);
                false
            }
        }
    }

    pub fn current(&self) -> Option<&ParsedResult> {
        self.installed.as_ref()
    }

    pub fn active_track(&self) -> Option<&str> {
        self.active_track.as_deref()
    }

    /// Deselects the track and drops installed content.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.active_track = None;
        self.installed = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
