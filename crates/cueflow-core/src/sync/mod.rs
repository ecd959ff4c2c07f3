//! Playback Synchronization Module
//!
//! Resolves which cue is active for a playback time and packages the data
//! the display layer needs to follow it:
//!
//! - `resolver.rs` - stateless active-cue resolution and context windows
//! - `playhead.rs` - per-tick bookkeeping and the scrub/seek signal
//!
//! The engine never renders or scrolls. It supplies previous/current times
//! and indices; the rendering layer decides whether a transition animates.

mod playhead;
mod resolver;

pub use playhead::{PlayheadTracker, SyncUpdate, SCRUB_THRESHOLD_SEC};
pub use resolver::{context_window, resolve_active, ActiveCue, ContextWindow};
