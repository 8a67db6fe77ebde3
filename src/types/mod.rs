//! Data types for the festival countdown service
//!
//! This module contains the event record and the request payloads used
//! throughout the application.

mod event;
mod submission;

pub use event::{EventRecord, EventStatus};
pub use submission::{EventSubmission, LifecycleAction, ModerationRequest};

/// Emoji used when a submission does not pick one
pub const DEFAULT_EMOJI: &str = "🎉";

/// Default emoji for serde deserialization
pub fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}
