//! Raw profile observations as delivered by the acquisition collaborator.

use serde::{Deserialize, Serialize};

/// One observed social-media account with its recent posts.
///
/// Every field except `handle` is tolerant of missing or null input: the
/// acquisition layer scrapes noisy pages and frequently delivers partial
/// records. A missing `bio` deserializes to `None` and classifies the
/// account as `Unknown` downstream rather than failing the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique account handle.
    pub handle: String,
    /// Free-text biography. Absent or null in many scraped records.
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub profile_url: String,
    /// Lifetime post count as reported by the source. Informational only.
    #[serde(default)]
    pub total_tweets: u64,
    /// Recent posts. Source order is not guaranteed to be chronological.
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// A single post captured from a profile's timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub text: String,
    /// ISO-8601 timestamp string. Unparseable values are dropped from
    /// cadence computation but the text is still scanned for signals.
    #[serde(default)]
    pub timestamp: String,
}
