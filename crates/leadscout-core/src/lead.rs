//! The ranked output record produced for each qualified profile.

use serde::{Deserialize, Serialize};

use crate::types::{Persona, PostingPattern, StruggleSample};

/// A qualified, scored lead. Field order follows the output contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub handle: String,
    pub account_type: Persona,
    pub smm_need_score: u32,
    pub score_grade: String,
    pub score_reasons: Vec<String>,
    pub posting_pattern: PostingPattern,
    pub follower_count: u64,
    pub follower_tier: String,
    pub days_since_last_post: i64,
    /// Tier-1 keywords followed by tier-2 keywords, each set in sorted order.
    pub struggle_keywords_found: Vec<String>,
    /// Up to 3 evidentiary post excerpts.
    pub struggle_tweets: Vec<StruggleSample>,
    pub bio: String,
    pub profile_url: String,
}
