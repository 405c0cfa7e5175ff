//! Value types derived by the engine for each profile.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Persona of an account: an individual builder or an organizational account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    Founder,
    Project,
    Unknown,
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Persona::Founder => write!(f, "Founder"),
            Persona::Project => write!(f, "Project"),
            Persona::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Discrete label summarizing the shape of an account's posting cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingPattern {
    ErraticActive,
    SparseConsistent,
    ComebackKid,
    DailyPoster,
    Dormant,
}

impl std::fmt::Display for PostingPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostingPattern::ErraticActive => write!(f, "erratic_active"),
            PostingPattern::SparseConsistent => write!(f, "sparse_consistent"),
            PostingPattern::ComebackKid => write!(f, "comeback_kid"),
            PostingPattern::DailyPoster => write!(f, "daily_poster"),
            PostingPattern::Dormant => write!(f, "dormant"),
        }
    }
}

/// Sentinel for `days_since_last_post` when fewer than 2 posts have
/// parseable timestamps. Distinct from any genuine recency value.
pub const INSUFFICIENT_DATA_DAYS: i64 = 9999;

/// Sentinel for `avg_gap_days` under the same insufficient-data condition.
pub const INSUFFICIENT_DATA_GAP: f64 = 9999.0;

/// Temporal statistics over a profile's post timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CadenceMetrics {
    /// Arithmetic mean of whole-day gaps between consecutive posts, or
    /// [`INSUFFICIENT_DATA_GAP`].
    pub avg_gap_days: f64,
    /// Population variance of the gaps. 0 when only one gap exists.
    pub gap_variance: f64,
    /// Whole days between now and the most recent post, floored at 0, or
    /// [`INSUFFICIENT_DATA_DAYS`].
    pub days_since_last_post: i64,
}

impl CadenceMetrics {
    /// The sentinel triple returned when fewer than 2 timestamps parse.
    #[must_use]
    pub fn insufficient() -> Self {
        Self {
            avg_gap_days: INSUFFICIENT_DATA_GAP,
            gap_variance: 0.0,
            days_since_last_post: INSUFFICIENT_DATA_DAYS,
        }
    }
}

/// Tiered "need-help" language found in a profile's recent posts.
///
/// Keyword sets are ordered (`BTreeSet`) so repeated runs over identical
/// input serialize byte-identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StruggleFindings {
    /// Normalized tier-1 (direct admission) keywords matched.
    pub tier1_keywords: BTreeSet<String>,
    /// Normalized tier-2 (indirect frustration) keywords matched.
    pub tier2_keywords: BTreeSet<String>,
    /// Up to 3 sample posts in scan order, as evidence.
    pub samples: Vec<StruggleSample>,
}

/// One evidentiary post excerpt, truncated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StruggleSample {
    /// Post text, truncated to 100 characters plus an ellipsis marker.
    pub text: String,
    /// Signal tier the post matched: 1 (direct) or 2 (indirect).
    pub tier: u8,
}

/// The scored outcome for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Need score clamped to `[0, 100]`.
    pub smm_need_score: u32,
    /// One of the configured grade labels.
    pub score_grade: String,
    /// Human-readable reasons, in computation order.
    pub score_reasons: Vec<String>,
}
