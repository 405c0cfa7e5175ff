//! Posting-pattern detection from cadence metrics.

use leadscout_core::{CadenceMetrics, PostingPattern};

/// Map cadence metrics to a posting-pattern label.
///
/// Evaluated as an ordered decision list; the first matching rule wins and
/// the fallback is `dormant`. Staleness (rule 1) always overrides: an
/// account silent for more than 30 days is dormant no matter how regular
/// its history looks. Rules 2-5 characterize accounts that post enough to
/// be reachable but inconsistently enough to need help.
#[must_use]
pub fn detect_pattern(metrics: &CadenceMetrics) -> PostingPattern {
    let CadenceMetrics {
        avg_gap_days: avg_gap,
        gap_variance: variance,
        days_since_last_post: days_since,
    } = *metrics;

    if days_since > 30 {
        return PostingPattern::Dormant;
    }
    if avg_gap <= 2.0 && variance <= 1.0 {
        return PostingPattern::DailyPoster;
    }
    if variance >= 4.0 && (2.0..=7.0).contains(&avg_gap) && days_since <= 7 {
        return PostingPattern::ErraticActive;
    }
    if variance <= 3.0 && (7.0..=14.0).contains(&avg_gap) && days_since <= 14 {
        return PostingPattern::SparseConsistent;
    }
    if days_since <= 7 && avg_gap > 14.0 && variance > 10.0 {
        return PostingPattern::ComebackKid;
    }

    PostingPattern::Dormant
}
