//! Posting-cadence statistics from noisy timestamp data.

use chrono::{DateTime, NaiveDateTime, Utc};
use leadscout_core::{CadenceMetrics, Post};

/// Parse a post timestamp.
///
/// Accepts RFC 3339 (including `Z` offsets); falls back to a naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` form interpreted as UTC, since some sources
/// drop the offset. Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Compute cadence metrics over a profile's posts.
///
/// Posts with unparseable timestamps are dropped. With fewer than 2
/// parseable timestamps the sentinel metrics are returned. Gaps are whole
/// days between consecutive timestamps sorted most-recent-first; duplicate
/// timestamps produce valid zero-day gaps. `now` is injected by the caller
/// so a batch run is deterministic.
#[must_use]
pub fn cadence_metrics(posts: &[Post], now: DateTime<Utc>) -> CadenceMetrics {
    let mut timestamps: Vec<DateTime<Utc>> = posts
        .iter()
        .filter_map(|p| parse_timestamp(&p.timestamp))
        .collect();

    if timestamps.len() < 2 {
        return CadenceMetrics::insufficient();
    }

    timestamps.sort_unstable_by(|a, b| b.cmp(a));

    let gaps: Vec<i64> = timestamps
        .windows(2)
        .map(|pair| (pair[0] - pair[1]).num_days())
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let avg_gap_days = gaps.iter().sum::<i64>() as f64 / gaps.len() as f64;

    let gap_variance = if gaps.len() > 1 {
        #[allow(clippy::cast_precision_loss)]
        let variance = gaps
            .iter()
            .map(|&gap| {
                let deviation = gap as f64 - avg_gap_days;
                deviation * deviation
            })
            .sum::<f64>()
            / gaps.len() as f64;
        variance
    } else {
        0.0
    };

    // Future-dated posts would yield a negative recency; floor at zero.
    let days_since_last_post = (now - timestamps[0]).num_days().max(0);

    CadenceMetrics {
        avg_gap_days,
        gap_variance,
        days_since_last_post,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap()
    }

    fn post_days_ago(now: DateTime<Utc>, days: i64) -> Post {
        Post {
            text: String::new(),
            timestamp: (now - Duration::days(days)).to_rfc3339(),
        }
    }

    #[test]
    fn parses_rfc3339_with_z_suffix() {
        let parsed = parse_timestamp("2025-06-20T09:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 20, 9, 30, 0).unwrap());
    }

    #[test]
    fn parses_offset_timestamps_to_utc() {
        let parsed = parse_timestamp("2025-06-20T11:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 20, 9, 30, 0).unwrap());
    }

    #[test]
    fn parses_naive_timestamps_as_utc() {
        let parsed = parse_timestamp("2025-06-20T09:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 20, 9, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_timestamp("yesterday-ish").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn empty_posts_yield_sentinel() {
        assert_eq!(cadence_metrics(&[], fixed_now()), CadenceMetrics::insufficient());
    }

    #[test]
    fn single_post_yields_sentinel() {
        let now = fixed_now();
        let posts = vec![post_days_ago(now, 1)];
        assert_eq!(cadence_metrics(&posts, now), CadenceMetrics::insufficient());
    }

    #[test]
    fn sentinel_when_only_one_timestamp_parses() {
        let now = fixed_now();
        let posts = vec![
            post_days_ago(now, 1),
            Post {
                text: "undated".to_string(),
                timestamp: "not a date".to_string(),
            },
        ];
        assert_eq!(cadence_metrics(&posts, now), CadenceMetrics::insufficient());
    }

    #[test]
    fn unparseable_posts_are_dropped_not_fatal() {
        let now = fixed_now();
        let posts = vec![
            post_days_ago(now, 1),
            Post {
                text: String::new(),
                timestamp: "corrupt".to_string(),
            },
            post_days_ago(now, 3),
        ];
        let metrics = cadence_metrics(&posts, now);
        assert_eq!(metrics.avg_gap_days, 2.0);
        assert_eq!(metrics.days_since_last_post, 1);
    }

    #[test]
    fn gaps_computed_over_descending_order_regardless_of_input_order() {
        let now = fixed_now();
        // Shuffled input: 10, 1, 5 days ago.
        let posts = vec![
            post_days_ago(now, 10),
            post_days_ago(now, 1),
            post_days_ago(now, 5),
        ];
        let metrics = cadence_metrics(&posts, now);
        // Gaps: (1→5) = 4, (5→10) = 5.
        assert_eq!(metrics.avg_gap_days, 4.5);
        assert_eq!(metrics.gap_variance, 0.25);
        assert_eq!(metrics.days_since_last_post, 1);
    }

    #[test]
    fn single_gap_has_zero_variance() {
        let now = fixed_now();
        let posts = vec![post_days_ago(now, 2), post_days_ago(now, 9)];
        let metrics = cadence_metrics(&posts, now);
        assert_eq!(metrics.avg_gap_days, 7.0);
        assert_eq!(metrics.gap_variance, 0.0);
    }

    #[test]
    fn duplicate_timestamps_produce_zero_gaps() {
        let now = fixed_now();
        let posts = vec![
            post_days_ago(now, 3),
            post_days_ago(now, 3),
            post_days_ago(now, 7),
        ];
        let metrics = cadence_metrics(&posts, now);
        // Gaps: 0 and 4.
        assert_eq!(metrics.avg_gap_days, 2.0);
        assert_eq!(metrics.gap_variance, 4.0);
    }

    #[test]
    fn future_posts_floor_recency_at_zero() {
        let now = fixed_now();
        let posts = vec![
            Post {
                text: String::new(),
                timestamp: (now + Duration::days(2)).to_rfc3339(),
            },
            post_days_ago(now, 4),
        ];
        let metrics = cadence_metrics(&posts, now);
        assert_eq!(metrics.days_since_last_post, 0);
    }

    #[test]
    fn population_variance_matches_hand_computation() {
        let now = fixed_now();
        // 2, 5, 10, 12, 18 days ago → gaps [3, 5, 2, 6], mean 4, variance 2.5.
        let posts: Vec<Post> = [2, 5, 10, 12, 18]
            .iter()
            .map(|&d| post_days_ago(now, d))
            .collect();
        let metrics = cadence_metrics(&posts, now);
        assert_eq!(metrics.avg_gap_days, 4.0);
        assert_eq!(metrics.gap_variance, 2.5);
        assert_eq!(metrics.days_since_last_post, 2);
    }
}
