//! Follower-count range lookups with first-match semantics.

use leadscout_core::{FollowerPointsRange, FollowerTierRange};

/// Label returned when no configured range contains the count.
pub const FALLBACK_TIER: &str = "N/A";

/// Resolve a follower count to its named tier.
///
/// Ranges are evaluated in declaration order with inclusive boundaries;
/// overlapping ranges resolve to the first match.
#[must_use]
pub fn resolve_tier<'a>(count: u64, ranges: &'a [FollowerTierRange]) -> &'a str {
    ranges
        .iter()
        .find(|r| r.min <= count && count <= r.max)
        .map_or(FALLBACK_TIER, |r| r.label.as_str())
}

/// Points awarded for a follower count under a persona's scoring ranges,
/// or `None` when no range contains it. First match in declaration order.
#[must_use]
pub fn resolve_points(count: u64, ranges: &[FollowerPointsRange]) -> Option<u32> {
    ranges
        .iter()
        .find(|r| r.min <= count && count <= r.max)
        .map(|r| r.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers() -> Vec<FollowerTierRange> {
        vec![
            FollowerTierRange {
                min: 150,
                max: 499,
                label: "Tier 0".to_string(),
            },
            FollowerTierRange {
                min: 500,
                max: 2000,
                label: "Tier 1".to_string(),
            },
            FollowerTierRange {
                min: 2001,
                max: 5000,
                label: "Tier 2".to_string(),
            },
        ]
    }

    #[test]
    fn boundaries_are_inclusive_on_both_ends() {
        let t = tiers();
        assert_eq!(resolve_tier(150, &t), "Tier 0");
        assert_eq!(resolve_tier(499, &t), "Tier 0");
        assert_eq!(resolve_tier(500, &t), "Tier 1");
        assert_eq!(resolve_tier(5000, &t), "Tier 2");
    }

    #[test]
    fn out_of_range_counts_fall_back() {
        let t = tiers();
        assert_eq!(resolve_tier(0, &t), FALLBACK_TIER);
        assert_eq!(resolve_tier(149, &t), FALLBACK_TIER);
        assert_eq!(resolve_tier(5001, &t), FALLBACK_TIER);
    }

    #[test]
    fn overlapping_ranges_resolve_by_declaration_order() {
        let overlapping = vec![
            FollowerTierRange {
                min: 100,
                max: 1000,
                label: "first".to_string(),
            },
            FollowerTierRange {
                min: 500,
                max: 2000,
                label: "second".to_string(),
            },
        ];
        assert_eq!(resolve_tier(700, &overlapping), "first");
        assert_eq!(resolve_tier(1500, &overlapping), "second");
    }

    #[test]
    fn points_lookup_uses_declaration_order_not_numeric_order() {
        // The sweet-spot range is declared first even though its bounds sit
        // between the others, mirroring how weight tables are written.
        let ranges = vec![
            FollowerPointsRange {
                min: 500,
                max: 2000,
                points: 20,
            },
            FollowerPointsRange {
                min: 2001,
                max: 5000,
                points: 15,
            },
            FollowerPointsRange {
                min: 150,
                max: 499,
                points: 10,
            },
        ];
        assert_eq!(resolve_points(800, &ranges), Some(20));
        assert_eq!(resolve_points(300, &ranges), Some(10));
        assert_eq!(resolve_points(3000, &ranges), Some(15));
        assert_eq!(resolve_points(100, &ranges), None);
    }
}
