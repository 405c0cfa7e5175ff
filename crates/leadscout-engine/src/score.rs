//! Persona-weighted need scoring and grading.

use leadscout_core::{
    GradeRange, Persona, PostingPattern, ScoreResult, ScoringConfig, StruggleFindings,
};

use crate::followers::resolve_points;

/// Everything the scorer needs about one profile, already derived.
#[derive(Debug, Clone)]
pub struct ScoreInputs<'a> {
    pub persona: Persona,
    pub pattern: PostingPattern,
    pub findings: &'a StruggleFindings,
    pub follower_count: u64,
    pub bio: &'a str,
    /// All post texts joined with spaces, for substring bonus checks.
    pub posts_text: &'a str,
    pub days_since_last_post: i64,
}

/// Compute the need score, grade, and reasons for one profile.
///
/// The four weighted dimensions (posting pattern, struggle signals,
/// follower tier, bonuses) are summed in a fixed order, then the total is
/// clamped to `[0, 100]` and the clamped value is graded. Each triggered
/// dimension appends one reason string, so the reason list reads in
/// computation order. Deterministic: identical inputs and configuration
/// produce byte-identical results.
#[must_use]
pub fn score_profile(inputs: &ScoreInputs<'_>, config: &ScoringConfig) -> ScoreResult {
    let weights = config.weights_for(inputs.persona);
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // 1. Posting pattern.
    let pattern_points = weights
        .posting_pattern
        .get(&inputs.pattern)
        .copied()
        .unwrap_or(0);
    score += pattern_points;
    if pattern_points > 0 {
        let description = config
            .pattern_descriptions
            .get(&inputs.pattern)
            .cloned()
            .unwrap_or_else(|| inputs.pattern.to_string());
        reasons.push(format!("Posting: {description} (+{pattern_points}pts)"));
    }

    // 2. Struggle signals. Tier 1 fills toward the cap first; tier 2 only
    // tops up whatever headroom remains. The cap bounds the combined
    // contribution, not each tier independently.
    let struggle = &weights.struggle_signals;
    let tier1_count = u32::try_from(inputs.findings.tier1_keywords.len()).unwrap_or(u32::MAX);
    let tier2_count = u32::try_from(inputs.findings.tier2_keywords.len()).unwrap_or(u32::MAX);

    let mut struggle_score: u32 = 0;
    if tier1_count > 0 {
        struggle_score += tier1_count
            .saturating_mul(struggle.tier1_per_keyword)
            .min(struggle.max_points);
        reasons.push(format!(
            "Found {tier1_count} high-priority struggle signal(s)"
        ));
    }
    if tier2_count > 0 && struggle_score < struggle.max_points {
        let additional = tier2_count
            .saturating_mul(struggle.tier2_per_keyword)
            .min(struggle.max_points - struggle_score);
        struggle_score += additional;
        reasons.push(format!("Found {tier2_count} struggle signal(s)"));
    }
    score += struggle_score.min(struggle.max_points);

    // 3. Follower tier, first matching range in declared order.
    if let Some(points) = resolve_points(inputs.follower_count, &weights.follower_tier) {
        score += points;
        reasons.push(format!(
            "{} followers - good range (+{points}pts)",
            group_thousands(inputs.follower_count)
        ));
    }

    // 4. Bonuses.
    let bio_lower = inputs.bio.to_lowercase();
    let posts_lower = inputs.posts_text.to_lowercase();

    if inputs.persona == Persona::Founder
        && contains_any(&bio_lower, &config.keywords.founder_identity)
    {
        let points = weights.bonus.has_founder_keywords;
        score += points;
        reasons.push(format!("Has founder/builder identity (+{points}pts)"));
    }

    if inputs.persona == Persona::Project && contains_any(&posts_lower, &config.keywords.launch) {
        let points = weights.bonus.recently_launched;
        score += points;
        reasons.push(format!("Recently launched (+{points}pts)"));
    }

    let funded = config
        .keywords
        .funding
        .iter()
        .filter(|k| !k.is_empty())
        .any(|k| {
            let needle = k.to_lowercase();
            bio_lower.contains(&needle) || posts_lower.contains(&needle)
        });
    if funded {
        let points = weights.bonus.is_funded;
        score += points;
        reasons.push(format!("Funded/raising (+{points}pts)"));
    }

    if inputs.days_since_last_post <= 3 {
        let points = weights.bonus.posted_last_3_days;
        score += points;
        reasons.push(format!("Posted in last 3 days (+{points}pts)"));
    }

    let smm_need_score = score.min(100);
    let score_grade = assign_grade(smm_need_score, &config.grades);

    ScoreResult {
        smm_need_score,
        score_grade,
        score_reasons: reasons,
    }
}

/// Map a clamped score to its grade label.
///
/// Validation guarantees the configured ranges cover `[0, 100]`, so the
/// fallback (last declared grade) signals a configuration bug if reached.
#[must_use]
pub fn assign_grade(score: u32, grades: &[GradeRange]) -> String {
    for grade in grades {
        if grade.min <= score && score <= grade.max {
            return grade.label.clone();
        }
    }
    tracing::error!(score, "score not covered by any configured grade range");
    grades
        .last()
        .map(|g| g.label.clone())
        .unwrap_or_else(|| "F".to_string())
}

/// Substring containment against a configured keyword list.
///
/// The haystack must already be lower-cased; needles are lower-cased here.
fn contains_any(haystack_lower: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .filter(|n| !n.is_empty())
        .any(|n| haystack_lower.contains(&n.to_lowercase()))
}

/// Comma-grouped decimal rendering, e.g. `1234` → `1,234`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
