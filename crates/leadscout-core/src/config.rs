//! Scoring configuration: keyword lists, persona weight tables, follower
//! tiers, grade thresholds, and output/sort preferences.
//!
//! The whole tree is loaded from one YAML document and validated up front.
//! The engine treats a loaded [`ScoringConfig`] as immutable; swapping the
//! file changes scoring behavior with no code change.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Persona, PostingPattern};

/// All output-record field names, usable in `output_columns`.
pub const LEAD_FIELDS: &[&str] = &[
    "handle",
    "account_type",
    "smm_need_score",
    "score_grade",
    "score_reasons",
    "posting_pattern",
    "follower_count",
    "follower_tier",
    "days_since_last_post",
    "struggle_keywords_found",
    "struggle_tweets",
    "bio",
    "profile_url",
];

/// Field names with a defined ordering, usable in `sort_priority`.
pub const SORTABLE_FIELDS: &[&str] = &[
    "smm_need_score",
    "follower_count",
    "days_since_last_post",
    "handle",
];

/// Root of the scoring configuration tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keywords: KeywordLists,
    /// Posting pattern → human-readable description used in reason strings.
    pub pattern_descriptions: BTreeMap<PostingPattern, String>,
    /// Weight table applied to accounts classified as `Founder`.
    pub founder: PersonaWeights,
    /// Weight table applied to `Project` and `Unknown` accounts.
    pub project: PersonaWeights,
    /// Ordered ranges for the output `follower_tier` column. First match
    /// wins; boundaries are inclusive on both ends.
    pub follower_tiers: Vec<FollowerTierRange>,
    /// Ordered, exhaustive, non-overlapping grade ranges covering `[0, 100]`.
    pub grades: Vec<GradeRange>,
    /// Minimum score a profile needs to appear in the output.
    pub min_qualifying_score: u32,
    /// Column projection and order for tabular rendering.
    pub output_columns: Vec<String>,
    /// Sort keys applied in order, all descending.
    pub sort_priority: Vec<String>,
}

impl ScoringConfig {
    /// Weight table for a persona. `Unknown` accounts score with the
    /// project table.
    #[must_use]
    pub fn weights_for(&self, persona: Persona) -> &PersonaWeights {
        match persona {
            Persona::Founder => &self.founder,
            Persona::Project | Persona::Unknown => &self.project,
        }
    }
}

/// Keyword phrase lists, grouped by the check that consumes them.
///
/// Any list may be empty; an empty list simply never matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordLists {
    /// Whole-word phrases marking an individual builder's bio.
    #[serde(default)]
    pub founder_bio: Vec<String>,
    /// Whole-word phrases marking an organizational bio.
    #[serde(default)]
    pub project_bio: Vec<String>,
    /// First-person substrings used as a fallback founder heuristic.
    #[serde(default)]
    pub founder_heuristics: Vec<String>,
    /// Plural/organizational substrings used as a fallback project heuristic.
    #[serde(default)]
    pub project_heuristics: Vec<String>,
    /// Tier-1 struggle phrases (direct admissions).
    #[serde(default)]
    pub tier1_struggle: Vec<String>,
    /// Tier-2 struggle phrases (indirect frustration).
    #[serde(default)]
    pub tier2_struggle: Vec<String>,
    /// Bio substrings that trigger the founder-identity bonus.
    #[serde(default)]
    pub founder_identity: Vec<String>,
    /// Post substrings that trigger the recently-launched bonus.
    #[serde(default)]
    pub launch: Vec<String>,
    /// Bio/post substrings that trigger the funding bonus.
    #[serde(default)]
    pub funding: Vec<String>,
}

/// Per-persona scoring weights across the four dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaWeights {
    /// Posting pattern → points. Patterns absent from the table score 0.
    pub posting_pattern: BTreeMap<PostingPattern, u32>,
    pub struggle_signals: StruggleWeights,
    /// Ordered `(min, max, points)` ranges; first match in declaration
    /// order wins, boundaries inclusive.
    pub follower_tier: Vec<FollowerPointsRange>,
    pub bonus: BonusWeights,
}

/// Weights for the struggle-signal dimension.
///
/// Tier-1 matches contribute `min(count * tier1_per_keyword, max_points)`;
/// tier-2 matches then top the total up toward `max_points`, never past it.
/// The cap applies to the combined contribution, not per tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StruggleWeights {
    pub tier1_per_keyword: u32,
    pub tier2_per_keyword: u32,
    pub max_points: u32,
}

/// Bonus points per persona. Fields irrelevant to a persona default to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BonusWeights {
    /// Founder accounts whose bio carries a founder-identity keyword.
    #[serde(default)]
    pub has_founder_keywords: u32,
    /// Project accounts whose posts carry a launch keyword.
    #[serde(default)]
    pub recently_launched: u32,
    /// Any account with funding language in bio or posts.
    #[serde(default)]
    pub is_funded: u32,
    /// Any account that posted within the last 3 days.
    #[serde(default)]
    pub posted_last_3_days: u32,
}

/// A follower-count range awarding points during scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FollowerPointsRange {
    pub min: u64,
    pub max: u64,
    pub points: u32,
}

/// A follower-count range mapped to a named tier for the output table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerTierRange {
    pub min: u64,
    pub max: u64,
    pub label: String,
}

/// An inclusive score range mapped to a grade label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRange {
    pub label: String,
    pub min: u32,
    pub max: u32,
}

/// Load and validate a scoring configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_config(path: &Path) -> Result<ScoringConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: ScoringConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration consistency.
///
/// Inconsistencies here are caller errors reported once at load time, never
/// per-profile runtime failures.
///
/// # Errors
///
/// Returns `ConfigError::Validation` describing the first problem found.
pub fn validate_config(config: &ScoringConfig) -> Result<(), ConfigError> {
    validate_grades(&config.grades)?;

    if config.min_qualifying_score > 100 {
        return Err(ConfigError::Validation(format!(
            "min_qualifying_score {} exceeds the maximum score of 100",
            config.min_qualifying_score
        )));
    }

    for range in &config.follower_tiers {
        if range.min > range.max {
            return Err(ConfigError::Validation(format!(
                "follower tier '{}' has min {} greater than max {}",
                range.label, range.min, range.max
            )));
        }
    }

    for (persona, weights) in [("founder", &config.founder), ("project", &config.project)] {
        for range in &weights.follower_tier {
            if range.min > range.max {
                return Err(ConfigError::Validation(format!(
                    "{persona} follower range has min {} greater than max {}",
                    range.min, range.max
                )));
            }
        }
    }

    if config.sort_priority.is_empty() {
        return Err(ConfigError::Validation(
            "sort_priority must name at least one key".to_string(),
        ));
    }
    for key in &config.sort_priority {
        if !SORTABLE_FIELDS.contains(&key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown sort key '{key}'; expected one of: {}",
                SORTABLE_FIELDS.join(", ")
            )));
        }
    }

    if config.output_columns.is_empty() {
        return Err(ConfigError::Validation(
            "output_columns must name at least one column".to_string(),
        ));
    }
    for column in &config.output_columns {
        if !LEAD_FIELDS.contains(&column.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown output column '{column}'"
            )));
        }
    }

    Ok(())
}

/// Grades must cover `[0, 100]` exactly: no gaps, no overlaps, no range
/// outside the score bounds, and no duplicate labels.
fn validate_grades(grades: &[GradeRange]) -> Result<(), ConfigError> {
    if grades.is_empty() {
        return Err(ConfigError::Validation(
            "at least one grade range is required".to_string(),
        ));
    }

    let mut labels = std::collections::HashSet::new();
    for grade in grades {
        if grade.min > grade.max {
            return Err(ConfigError::Validation(format!(
                "grade '{}' has min {} greater than max {}",
                grade.label, grade.min, grade.max
            )));
        }
        if grade.max > 100 {
            return Err(ConfigError::Validation(format!(
                "grade '{}' extends past the maximum score of 100",
                grade.label
            )));
        }
        if !labels.insert(grade.label.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate grade label '{}'",
                grade.label
            )));
        }
    }

    let mut sorted: Vec<&GradeRange> = grades.iter().collect();
    sorted.sort_by_key(|g| g.min);

    if sorted[0].min != 0 {
        return Err(ConfigError::Validation(
            "grade ranges must start at score 0".to_string(),
        ));
    }
    for pair in sorted.windows(2) {
        if pair[1].min != pair[0].max + 1 {
            return Err(ConfigError::Validation(format!(
                "grade ranges '{}' and '{}' must be contiguous and non-overlapping",
                pair[0].label, pair[1].label
            )));
        }
    }
    if sorted[sorted.len() - 1].max != 100 {
        return Err(ConfigError::Validation(
            "grade ranges must end at score 100".to_string(),
        ));
    }

    Ok(())
}
