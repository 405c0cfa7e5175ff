//! Batch pipeline: profiles in, ranked qualified leads out.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use leadscout_core::{Lead, Post, Profile, ScoringConfig};

use crate::cadence::{cadence_metrics, parse_timestamp};
use crate::classify::AccountClassifier;
use crate::error::EngineError;
use crate::followers::resolve_tier;
use crate::pattern::detect_pattern;
use crate::score::{score_profile, ScoreInputs};
use crate::struggle::StruggleDetector;

/// The assembled scoring engine: immutable configuration plus the matchers
/// compiled from it.
///
/// Construction compiles every keyword matcher once; evaluation shares
/// them read-only across profiles. Each profile is evaluated independently
/// of every other, so the batch could be parallelized freely; the final
/// filter and sort are the only global steps.
#[derive(Debug)]
pub struct LeadEngine {
    config: ScoringConfig,
    classifier: AccountClassifier,
    struggle: StruggleDetector,
}

impl LeadEngine {
    /// Build an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Matcher`] if a keyword matcher fails to
    /// compile.
    pub fn new(config: ScoringConfig) -> Result<Self, EngineError> {
        let classifier = AccountClassifier::new(&config.keywords)?;
        let struggle = StruggleDetector::new(&config.keywords)?;
        Ok(Self {
            config,
            classifier,
            struggle,
        })
    }

    /// The configuration this engine was built from.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Analyze a batch against the current wall clock.
    #[must_use]
    pub fn analyze(&self, profiles: &[Profile]) -> Vec<Lead> {
        self.analyze_at(profiles, Utc::now())
    }

    /// Analyze a batch against an injected `now`.
    ///
    /// Scores every profile, drops those below the qualifying minimum, and
    /// stable-sorts the rest descending by the configured key list.
    #[must_use]
    pub fn analyze_at(&self, profiles: &[Profile], now: DateTime<Utc>) -> Vec<Lead> {
        if profiles.is_empty() {
            tracing::warn!("no profiles to analyze");
            return Vec::new();
        }

        tracing::info!(profiles = profiles.len(), "analyzing raw profiles");

        let mut leads: Vec<Lead> = profiles
            .iter()
            .map(|profile| self.evaluate_profile(profile, now))
            .collect();

        let analyzed = leads.len();
        leads.retain(|lead| lead.smm_need_score >= self.config.min_qualifying_score);

        if leads.is_empty() {
            tracing::warn!(
                analyzed,
                min_score = self.config.min_qualifying_score,
                "no leads met the minimum score threshold"
            );
            return leads;
        }

        leads.sort_by(|a, b| compare_leads(a, b, &self.config.sort_priority));

        tracing::info!(analyzed, qualified = leads.len(), "analysis complete");
        for grade in &self.config.grades {
            let count = leads.iter().filter(|l| l.score_grade == grade.label).count();
            if count > 0 {
                tracing::info!(grade = %grade.label, count, "qualified leads by grade");
            }
        }

        leads
    }

    /// Run the full per-profile evaluation chain.
    fn evaluate_profile(&self, profile: &Profile, now: DateTime<Utc>) -> Lead {
        let persona = self.classifier.classify(profile.bio.as_deref());

        // Source order is not guaranteed; every downstream step assumes
        // most-recent-first.
        let posts = sort_posts_recent_first(&profile.posts);

        let metrics = cadence_metrics(&posts, now);
        let pattern = detect_pattern(&metrics);
        let findings = self.struggle.detect(&posts);

        let follower_tier =
            resolve_tier(profile.follower_count, &self.config.follower_tiers).to_string();

        let bio = profile.bio.clone().unwrap_or_default();
        let posts_text = posts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let result = score_profile(
            &ScoreInputs {
                persona,
                pattern,
                findings: &findings,
                follower_count: profile.follower_count,
                bio: &bio,
                posts_text: &posts_text,
                days_since_last_post: metrics.days_since_last_post,
            },
            &self.config,
        );

        tracing::debug!(
            handle = %profile.handle,
            account_type = %persona,
            posting_pattern = %pattern,
            score = result.smm_need_score,
            grade = %result.score_grade,
            "profile evaluated"
        );

        let struggle_keywords_found = findings
            .tier1_keywords
            .iter()
            .chain(findings.tier2_keywords.iter())
            .cloned()
            .collect();

        Lead {
            handle: profile.handle.clone(),
            account_type: persona,
            smm_need_score: result.smm_need_score,
            score_grade: result.score_grade,
            score_reasons: result.score_reasons,
            posting_pattern: pattern,
            follower_count: profile.follower_count,
            follower_tier,
            days_since_last_post: metrics.days_since_last_post,
            struggle_keywords_found,
            struggle_tweets: findings.samples,
            bio,
            profile_url: profile.profile_url.clone(),
        }
    }
}

/// Stable sort, most recent first; posts with unparseable timestamps keep
/// their relative order after the parseable ones.
fn sort_posts_recent_first(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| {
        match (parse_timestamp(&a.timestamp), parse_timestamp(&b.timestamp)) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    sorted
}

/// Compare two leads under the configured key list, all keys descending.
///
/// Unknown keys are rejected at configuration load, so they compare equal
/// here rather than erroring.
fn compare_leads(a: &Lead, b: &Lead, keys: &[String]) -> Ordering {
    for key in keys {
        let ordering = match key.as_str() {
            "smm_need_score" => a.smm_need_score.cmp(&b.smm_need_score),
            "follower_count" => a.follower_count.cmp(&b.follower_count),
            "days_since_last_post" => a.days_since_last_post.cmp(&b.days_since_last_post),
            "handle" => a.handle.cmp(&b.handle),
            _ => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering.reverse();
        }
    }
    Ordering::Equal
}
