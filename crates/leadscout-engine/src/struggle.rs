//! Tiered struggle-signal detection over recent posts.

use leadscout_core::{KeywordLists, Post, StruggleFindings, StruggleSample};

use crate::error::EngineError;
use crate::matcher::PatternMatcher;

/// How many of the most recent posts are scanned for struggle language.
const RECENT_POSTS_SCANNED: usize = 10;

/// Maximum number of evidentiary samples kept per profile.
const MAX_SAMPLES: usize = 3;

/// Sample texts are truncated to this many characters.
const SAMPLE_CHAR_LIMIT: usize = 100;

/// Scans recent posts for tiered "need-help" language.
#[derive(Debug, Clone)]
pub struct StruggleDetector {
    tier1: PatternMatcher,
    tier2: PatternMatcher,
}

impl StruggleDetector {
    /// Build a detector from the configured struggle keyword lists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Matcher`] if a matcher fails to compile.
    pub fn new(keywords: &KeywordLists) -> Result<Self, EngineError> {
        Ok(Self {
            tier1: PatternMatcher::new(&keywords.tier1_struggle)?,
            tier2: PatternMatcher::new(&keywords.tier2_struggle)?,
        })
    }

    /// Scan up to the 10 most recent posts.
    ///
    /// `posts` must already be ordered most-recent-first. Tier-2 keyword
    /// matches are always recorded, but a post that matched tier 1 never
    /// also contributes a tier-2 sample, so a single post cannot count as
    /// evidence in both tiers.
    #[must_use]
    pub fn detect(&self, posts: &[Post]) -> StruggleFindings {
        let mut findings = StruggleFindings::default();

        for post in posts.iter().take(RECENT_POSTS_SCANNED) {
            if post.text.is_empty() {
                continue;
            }

            let tier1_matches = self.tier1.find_all(&post.text);
            let tier1_hit = !tier1_matches.is_empty();
            if tier1_hit {
                findings.tier1_keywords.extend(tier1_matches);
                findings.samples.push(StruggleSample {
                    text: truncate_sample(&post.text),
                    tier: 1,
                });
            }

            let tier2_matches = self.tier2.find_all(&post.text);
            if !tier2_matches.is_empty() {
                findings.tier2_keywords.extend(tier2_matches);
                if !tier1_hit {
                    findings.samples.push(StruggleSample {
                        text: truncate_sample(&post.text),
                        tier: 2,
                    });
                }
            }
        }

        findings.samples.truncate(MAX_SAMPLES);
        findings
    }
}

/// First 100 characters of `text`, with an ellipsis marker when truncated.
fn truncate_sample(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SAMPLE_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str) -> Post {
        Post {
            text: text.to_string(),
            timestamp: "2025-06-20T09:00:00Z".to_string(),
        }
    }

    fn detector() -> StruggleDetector {
        StruggleDetector::new(&KeywordLists {
            tier1_struggle: vec![
                "need to post more".to_string(),
                "bad at social media".to_string(),
            ],
            tier2_struggle: vec!["no engagement".to_string(), "no traction".to_string()],
            ..KeywordLists::default()
        })
        .unwrap()
    }

    #[test]
    fn empty_posts_yield_empty_findings() {
        let findings = detector().detect(&[]);
        assert!(findings.tier1_keywords.is_empty());
        assert!(findings.tier2_keywords.is_empty());
        assert!(findings.samples.is_empty());
    }

    #[test]
    fn tier1_match_records_keyword_and_sample() {
        let findings = detector().detect(&[post("I need to post more, honestly")]);
        assert!(findings.tier1_keywords.contains("need to post more"));
        assert_eq!(findings.samples.len(), 1);
        assert_eq!(findings.samples[0].tier, 1);
    }

    #[test]
    fn tier2_only_post_records_tier2_sample() {
        let findings = detector().detect(&[post("shipped a thing, no engagement at all")]);
        assert!(findings.tier1_keywords.is_empty());
        assert!(findings.tier2_keywords.contains("no engagement"));
        assert_eq!(findings.samples.len(), 1);
        assert_eq!(findings.samples[0].tier, 2);
    }

    #[test]
    fn tier1_post_never_contributes_tier2_sample() {
        // One post matching both tiers: tier-2 keywords are recorded but the
        // sample list carries only the tier-1 entry.
        let findings =
            detector().detect(&[post("need to post more but there's no engagement anyway")]);
        assert!(findings.tier1_keywords.contains("need to post more"));
        assert!(findings.tier2_keywords.contains("no engagement"));
        assert_eq!(findings.samples.len(), 1);
        assert_eq!(findings.samples[0].tier, 1);
    }

    #[test]
    fn only_first_ten_posts_are_scanned() {
        let mut posts: Vec<Post> = (0..10).map(|i| post(&format!("filler post {i}"))).collect();
        posts.push(post("need to post more"));
        let findings = detector().detect(&posts);
        assert!(findings.tier1_keywords.is_empty());
    }

    #[test]
    fn samples_capped_at_three_in_scan_order() {
        let posts = vec![
            post("need to post more #1"),
            post("bad at social media #2"),
            post("no engagement #3"),
            post("no traction #4"),
        ];
        let findings = detector().detect(&posts);
        assert_eq!(findings.samples.len(), 3);
        assert_eq!(findings.samples[0].tier, 1);
        assert_eq!(findings.samples[1].tier, 1);
        assert_eq!(findings.samples[2].tier, 2);
        // The fourth post's keywords are still recorded.
        assert!(findings.tier2_keywords.contains("no traction"));
    }

    #[test]
    fn long_sample_text_is_truncated_with_marker() {
        let long_tail = "x".repeat(150);
        let text = format!("need to post more {long_tail}");
        let findings = detector().detect(&[post(&text)]);
        let sample = &findings.samples[0];
        assert!(sample.text.ends_with("..."));
        assert_eq!(sample.text.chars().count(), 103);
    }

    #[test]
    fn short_sample_text_is_kept_verbatim() {
        let findings = detector().detect(&[post("need to post more")]);
        assert_eq!(findings.samples[0].text, "need to post more");
    }

    #[test]
    fn keywords_deduplicate_across_posts() {
        let posts = vec![post("need to post more"), post("NEED TO POST MORE again")];
        let findings = detector().detect(&posts);
        assert_eq!(findings.tier1_keywords.len(), 1);
        assert_eq!(findings.samples.len(), 2);
    }

    #[test]
    fn empty_text_posts_are_skipped() {
        let findings = detector().detect(&[post(""), post("no traction lately")]);
        assert_eq!(findings.samples.len(), 1);
    }
}
