//! Persona classification from biography text.

use leadscout_core::{KeywordLists, Persona};

use crate::error::EngineError;
use crate::matcher::PatternMatcher;

/// Assigns a persona label to a profile from its bio.
///
/// The decision order is load-bearing: explicit founder/project keyword
/// matches take precedence over the pronoun heuristics, and founder
/// keywords are checked before project keywords when a bio contains both.
#[derive(Debug, Clone)]
pub struct AccountClassifier {
    founder_bio: PatternMatcher,
    project_bio: PatternMatcher,
    founder_heuristics: Vec<String>,
    project_heuristics: Vec<String>,
}

impl AccountClassifier {
    /// Build a classifier from the configured keyword lists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Matcher`] if a keyword matcher fails to
    /// compile.
    pub fn new(keywords: &KeywordLists) -> Result<Self, EngineError> {
        Ok(Self {
            founder_bio: PatternMatcher::new(&keywords.founder_bio)?,
            project_bio: PatternMatcher::new(&keywords.project_bio)?,
            founder_heuristics: lowercase_all(&keywords.founder_heuristics),
            project_heuristics: lowercase_all(&keywords.project_heuristics),
        })
    }

    /// Classify a bio. Absent or empty bios are `Unknown`.
    #[must_use]
    pub fn classify(&self, bio: Option<&str>) -> Persona {
        let Some(bio) = bio else {
            return Persona::Unknown;
        };
        if bio.is_empty() {
            return Persona::Unknown;
        }

        if self.founder_bio.is_match(bio) {
            return Persona::Founder;
        }
        if self.project_bio.is_match(bio) {
            return Persona::Project;
        }

        // Heuristics are plain substring checks, not whole-word matches.
        let bio_lower = bio.to_lowercase();
        if self.founder_heuristics.iter().any(|p| bio_lower.contains(p)) {
            return Persona::Founder;
        }
        if self.project_heuristics.iter().any(|p| bio_lower.contains(p)) {
            return Persona::Project;
        }

        Persona::Unknown
    }
}

fn lowercase_all(phrases: &[String]) -> Vec<String> {
    phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.to_lowercase())
        .collect()
}
