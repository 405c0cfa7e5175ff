//! Pre-compiled whole-word keyword matcher shared across all profile
//! evaluations.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

/// A set of phrases compiled into one case-insensitive, Unicode-aware,
/// whole-word regular expression.
///
/// Immutable after construction and safe to share read-only across
/// profiles. An empty phrase list builds a matcher that never matches.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Option<Regex>,
}

impl PatternMatcher {
    /// Compile a matcher from a list of phrases. Empty phrases are ignored.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the combined pattern fails to compile.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Result<Self, regex::Error> {
        let alternation: Vec<String> = phrases
            .iter()
            .map(AsRef::as_ref)
            .filter(|p| !p.is_empty())
            .map(regex::escape)
            .collect();

        if alternation.is_empty() {
            return Ok(Self { regex: None });
        }

        let pattern = format!(r"\b(?:{})\b", alternation.join("|"));
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { regex: Some(regex) })
    }

    /// Whether any phrase occurs in `text` as a whole word.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }

    /// All distinct phrases matched in `text`, lower-cased.
    #[must_use]
    pub fn find_all(&self, text: &str) -> BTreeSet<String> {
        match &self.regex {
            Some(regex) => regex
                .find_iter(text)
                .map(|m| m.as_str().to_lowercase())
                .collect(),
            None => BTreeSet::new(),
        }
    }
}
