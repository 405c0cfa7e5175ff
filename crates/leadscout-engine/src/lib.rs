//! Lead scoring and classification engine.
//!
//! Transforms raw profile observations into ranked, qualified leads:
//! persona classification, posting-cadence statistics, posting-pattern
//! detection, tiered struggle-signal detection, persona-weighted need
//! scoring, grading, and the final filter/sort. The engine performs no I/O;
//! it is a pure batch transform over the input profiles and an immutable
//! [`leadscout_core::ScoringConfig`].

pub mod cadence;
pub mod classify;
pub mod error;
pub mod followers;
pub mod matcher;
pub mod pattern;
pub mod pipeline;
pub mod score;
pub mod struggle;

pub use cadence::{cadence_metrics, parse_timestamp};
pub use classify::AccountClassifier;
pub use error::EngineError;
pub use followers::{resolve_points, resolve_tier, FALLBACK_TIER};
pub use matcher::PatternMatcher;
pub use pattern::detect_pattern;
pub use pipeline::LeadEngine;
pub use score::{assign_grade, score_profile, ScoreInputs};
pub use struggle::StruggleDetector;
