//! Core data model and configuration for the Leadscout lead scoring pipeline.
//!
//! Defines the input records ([`Profile`], [`Post`]), the derived value types
//! produced by the engine ([`CadenceMetrics`], [`StruggleFindings`],
//! [`ScoreResult`]), the ranked output record ([`Lead`]), and the
//! [`ScoringConfig`] tree loaded from YAML and validated at startup.

pub mod config;
pub mod error;
pub mod lead;
pub mod profile;
pub mod types;

pub use config::{
    load_config, validate_config, BonusWeights, FollowerPointsRange, FollowerTierRange,
    GradeRange, KeywordLists, PersonaWeights, ScoringConfig, StruggleWeights, LEAD_FIELDS,
    SORTABLE_FIELDS,
};
pub use error::ConfigError;
pub use lead::Lead;
pub use profile::{Post, Profile};
pub use types::{
    CadenceMetrics, Persona, PostingPattern, ScoreResult, StruggleFindings, StruggleSample,
    INSUFFICIENT_DATA_DAYS, INSUFFICIENT_DATA_GAP,
};
