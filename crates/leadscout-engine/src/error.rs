use thiserror::Error;

/// Errors produced while constructing the engine.
///
/// Per-profile evaluation is total and has no failure modes; only
/// construction (matcher compilation) can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("keyword matcher compilation failed: {0}")]
    Matcher(#[from] regex::Error),
}
