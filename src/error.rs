//! Error types
//!
//! Only genuine failures live here. Conditions that degrade gracefully
//! (short input, degenerate vocabulary, iteration cap) are reported as
//! [`crate::types::Notice`] values on the result instead.

use thiserror::Error;

use crate::types::Algorithm;

/// Failure of a single summarization call.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// A scorer produced unusable output.
    #[error("summarization failed: {reason}")]
    Scoring { algorithm: Algorithm, reason: String },

    /// The external text generator failed.
    #[error("external summarizer failed: {0}")]
    ExternalService(#[from] GenerationError),

    /// The `llm` path was requested but no generator is attached.
    #[error("external summarizer unavailable: no text generator configured")]
    GeneratorUnavailable,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummaryError {
    pub(crate) fn scoring(algorithm: Algorithm, reason: impl Into<String>) -> Self {
        Self::Scoring {
            algorithm,
            reason: reason.into(),
        }
    }

    /// Whether the failure came from the external collaborator rather than
    /// the deterministic core.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::GeneratorUnavailable)
    }
}

/// Failure reported by a [`crate::TextGenerator`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("generator returned an empty response")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_message() {
        let err = SummaryError::scoring(Algorithm::Tfidf, "score vector has 2 entries for 3 sentences");
        assert_eq!(
            err.to_string(),
            "summarization failed: score vector has 2 entries for 3 sentences"
        );
        assert!(!err.is_external());
    }

    #[test]
    fn test_generation_error_converts() {
        let err: SummaryError = GenerationError::Quota("daily limit".into()).into();
        assert!(err.is_external());
        assert_eq!(
            err.to_string(),
            "external summarizer failed: quota exceeded: daily limit"
        );
    }
}
