//! TF-IDF scoring
//!
//! A sentence scores the sum of its TF-IDF weights: sentences dense in terms
//! that are frequent locally but rare across the document rank highest.

use crate::error::Result;
use crate::pipeline::traits::Scorer;
use crate::types::{Algorithm, Notice, ScoreVector, Sentence};
use crate::vector::{VectorSpaceBuilder, DEFAULT_MAX_FEATURES};

/// Sum-of-weights TF-IDF scorer
#[derive(Debug, Clone)]
pub struct TfidfScorer {
    builder: VectorSpaceBuilder,
}

impl Default for TfidfScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfScorer {
    /// Scorer with the default vocabulary cap
    pub fn new() -> Self {
        Self::with_max_features(Some(DEFAULT_MAX_FEATURES))
    }

    /// Scorer with a custom vocabulary cap (None = full vocabulary)
    pub fn with_max_features(max_features: Option<usize>) -> Self {
        Self {
            builder: VectorSpaceBuilder::new().with_max_features(max_features),
        }
    }
}

impl Scorer for TfidfScorer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Tfidf
    }

    fn score(&self, sentences: &[Sentence]) -> Result<ScoreVector> {
        let space = self.builder.build(sentences);
        log_debug!(
            "tf-idf space: {} sentences, {} terms",
            space.len(),
            space.vocabulary_len()
        );

        let scores = space.vectors.iter().map(|v| v.weight_sum()).collect();
        let mut result = ScoreVector::new(Algorithm::Tfidf, scores);
        if space.is_degenerate() {
            result = result.with_notice(Notice::DegenerateVocabulary {
                terms: space.vocabulary_len(),
            });
        }
        Ok(result)
    }
}
