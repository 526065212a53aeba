//! Stage trait definitions for the pipeline.
//!
//! The scoring stage is the only pluggable boundary: normalization and
//! selection are shared by every extractive algorithm, while the scorer decides
//! what "important" means.

use crate::error::Result;
use crate::types::{Algorithm, ScoreVector, Sentence};

// ============================================================================
// Scorer: per-sentence importance
// ============================================================================

/// Assigns an importance score to every sentence of a document.
///
/// # Contract
///
/// - **Input**: the document's sentences, in order, indexed `0..n`.
/// - **Output**: a [`ScoreVector`] with exactly one finite score per sentence;
///   `scores[i]` belongs to `sentences[i]`. Higher means more important.
/// - **Pure**: the same sentences always produce the same scores.
///
/// Scorers are never called for documents that fit entirely in the summary;
/// the pipeline short-circuits those before scoring.
pub trait Scorer {
    /// The algorithm this scorer implements.
    fn algorithm(&self) -> Algorithm;

    /// Score every sentence.
    fn score(&self, sentences: &[Sentence]) -> Result<ScoreVector>;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn score(&self, sentences: &[Sentence]) -> Result<ScoreVector> {
        (**self).score(sentences)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn score(&self, sentences: &[Sentence]) -> Result<ScoreVector> {
        (**self).score(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{FrequencyScorer, TextRankScorer, TfidfScorer};

    fn sample_sentences() -> Vec<Sentence> {
        vec![
            Sentence::new(0, "Magma feeds volcanoes.", vec!["magma".into(), "volcanoes".into()]),
            Sentence::new(1, "Lava becomes basalt.", vec!["lava".into(), "basalt".into()]),
            Sentence::new(2, "Volcanoes release lava.", vec!["volcanoes".into(), "lava".into()]),
        ]
    }

    #[test]
    fn test_scorers_as_trait_objects() {
        let scorers: Vec<Box<dyn Scorer>> = vec![
            Box::new(FrequencyScorer::new()),
            Box::new(TfidfScorer::new()),
            Box::new(TextRankScorer::new()),
        ];
        let sentences = sample_sentences();

        for scorer in &scorers {
            let scores = scorer.score(&sentences).unwrap();
            assert_eq!(scores.len(), sentences.len());
            assert_eq!(scores.algorithm, scorer.algorithm());
            assert!(scores.scores.iter().all(|s| s.is_finite()));
        }
    }

    /// A custom scorer plugs into the same interface.
    #[test]
    fn test_custom_scorer() {
        struct LeadScorer;

        impl Scorer for LeadScorer {
            fn algorithm(&self) -> Algorithm {
                Algorithm::Frequency
            }

            fn score(&self, sentences: &[Sentence]) -> Result<ScoreVector> {
                let scores = sentences
                    .iter()
                    .map(|s| 1.0 / (s.index as f64 + 1.0))
                    .collect();
                Ok(ScoreVector::new(self.algorithm(), scores))
            }
        }

        let scores = LeadScorer.score(&sample_sentences()).unwrap();
        assert_eq!(scores.ranked_indices(), vec![0, 1, 2]);

        let by_ref: &dyn Scorer = &LeadScorer;
        assert_eq!(by_ref.score(&sample_sentences()).unwrap(), scores);
    }
}
