//! TextRank scoring
//!
//! Builds a cosine-similarity graph over full-vocabulary TF-IDF vectors and
//! ranks sentences with undamped propagation: a sentence is important when it
//! is similar to other important sentences.

use crate::error::{Result, SummaryError};
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::pagerank::UndampedRank;
use crate::pipeline::traits::Scorer;
use crate::types::{Algorithm, Notice, ScoreVector, Sentence};
use crate::vector::VectorSpaceBuilder;

/// Graph-based sentence scorer
#[derive(Debug, Clone, Default)]
pub struct TextRankScorer {
    builder: VectorSpaceBuilder,
    ranker: UndampedRank,
}

impl TextRankScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round limit
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.ranker = self.ranker.with_max_iterations(max_iterations);
        self
    }

    /// Set the closeness tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.ranker = self.ranker.with_tolerance(tolerance);
        self
    }
}

impl Scorer for TextRankScorer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TextRank
    }

    fn score(&self, sentences: &[Sentence]) -> Result<ScoreVector> {
        let space = self.builder.build(sentences);
        let matrix = SimilarityMatrix::from_space(&space);
        let graph = CsrGraph::from_similarity(&matrix);
        log_debug!(
            "sentence graph: {} nodes, {} edges, {} isolated",
            graph.num_nodes,
            graph.num_edges(),
            graph.isolated_nodes().len()
        );

        let rank = self.ranker.run(&graph);
        if rank.scores.len() != sentences.len() {
            return Err(SummaryError::scoring(
                Algorithm::TextRank,
                format!(
                    "rank produced {} scores for {} sentences",
                    rank.scores.len(),
                    sentences.len()
                ),
            ));
        }

        let mut result = ScoreVector::new(Algorithm::TextRank, rank.scores)
            .with_convergence(rank.iterations, rank.converged);
        if space.is_degenerate() {
            result = result.with_notice(Notice::DegenerateVocabulary {
                terms: space.vocabulary_len(),
            });
        }
        if !rank.converged {
            log_debug!(
                "rank iteration stopped at cap after {} rounds (delta {:e})",
                rank.iterations,
                rank.delta
            );
            result = result.with_notice(Notice::IterationCapReached {
                iterations: rank.iterations,
                delta: rank.delta,
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, tokens: &[&str]) -> Sentence {
        Sentence::new(
            index,
            tokens.join(" "),
            tokens.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_no_shared_vocabulary_is_uniform() {
        let sentences = vec![
            sentence(0, &["magma", "lava"]),
            sentence(1, &["galaxy", "nebula"]),
        ];
        let scores = TextRankScorer::new().score(&sentences).unwrap();

        assert!((scores.scores[0] - scores.scores[1]).abs() < 1e-12);
        assert!((scores.scores[0] - 0.5).abs() < 1e-12);
        assert_eq!(scores.converged, Some(true));
        assert!(scores.notices.is_empty());
    }

    #[test]
    fn test_central_sentence_wins() {
        let sentences = vec![
            sentence(0, &["galaxy", "comet"]),
            sentence(1, &["magma", "lava", "basalt"]),
            sentence(2, &["magma", "quasar"]),
            sentence(3, &["lava", "nebula"]),
            sentence(4, &["basalt", "pulsar"]),
        ];
        let scores = TextRankScorer::new().score(&sentences).unwrap();

        assert_eq!(scores.ranked_indices()[0], 1);
        let sum: f64 = scores.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_iteration_cap_notice() {
        let sentences = vec![
            sentence(0, &["magma", "lava"]),
            sentence(1, &["lava", "basalt"]),
            sentence(2, &["basalt", "magma"]),
        ];
        let scores = TextRankScorer::new()
            .with_max_iterations(1)
            .with_tolerance(0.0)
            .score(&sentences)
            .unwrap();

        assert_eq!(scores.iterations, Some(1));
        assert_eq!(scores.converged, Some(false));
        assert!(matches!(
            scores.notices.as_slice(),
            [Notice::IterationCapReached { iterations: 1, .. }]
        ));
    }

    #[test]
    fn test_degenerate_vocabulary_is_uniform() {
        let sentences = vec![
            sentence(0, &["lava"]),
            sentence(1, &["lava"]),
            sentence(2, &[]),
        ];
        let scores = TextRankScorer::new().score(&sentences).unwrap();

        for &s in &scores.scores {
            assert!((s - 1.0 / 3.0).abs() < 1e-12);
        }
        assert!(scores
            .notices
            .contains(&Notice::DegenerateVocabulary { terms: 1 }));
    }

    #[test]
    fn test_deterministic() {
        let sentences = vec![
            sentence(0, &["magma", "lava", "basalt"]),
            sentence(1, &["lava", "granite"]),
            sentence(2, &["quartz", "magma"]),
        ];
        let scorer = TextRankScorer::new();
        assert_eq!(scorer.score(&sentences).unwrap(), scorer.score(&sentences).unwrap());
    }
}
