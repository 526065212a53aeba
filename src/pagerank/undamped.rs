//! Undamped rank iteration
//!
//! A simplified PageRank without a teleport term. Every round recomputes
//!
//! ```text
//! new[i] = 1 + Σ_{j≠i} sim(i, j) · score[j]
//! ```
//!
//! and L1-normalizes the result so scores sum to 1. Iteration stops once every
//! entry moved by less than the tolerance, or after `max_iterations` rounds.
//!
//! The matrix is non-negative but the update has no damping, so convergence is
//! observed in practice rather than guaranteed. Hitting the cap is not an
//! error; the last computed scores are returned with `converged = false`.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Default round limit
pub const DEFAULT_MAX_ITERATIONS: usize = 50;
/// Default element-wise closeness tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Undamped rank propagation
#[derive(Debug, Clone)]
pub struct UndampedRank {
    /// Maximum number of rounds
    pub max_iterations: usize,
    /// Element-wise convergence tolerance
    pub tolerance: f64,
}

impl Default for UndampedRank {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl UndampedRank {
    /// Create a new UndampedRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run the iteration on a sentence graph
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            new_scores.fill(1.0);
            for (node, new_score) in new_scores.iter_mut().enumerate() {
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    *new_score += weight * scores[neighbor as usize];
                }
            }

            let sum: f64 = new_scores.iter().sum();
            if sum > 0.0 {
                for score in &mut new_scores {
                    *score /= sum;
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.tolerance {
                converged = true;
                break;
            }
        }

        if iterations == 0 {
            // no rounds allowed: report the normalized starting point
            scores.fill(1.0 / n as f64);
            delta = 0.0;
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::similarity::SimilarityMatrix;
    use crate::types::Sentence;
    use crate::vector::VectorSpaceBuilder;

    fn graph_from_tokens(docs: &[&[&str]]) -> CsrGraph {
        let sentences: Vec<Sentence> = docs
            .iter()
            .enumerate()
            .map(|(i, tokens)| {
                Sentence::new(i, tokens.join(" "), tokens.iter().map(|t| t.to_string()).collect())
            })
            .collect();
        let space = VectorSpaceBuilder::new().build(&sentences);
        CsrGraph::from_similarity(&SimilarityMatrix::from_space(&space))
    }

    fn build_hub_graph() -> CsrGraph {
        // sentence 0 shares a term with every other sentence; the spokes share nothing
        graph_from_tokens(&[
            &["magma", "lava", "basalt", "granite"],
            &["magma", "galaxy"],
            &["lava", "nebula"],
            &["basalt", "comet"],
            &["granite", "quasar"],
        ])
    }

    #[test]
    fn test_disconnected_pair_is_uniform() {
        let graph = graph_from_tokens(&[&["magma", "lava"], &["galaxy", "nebula"]]);
        let result = UndampedRank::new().run(&graph);

        assert!(result.converged);
        assert_eq!(result.scores.len(), 2);
        assert!((result.scores[0] - 0.5).abs() < 1e-12);
        assert!((result.scores[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hub_ranks_highest() {
        let graph = build_hub_graph();
        let result = UndampedRank::new().run(&graph);

        let hub = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub > score);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = UndampedRank::new().run(&build_hub_graph());

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_converges_within_cap() {
        let result = UndampedRank::new().run(&build_hub_graph());

        assert!(result.converged);
        assert!(result.iterations <= DEFAULT_MAX_ITERATIONS);
        assert!(result.delta < DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_empty_graph() {
        let result = UndampedRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let result = UndampedRank::new()
            .with_max_iterations(1)
            .with_tolerance(0.0)
            .run(&build_hub_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 5);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_iterations_is_uniform() {
        let result = UndampedRank::new()
            .with_max_iterations(0)
            .run(&build_hub_graph());

        assert_eq!(result.iterations, 0);
        assert!(!result.converged);
        assert!(result.scores.iter().all(|&s| (s - 0.2).abs() < 1e-12));
    }

    #[test]
    fn test_deterministic() {
        let graph = build_hub_graph();
        let first = UndampedRank::new().run(&graph);
        let second = UndampedRank::new().run(&graph);
        assert_eq!(first, second);
    }
}
