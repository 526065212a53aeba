//! Rank propagation over the sentence graph
//!
//! This module provides the undamped, fixed-point rank iteration used by the
//! TextRank scorer.

pub mod undamped;

pub use undamped::UndampedRank;

/// Result of a rank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest element-wise change in the final iteration
    pub delta: f64,
    /// Whether the closeness test passed before the iteration cap
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}
