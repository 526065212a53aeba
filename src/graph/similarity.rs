//! Sentence similarity matrix
//!
//! Dense, symmetric matrix of cosine similarities between sentence vectors.
//! The diagonal is always zero: a sentence never votes for itself.

use rayon::prelude::*;

use crate::vector::VectorSpace;

/// Below this many sentences rows are computed sequentially
const PARALLEL_THRESHOLD: usize = 64;

/// Square matrix of pairwise cosine similarities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// All-zero matrix over `size` sentences
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Compute pairwise similarities of every sentence vector
    ///
    /// A degenerate vocabulary (fewer than two terms) yields the zero matrix.
    pub fn from_space(space: &VectorSpace) -> Self {
        let size = space.len();
        if space.is_degenerate() {
            return Self::zeros(size);
        }

        let vectors = &space.vectors;
        let row = |i: usize| -> Vec<f64> {
            (0..size)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        vectors[i].cosine_similarity(&vectors[j])
                    }
                })
                .collect()
        };

        let rows: Vec<Vec<f64>> = if size < PARALLEL_THRESHOLD {
            (0..size).map(row).collect()
        } else {
            (0..size).into_par_iter().map(row).collect()
        };

        Self {
            size,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of sentences
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i` of the matrix
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Whether every off-diagonal entry is zero
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}
