//! Sparse sentence vectors
//!
//! L2-normalized term → weight maps used for TF-IDF scoring and cosine
//! similarity between sentences.

use rustc_hash::FxHashMap;

/// A sparse, L2-normalized term vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    /// Non-zero dimensions: term -> normalized weight
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm of the vector before normalization
    pub norm: f64,
}

impl SparseVector {
    /// Create a new empty (zero) vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw weights, normalizing to unit length
    ///
    /// Zero and non-finite weights are dropped. A vector whose weights are all
    /// dropped is the zero vector.
    pub fn from_dimensions(mut dimensions: FxHashMap<String, f64>) -> Self {
        dimensions.retain(|_, w| w.is_finite() && *w != 0.0);
        let norm = Self::compute_norm(&dimensions);
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    fn compute_norm(dimensions: &FxHashMap<String, f64>) -> f64 {
        dimensions.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Cosine similarity with another vector
    ///
    /// Both vectors are unit length, so this is the dot product. The zero
    /// vector has similarity 0 with everything.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut dot = 0.0;
        for (key, value) in &small.dimensions {
            if let Some(other_value) = large.dimensions.get(key) {
                dot += value * other_value;
            }
        }
        dot
    }

    /// Sum of all weights
    pub fn weight_sum(&self) -> f64 {
        self.dimensions.values().sum()
    }

    /// Weight of a term (0 when absent)
    pub fn get(&self, term: &str) -> f64 {
        self.dimensions.get(term).copied().unwrap_or(0.0)
    }

    /// Check if this is the zero vector
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: &[(&str, f64)]) -> SparseVector {
        SparseVector::from_dimensions(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        )
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let v1 = vector(&[("a", 1.0), ("b", 2.0)]);
        let v2 = vector(&[("a", 1.0), ("b", 2.0)]);

        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let v1 = vector(&[("a", 1.0)]);
        let v2 = vector(&[("b", 1.0)]);

        assert!(v1.cosine_similarity(&v2).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_similarity_symmetric() {
        let v1 = vector(&[("a", 1.0), ("b", 0.5), ("c", 2.0)]);
        let v2 = vector(&[("a", 0.3), ("c", 1.0)]);

        let forward = v1.cosine_similarity(&v2);
        let backward = v2.cosine_similarity(&v1);
        assert!((forward - backward).abs() < 1e-12);
        assert!(forward > 0.0 && forward < 1.0);
    }

    #[test]
    fn test_zero_vector() {
        let zero = SparseVector::new();
        let v = vector(&[("a", 1.0)]);

        assert!(zero.is_empty());
        assert_eq!(zero.norm, 0.0);
        assert_eq!(zero.cosine_similarity(&v), 0.0);
        assert_eq!(zero.weight_sum(), 0.0);
    }

    #[test]
    fn test_unit_normalization() {
        let v = vector(&[("a", 3.0), ("b", 4.0)]);

        assert!((v.norm - 5.0).abs() < 1e-10);
        let actual_norm: f64 = v.dimensions.values().map(|x| x * x).sum::<f64>().sqrt();
        assert!((actual_norm - 1.0).abs() < 1e-10);
        assert!((v.get("a") - 0.6).abs() < 1e-10);
        assert!((v.weight_sum() - 1.4).abs() < 1e-10);
    }

    #[test]
    fn test_drops_zero_weights() {
        let v = vector(&[("a", 0.0), ("b", f64::NAN)]);
        assert!(v.is_empty());
    }
}
