//! Sentence-level TF-IDF vector space
//!
//! Every sentence is treated as one document of a small corpus: the
//! vocabulary and inverse document frequencies are computed over the
//! sentences of a single input, never over an external corpus.
//!
//! Weights follow the usual smoothed formulation:
//!
//! ```text
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, s)   = count(t, s) * idf(t)
//! vector(s) = w(., s) / ||w(., s)||_2
//! ```

use rustc_hash::FxHashMap;

use super::sparse::SparseVector;
use crate::types::Sentence;

/// Default vocabulary cap for TF-IDF scoring
pub const DEFAULT_MAX_FEATURES: usize = 100;

/// Shorter terms are left out of the vocabulary
const MIN_TERM_LENGTH: usize = 2;

/// Builds a [`VectorSpace`] from sentences
#[derive(Debug, Clone)]
pub struct VectorSpaceBuilder {
    /// Keep only the most frequent terms (None = full vocabulary)
    max_features: Option<usize>,
}

impl Default for VectorSpaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorSpaceBuilder {
    /// Create a builder using the full vocabulary
    pub fn new() -> Self {
        Self {
            max_features: None,
        }
    }

    /// Cap the vocabulary to the `max_features` most frequent terms
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Vectorize the sentences
    ///
    /// Never fails: an empty vocabulary yields one zero vector per sentence.
    pub fn build(&self, sentences: &[Sentence]) -> VectorSpace {
        let documents: Vec<Vec<&str>> = sentences
            .iter()
            .map(|s| {
                s.tokens
                    .iter()
                    .map(String::as_str)
                    .filter(|t| t.chars().count() >= MIN_TERM_LENGTH)
                    .collect()
            })
            .collect();

        let mut term_counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut doc_freq: FxHashMap<&str, usize> = FxHashMap::default();
        for doc in &documents {
            let mut seen: Vec<&str> = Vec::with_capacity(doc.len());
            for &term in doc {
                *term_counts.entry(term).or_insert(0) += 1;
                if !seen.contains(&term) {
                    seen.push(term);
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        let mut vocabulary: Vec<&str> = term_counts.keys().copied().collect();
        if let Some(limit) = self.max_features {
            if vocabulary.len() > limit {
                vocabulary.sort_by(|a, b| term_counts[b].cmp(&term_counts[a]).then_with(|| a.cmp(b)));
                vocabulary.truncate(limit);
            }
        }
        vocabulary.sort_unstable();

        let n = sentences.len() as f64;
        let idf: FxHashMap<String, f64> = vocabulary
            .iter()
            .map(|&term| {
                let df = doc_freq[term] as f64;
                (term.to_string(), ((1.0 + n) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        let vectors = documents
            .iter()
            .map(|doc| {
                let mut dimensions: FxHashMap<String, f64> = FxHashMap::default();
                for &term in doc {
                    if let Some(&weight) = idf.get(term) {
                        *dimensions.entry(term.to_string()).or_insert(0.0) += weight;
                    }
                }
                SparseVector::from_dimensions(dimensions)
            })
            .collect();

        VectorSpace {
            vectors,
            vocabulary: vocabulary.into_iter().map(str::to_string).collect(),
            idf,
        }
    }
}

/// TF-IDF vectors for every sentence of a document
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    /// One vector per sentence, in sentence order
    pub vectors: Vec<SparseVector>,
    /// Vocabulary terms, sorted
    pub vocabulary: Vec<String>,
    idf: FxHashMap<String, f64>,
}

impl VectorSpace {
    /// Number of vocabulary terms
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Fewer than two distinct terms: similarities carry no information
    pub fn is_degenerate(&self) -> bool {
        self.vocabulary.len() < 2
    }

    /// Inverse document frequency of a vocabulary term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Number of sentence vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
