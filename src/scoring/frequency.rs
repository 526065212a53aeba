//! Word-frequency scoring
//!
//! A sentence scores the mean document-wide frequency of its content tokens.
//! Using the mean rather than the sum keeps long sentences from winning on
//! length alone.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::pipeline::traits::Scorer;
use crate::types::{Algorithm, ScoreVector, Sentence};

/// Token counts over a whole document
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyTable {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl TermFrequencyTable {
    /// Count every content token of every sentence
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut total = 0;

        for token in sentences.iter().flat_map(|s| s.tokens.iter()) {
            *counts.entry(token.clone()).or_insert(0) += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// Count for a token (0 when absent)
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of token occurrences
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent tokens, ties broken alphabetically
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// Mean term-frequency scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl FrequencyScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for FrequencyScorer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Frequency
    }

    fn score(&self, sentences: &[Sentence]) -> Result<ScoreVector> {
        let table = TermFrequencyTable::from_sentences(sentences);
        log_debug!(
            "frequency table: {} tokens, {} distinct, most common {:?}",
            table.total(),
            table.len(),
            table.most_common(10)
        );

        let scores = sentences
            .iter()
            .map(|sentence| {
                if sentence.has_no_content() {
                    return 0.0;
                }
                let sum: usize = sentence.tokens.iter().map(|t| table.get(t)).sum();
                sum as f64 / sentence.token_count() as f64
            })
            .collect();

        Ok(ScoreVector::new(Algorithm::Frequency, scores))
    }
}
