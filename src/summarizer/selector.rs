//! Top-N sentence selection and summary statistics
//!
//! Selection ranks by score but renders in document order: the summary
//! always reads the way the source does.

use crate::error::{Result, SummaryError};
use crate::types::{Notice, ScoreVector, Sentence, SummaryResult};

/// Smallest summary, in sentences
pub const MIN_SENTENCES: usize = 2;
/// Largest summary, in sentences
pub const MAX_SENTENCES: usize = 10;

/// Clamp a caller-supplied sentence count into `[min, max]`
pub fn clamp_sentence_count(requested: i64, min: usize, max: usize) -> usize {
    let max = max.max(min);
    let min = i64::try_from(min).unwrap_or(i64::MAX);
    let max = i64::try_from(max).unwrap_or(i64::MAX);
    requested.clamp(min, max) as usize
}

/// Picks the highest-scoring sentences
#[derive(Debug, Clone, Copy)]
pub struct SummarySelector {
    min_sentences: usize,
    max_sentences: usize,
}

impl Default for SummarySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SummarySelector {
    /// Selector clamping to `[2, 10]`
    pub fn new() -> Self {
        Self {
            min_sentences: MIN_SENTENCES,
            max_sentences: MAX_SENTENCES,
        }
    }

    /// Selector with custom clamp bounds
    pub fn with_bounds(min_sentences: usize, max_sentences: usize) -> Self {
        Self {
            min_sentences,
            max_sentences: max_sentences.max(min_sentences),
        }
    }

    /// Clamp a requested sentence count
    pub fn clamp(&self, requested: i64) -> usize {
        clamp_sentence_count(requested, self.min_sentences, self.max_sentences)
    }

    /// Whether a document of `sentence_count` sentences fits in the summary
    pub fn fits_whole(&self, sentence_count: usize, requested: usize) -> bool {
        sentence_count <= self.clamp(i64::try_from(requested).unwrap_or(i64::MAX))
    }

    /// Select the top `requested` sentences (after clamping), in document order
    ///
    /// Ties go to the earlier sentence. Documents that fit entirely are
    /// returned whole without consulting the scores.
    pub fn select<'a>(
        &self,
        sentences: &'a [Sentence],
        scores: &ScoreVector,
        requested: usize,
    ) -> Result<Vec<&'a Sentence>> {
        let n = self.clamp(i64::try_from(requested).unwrap_or(i64::MAX));
        if sentences.len() <= n {
            return Ok(sentences.iter().collect());
        }

        if scores.len() != sentences.len() {
            return Err(SummaryError::scoring(
                scores.algorithm,
                format!(
                    "score vector has {} entries for {} sentences",
                    scores.len(),
                    sentences.len()
                ),
            ));
        }
        if let Some(index) = scores.scores.iter().position(|s| !s.is_finite()) {
            return Err(SummaryError::scoring(
                scores.algorithm,
                format!("non-finite score for sentence {index}"),
            ));
        }

        let mut top: Vec<usize> = scores.ranked_indices().into_iter().take(n).collect();
        top.sort_unstable();

        Ok(top.into_iter().map(|i| &sentences[i]).collect())
    }
}

/// Join selected sentences into summary text
pub fn render(selected: &[&Sentence]) -> String {
    selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-delimited word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Summary length as a percentage of the original, rounded to 2 decimals
///
/// Lengths are measured in characters. An empty original yields 0.
pub fn compression_ratio(summary: &str, original: &str) -> f64 {
    let original_len = original.chars().count();
    if original_len == 0 {
        return 0.0;
    }
    let ratio = 100.0 * summary.chars().count() as f64 / original_len as f64;
    (ratio * 100.0).round() / 100.0
}

/// Assemble the result record for a finished summary
pub fn build_result(
    summary: String,
    label: &str,
    sentences_requested: usize,
    original_sentences: usize,
    original_text: &str,
    notices: Vec<Notice>,
) -> SummaryResult {
    let compression_ratio = if original_sentences > 0 {
        compression_ratio(&summary, original_text)
    } else {
        0.0
    };

    SummaryResult {
        summary_word_count: word_count(&summary),
        original_word_count: word_count(original_text),
        summary,
        algorithm: label.to_string(),
        sentences_requested,
        original_sentences,
        compression_ratio,
        notices,
    }
}
