//! Core types shared across the summarization pipeline

use serde::{Deserialize, Serialize};

/// A sentence of the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Ordinal position in the document (0-based)
    pub index: usize,
    /// Surface form, as it appears in the cleaned document
    pub text: String,
    /// Lowercase alphabetic content tokens, stopwords removed, in order
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, text: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            index,
            text: text.into(),
            tokens,
        }
    }

    /// Number of content tokens
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Whether every token was filtered out
    pub fn has_no_content(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Summarization algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Frequency,
    Tfidf,
    #[serde(rename = "textrank")]
    TextRank,
    /// External text generator; not extractive
    Llm,
}

impl Algorithm {
    /// Parse an algorithm name. Unrecognized names select [`Algorithm::Llm`].
    pub fn parse(value: &str) -> Self {
        Self::parse_known(value).unwrap_or(Algorithm::Llm)
    }

    /// Parse an algorithm name, returning `None` for unrecognized names
    pub fn parse_known(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "frequency" | "freq" => Some(Algorithm::Frequency),
            "tfidf" | "tf-idf" | "tf_idf" => Some(Algorithm::Tfidf),
            "textrank" | "text_rank" => Some(Algorithm::TextRank),
            "llm" => Some(Algorithm::Llm),
            _ => None,
        }
    }

    /// Machine name used in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Frequency => "frequency",
            Algorithm::Tfidf => "tfidf",
            Algorithm::TextRank => "textrank",
            Algorithm::Llm => "llm",
        }
    }

    /// Human-readable label reported in [`SummaryResult::algorithm`]
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Frequency => "Frequency Analysis",
            Algorithm::Tfidf => "TF-IDF",
            Algorithm::TextRank => "TextRank",
            Algorithm::Llm => "llm",
        }
    }

    /// Whether the algorithm selects existing sentences
    pub fn is_extractive(&self) -> bool {
        !matches!(self, Algorithm::Llm)
    }
}

impl std::str::FromStr for Algorithm {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Algorithm::parse(value))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-error condition observed while summarizing
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The document had no more sentences than requested; scoring was skipped
    InputTooShort { sentences: usize, requested: usize },
    /// Fewer than two vocabulary terms; all similarities are zero
    DegenerateVocabulary { terms: usize },
    /// Rank propagation hit its round limit before the closeness test passed
    IterationCapReached { iterations: usize, delta: f64 },
}

/// Per-sentence importance scores produced by a scorer
///
/// `scores[i]` belongs to the sentence with index `i`. Higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    /// Algorithm that produced the scores
    pub algorithm: Algorithm,
    /// One score per sentence
    pub scores: Vec<f64>,
    /// Rounds of propagation, for iterative scorers
    pub iterations: Option<usize>,
    /// Whether propagation converged, for iterative scorers
    pub converged: Option<bool>,
    /// Non-error conditions raised while scoring
    pub notices: Vec<Notice>,
}

impl ScoreVector {
    /// Create a score vector for a non-iterative scorer
    pub fn new(algorithm: Algorithm, scores: Vec<f64>) -> Self {
        Self {
            algorithm,
            scores,
            iterations: None,
            converged: None,
            notices: Vec::new(),
        }
    }

    /// Attach a notice
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    /// Record convergence information
    pub fn with_convergence(mut self, iterations: usize, converged: bool) -> Self {
        self.iterations = Some(iterations);
        self.converged = Some(converged);
        self
    }

    /// Score for a sentence index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sentence indices ordered by score descending, ties by lower index
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| {
            self.scores[b]
                .total_cmp(&self.scores[a])
                .then_with(|| a.cmp(&b))
        });
        indices
    }
}

/// The record returned for every summarization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Summary text
    pub summary: String,
    /// Human-readable label of the algorithm used
    pub algorithm: String,
    /// Sentence count after clamping
    pub sentences_requested: usize,
    /// Sentences found in the original document
    pub original_sentences: usize,
    /// Summary length as a percentage of the original, 2 decimals
    pub compression_ratio: f64,
    pub summary_word_count: usize,
    pub original_word_count: usize,
    /// Non-error conditions observed along the way
    #[serde(skip)]
    pub notices: Vec<Notice>,
}

impl SummaryResult {
    /// Whether a notice of the given kind was raised
    pub fn has_notice(&self, predicate: impl Fn(&Notice) -> bool) -> bool {
        self.notices.iter().any(predicate)
    }
}
