//! Configuration and request types.
//!
//! A [`SummarizerConfig`] fixes the tunables of an engine: clamp bounds,
//! vocabulary cap, rank iteration limits, supplementary stopwords and the
//! generator budget. It is the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "min_sentences": 2,
//!   "max_sentences": 10,
//!   "default_sentences": 3,
//!   "tfidf_max_features": 100,
//!   "textrank_max_iterations": 50,
//!   "textrank_tolerance": 0.0001,
//!   "supplementary_stopwords": ["said", "also"],
//!   "llm_temperature": 0.4,
//!   "llm_tokens_per_sentence": 1024,
//!   "strict": false
//! }
//! ```
//!
//! Every field is optional; omitted fields take the defaults above.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::SUPPLEMENTARY_STOPWORDS;
use crate::pagerank::undamped::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::summarizer::generator::{DEFAULT_TEMPERATURE, DEFAULT_TOKENS_PER_SENTENCE};
use crate::summarizer::selector::{MAX_SENTENCES, MIN_SENTENCES};
use crate::vector::DEFAULT_MAX_FEATURES;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Lower clamp bound for the requested sentence count.
    #[serde(default = "default_min_sentences")]
    pub min_sentences: usize,

    /// Upper clamp bound for the requested sentence count.
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,

    /// Sentence count used when a request does not name one.
    #[serde(default = "default_sentences")]
    pub default_sentences: usize,

    /// Vocabulary cap for TF-IDF scoring (`null` = full vocabulary).
    #[serde(default = "default_max_features")]
    pub tfidf_max_features: Option<usize>,

    /// Round limit for TextRank propagation.
    #[serde(default = "default_max_iterations")]
    pub textrank_max_iterations: usize,

    /// Element-wise closeness tolerance for TextRank propagation.
    #[serde(default = "default_tolerance")]
    pub textrank_tolerance: f64,

    /// Words added to the English stopword list.
    #[serde(default = "default_supplementary_stopwords")]
    pub supplementary_stopwords: Vec<String>,

    /// Sampling temperature passed to the text generator.
    #[serde(default = "default_temperature")]
    pub llm_temperature: f32,

    /// Generator output budget per requested sentence.
    #[serde(default = "default_tokens_per_sentence")]
    pub llm_tokens_per_sentence: usize,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_min_sentences() -> usize {
    MIN_SENTENCES
}

fn default_max_sentences() -> usize {
    MAX_SENTENCES
}

fn default_sentences() -> usize {
    3
}

fn default_max_features() -> Option<usize> {
    Some(DEFAULT_MAX_FEATURES)
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_supplementary_stopwords() -> Vec<String> {
    SUPPLEMENTARY_STOPWORDS.iter().map(|w| w.to_string()).collect()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_tokens_per_sentence() -> usize {
    DEFAULT_TOKENS_PER_SENTENCE
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_sentences: default_min_sentences(),
            max_sentences: default_max_sentences(),
            default_sentences: default_sentences(),
            tfidf_max_features: default_max_features(),
            textrank_max_iterations: default_max_iterations(),
            textrank_tolerance: default_tolerance(),
            supplementary_stopwords: default_supplementary_stopwords(),
            llm_temperature: default_temperature(),
            llm_tokens_per_sentence: default_tokens_per_sentence(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarizerConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A single summarization request, as received from a client.
///
/// ```json
/// { "text": "...", "algorithm": "textrank", "num_sentences": 5 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Document text.
    pub text: String,

    /// Algorithm name; unrecognized names select the generator.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Requested sentence count; the engine default applies when omitted.
    #[serde(default)]
    pub num_sentences: Option<i64>,
}

fn default_algorithm() -> String {
    "frequency".to_string()
}
