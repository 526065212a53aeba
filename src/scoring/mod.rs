//! Sentence scorers
//!
//! Each scorer implements [`crate::pipeline::traits::Scorer`]:
//! - FrequencyScorer: mean document frequency of a sentence's content words
//! - TfidfScorer: sum of a sentence's TF-IDF weights
//! - TextRankScorer: undamped rank over the sentence-similarity graph

pub mod frequency;
pub mod textrank;
pub mod tfidf;

pub use frequency::{FrequencyScorer, TermFrequencyTable};
pub use textrank::TextRankScorer;
pub use tfidf::TfidfScorer;
