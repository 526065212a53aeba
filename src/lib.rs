//! # extractive-summarizer
//!
//! Extractive document summarization. A document is split into sentences,
//! every sentence is scored by one of three deterministic algorithms, and the
//! top sentences are returned in their original reading order.
//!
//! ## Algorithms
//!
//! - **Frequency**: mean document-wide frequency of a sentence's content words
//! - **TF-IDF**: sum of a sentence's TF-IDF weights over a sentence-local corpus
//! - **TextRank**: undamped rank propagation over a cosine-similarity graph
//!
//! A fourth, non-extractive path hands the document to an external text
//! generator through the [`summarizer::generator::TextGenerator`] trait.
//!
//! ## Quick start
//!
//! ```
//! use extractive_summarizer::{Algorithm, SummaryEngine};
//!
//! let engine = SummaryEngine::default();
//! let text = "Rust is a systems language. It offers memory safety. \
//!             Cargo builds Rust projects. Crates are shared on crates.io.";
//! let result = engine.generate_summary(text, Algorithm::TextRank, 2).unwrap();
//! assert_eq!(result.sentences_requested, 2);
//! ```

#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! log_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod error;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;
pub mod vector;

pub use error::{GenerationError, Result, SummaryError};
pub use nlp::stopwords::StopwordSet;
pub use nlp::tokenizer::TextNormalizer;
pub use pipeline::spec::{SummarizerConfig, SummaryRequest};
pub use pipeline::traits::Scorer;
pub use scoring::{FrequencyScorer, TextRankScorer, TfidfScorer};
pub use summarizer::engine::SummaryEngine;
pub use summarizer::generator::TextGenerator;
pub use summarizer::selector::SummarySelector;
pub use types::{Algorithm, Notice, ScoreVector, Sentence, SummaryResult};
