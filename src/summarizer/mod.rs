//! Summarization components
//!
//! Sentence selection, the external generator seam, and the
//! [`engine::SummaryEngine`] that ties them to the scoring pipelines.

pub mod engine;
pub mod generator;
pub mod selector;
