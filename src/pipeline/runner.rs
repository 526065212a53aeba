//! Pipeline runner: orchestrates stage execution.
//!
//! A [`Pipeline`] owns a normalizer, a [`Scorer`] and a selector. Calling
//! [`Pipeline::run`] executes normalize, score and select in order, notifying
//! a [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over its scorer, so each algorithm monomorphizes
//! into its own concrete type. Use [`Pipeline::frequency()`] (and friends)
//! to build pipelines for the known algorithms.

use crate::error::Result;
use crate::nlp::tokenizer::TextNormalizer;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_NORMALIZE, STAGE_SCORE, STAGE_SELECT,
};
use crate::pipeline::traits::Scorer;
use crate::scoring::{FrequencyScorer, TextRankScorer, TfidfScorer};
use crate::summarizer::selector::{render, SummarySelector};
use crate::types::{Notice, ScoreVector, Sentence};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline
// ============================================================================

/// An extractive pipeline for one scoring algorithm.
#[derive(Debug, Clone)]
pub struct Pipeline<S> {
    pub normalizer: TextNormalizer,
    pub scorer: S,
    pub selector: SummarySelector,
}

pub type FrequencyPipeline = Pipeline<FrequencyScorer>;
pub type TfidfPipeline = Pipeline<TfidfScorer>;
pub type TextRankPipeline = Pipeline<TextRankScorer>;

impl FrequencyPipeline {
    /// Frequency scoring with default stopwords and bounds
    pub fn frequency() -> Self {
        Pipeline::new(TextNormalizer::default(), FrequencyScorer::new())
    }
}

impl TfidfPipeline {
    /// TF-IDF scoring over the top 100 terms
    pub fn tfidf() -> Self {
        Pipeline::new(TextNormalizer::default(), TfidfScorer::new())
    }
}

impl TextRankPipeline {
    /// Undamped TextRank with 50 rounds and a 1e-4 tolerance
    pub fn textrank() -> Self {
        Pipeline::new(TextNormalizer::default(), TextRankScorer::new())
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// Sentences of the cleaned document, in order
    pub sentences: Vec<Sentence>,
    /// Indices of the kept sentences, ascending
    pub selected: Vec<usize>,
    /// Kept sentences joined by single spaces
    pub summary: String,
    /// Sentence count after clamping
    pub requested: usize,
    /// Non-error conditions from every stage
    pub notices: Vec<Notice>,
}

impl<S: Scorer> Pipeline<S> {
    pub fn new(normalizer: TextNormalizer, scorer: S) -> Self {
        Self {
            normalizer,
            scorer,
            selector: SummarySelector::new(),
        }
    }

    /// Replace the clamp bounds
    pub fn with_selector(mut self, selector: SummarySelector) -> Self {
        self.selector = selector;
        self
    }

    /// Execute the pipeline.
    ///
    /// Stages run in order:
    /// 1. Normalize (clean, split, tokenize)
    /// 2. Score (skipped when the whole document fits in the summary)
    /// 3. Select and render
    ///
    /// `requested` is clamped by the selector before use. Pass
    /// [`super::observer::NoopObserver`] when no callbacks are needed.
    pub fn run(
        &self,
        text: &str,
        requested: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<PipelineOutput> {
        let requested = self
            .selector
            .clamp(i64::try_from(requested).unwrap_or(i64::MAX));
        let mut notices = Vec::new();

        // Stage 1: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let sentences = self.normalizer.normalize(text);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .build();
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        observer.on_sentences(&sentences);

        // Stage 2: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scores = if self.selector.fits_whole(sentences.len(), requested) {
            log_debug!(
                "{} sentences fit in a {}-sentence summary; skipping scoring",
                sentences.len(),
                requested
            );
            notices.push(Notice::InputTooShort {
                sentences: sentences.len(),
                requested,
            });
            let report = StageReportBuilder::new(clock.elapsed()).skipped(true).build();
            observer.on_stage_end(STAGE_SCORE, &report);
            ScoreVector::new(self.scorer.algorithm(), Vec::new())
        } else {
            let scored = self.scorer.score(&sentences);
            let report = match &scored {
                Ok(scores) => StageReportBuilder::new(clock.elapsed())
                    .sentences(scores.len())
                    .iterations(scores.iterations)
                    .converged(scores.converged)
                    .build(),
                Err(_) => StageReportBuilder::new(clock.elapsed()).skipped(true).build(),
            };
            observer.on_stage_end(STAGE_SCORE, &report);
            let scores = scored?;
            observer.on_scores(&scores);
            notices.extend(scores.notices.iter().cloned());
            scores
        };

        // Stage 3: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let kept = self.selector.select(&sentences, &scores, requested);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(kept.as_ref().map_or(0, Vec::len))
            .skipped(kept.is_err())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        let kept = kept?;
        let summary = render(&kept);
        let selected: Vec<usize> = kept.iter().map(|s| s.index).collect();

        Ok(PipelineOutput {
            sentences,
            selected,
            summary,
            requested,
            notices,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
