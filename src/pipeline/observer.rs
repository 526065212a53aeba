//! Pipeline observer: hooks for timing and inspecting stages.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and asserting on stage behavior in tests.

use std::time::{Duration, Instant};

use crate::types::{ScoreVector, Sentence};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_GENERATE: &str = "generate";

/// Wall-clock timer for a single stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// What happened during one stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    skipped: bool,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sentences produced (normalize) or kept (select)
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Propagation rounds, for iterative scorers
    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    /// The stage did no work (short input)
    pub fn skipped(&self) -> bool {
        self.skipped
    }
}

/// Fluent construction of a [`StageReport`]
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, sentences: usize) -> Self {
        self.report.sentences = Some(sentences);
        self
    }

    pub fn iterations(mut self, iterations: Option<usize>) -> Self {
        self.report.iterations = iterations;
        self
    }

    pub fn converged(mut self, converged: Option<bool>) -> Self {
        self.report.converged = converged;
        self
    }

    pub fn skipped(mut self, skipped: bool) -> Self {
        self.report.skipped = skipped;
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Receives callbacks as a summarization call moves through its stages.
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called once the document has been split and tokenized
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// Called with the raw scores, before selection
    fn on_scores(&mut self, _scores: &ScoreVector) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that keeps every stage report, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub started: Vec<&'static str>,
    pub reports: Vec<(&'static str, StageReport)>,
    pub scores: Option<ScoreVector>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report of the first run of a stage
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Names of finished stages, in order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }
}

impl PipelineObserver for RecordingObserver {
    fn on_stage_start(&mut self, stage: &'static str) {
        self.started.push(stage);
    }

    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }

    fn on_scores(&mut self, scores: &ScoreVector) {
        self.scores = Some(scores.clone());
    }
}
