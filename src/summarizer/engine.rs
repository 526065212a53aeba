//! Summary engine
//!
//! [`SummaryEngine`] is the entry point: it clamps the requested length,
//! dispatches to one of the three extractive pipelines or to the external
//! generator, and assembles the [`SummaryResult`].

use std::fmt;
use std::sync::Arc;

use crate::error::{GenerationError, Result, SummaryError};
use crate::nlp::stopwords::StopwordSet;
use crate::nlp::tokenizer::TextNormalizer;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_GENERATE,
};
use crate::pipeline::runner::{FrequencyPipeline, Pipeline, TextRankPipeline, TfidfPipeline};
use crate::pipeline::spec::{SummarizerConfig, SummaryRequest};
use crate::pipeline::traits::Scorer;
use crate::pipeline::validation::ValidationEngine;
use crate::scoring::{FrequencyScorer, TextRankScorer, TfidfScorer};
use crate::summarizer::generator::{build_prompt, TextGenerator};
use crate::summarizer::selector::{build_result, SummarySelector};
use crate::types::{Algorithm, SummaryResult};

/// Summarizes documents with any [`Algorithm`].
///
/// The engine is immutable after construction and can be shared across
/// threads.
pub struct SummaryEngine {
    config: SummarizerConfig,
    normalizer: TextNormalizer,
    selector: SummarySelector,
    frequency: FrequencyPipeline,
    tfidf: TfidfPipeline,
    textrank: TextRankPipeline,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl fmt::Debug for SummaryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryEngine")
            .field("config", &self.config)
            .field("stopwords", &self.normalizer.stopwords().len())
            .field("generator", &self.generator.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for SummaryEngine {
    fn default() -> Self {
        Self::build(SummarizerConfig::default())
    }
}

impl SummaryEngine {
    /// Create an engine from a configuration.
    ///
    /// The configuration is validated first; any error-severity diagnostic
    /// rejects it with [`SummaryError::InvalidConfig`]. Warnings are logged.
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(&config);
        if report.has_errors() {
            let messages: Vec<String> = report.errors().map(|e| e.to_string()).collect();
            return Err(SummaryError::InvalidConfig(messages.join("; ")));
        }
        for warning in report.warnings() {
            log_warn!("summarizer config: {}", warning);
        }
        Ok(Self::build(config))
    }

    /// Create an engine from a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config = SummarizerConfig::from_json(json)?;
        Self::new(config)
    }

    fn build(config: SummarizerConfig) -> Self {
        let stopwords = Arc::new(StopwordSet::english_with(&config.supplementary_stopwords));
        let normalizer = TextNormalizer::new(stopwords);
        let selector = SummarySelector::with_bounds(config.min_sentences, config.max_sentences);

        let frequency = Pipeline::new(normalizer.clone(), FrequencyScorer::new())
            .with_selector(selector);
        let tfidf = Pipeline::new(
            normalizer.clone(),
            TfidfScorer::with_max_features(config.tfidf_max_features),
        )
        .with_selector(selector);
        let textrank = Pipeline::new(
            normalizer.clone(),
            TextRankScorer::new()
                .with_max_iterations(config.textrank_max_iterations)
                .with_tolerance(config.textrank_tolerance),
        )
        .with_selector(selector);

        Self {
            config,
            normalizer,
            selector,
            frequency,
            tfidf,
            textrank,
            generator: None,
        }
    }

    /// Attach the text generator used by [`Algorithm::Llm`]
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Clamp a caller-supplied sentence count into the configured bounds
    pub fn clamp_sentences(&self, num_sentences: i64) -> usize {
        self.selector.clamp(num_sentences)
    }

    /// Summarize `text` with `algorithm`, keeping about `num_sentences`
    /// sentences.
    pub fn generate_summary(
        &self,
        text: &str,
        algorithm: Algorithm,
        num_sentences: i64,
    ) -> Result<SummaryResult> {
        self.generate_summary_observed(text, algorithm, num_sentences, &mut NoopObserver)
    }

    /// Like [`Self::generate_summary`], reporting stage boundaries to
    /// `observer`.
    pub fn generate_summary_observed(
        &self,
        text: &str,
        algorithm: Algorithm,
        num_sentences: i64,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryResult> {
        let requested = self.clamp_sentences(num_sentences);
        log_debug!(
            "summarizing {} chars with {} ({} sentences)",
            text.len(),
            algorithm,
            requested
        );

        match algorithm {
            Algorithm::Frequency => Self::extract(&self.frequency, text, requested, observer),
            Algorithm::Tfidf => Self::extract(&self.tfidf, text, requested, observer),
            Algorithm::TextRank => Self::extract(&self.textrank, text, requested, observer),
            Algorithm::Llm => self.generate(text, requested, observer),
        }
    }

    /// Summarize with an algorithm given by name.
    ///
    /// Unrecognized names select the external generator.
    pub fn generate_summary_by_name(
        &self,
        text: &str,
        algorithm: &str,
        num_sentences: i64,
    ) -> Result<SummaryResult> {
        let algorithm = match Algorithm::parse_known(algorithm) {
            Some(known) => known,
            None => {
                log_warn!(
                    "unknown algorithm {:?}; using the external generator",
                    algorithm
                );
                Algorithm::Llm
            }
        };
        self.generate_summary(text, algorithm, num_sentences)
    }

    /// Serve a client request
    pub fn summarize_request(&self, request: &SummaryRequest) -> Result<SummaryResult> {
        let num_sentences = request
            .num_sentences
            .unwrap_or_else(|| i64::try_from(self.config.default_sentences).unwrap_or(i64::MAX));
        self.generate_summary_by_name(&request.text, &request.algorithm, num_sentences)
    }

    /// Serve a JSON request and return the JSON result
    pub fn summarize_json(&self, request: &str) -> Result<String> {
        let request: SummaryRequest = serde_json::from_str(request)?;
        let result = self.summarize_request(&request)?;
        Ok(serde_json::to_string(&result)?)
    }

    fn extract<S: Scorer>(
        pipeline: &Pipeline<S>,
        text: &str,
        requested: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryResult> {
        let output = pipeline.run(text, requested, observer)?;
        Ok(build_result(
            output.summary,
            pipeline.scorer.algorithm().label(),
            output.requested,
            output.sentences.len(),
            text,
            output.notices,
        ))
    }

    fn generate(
        &self,
        text: &str,
        requested: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryResult> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(SummaryError::GeneratorUnavailable)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = STAGE_GENERATE).entered();
        observer.on_stage_start(STAGE_GENERATE);
        let clock = StageClock::start();

        let original_sentences = self.normalizer.split_sentences(text).len();
        let max_tokens = self
            .config
            .llm_tokens_per_sentence
            .saturating_mul(requested);
        let response = generator
            .generate(&build_prompt(text), self.config.llm_temperature, max_tokens)
            .and_then(|response| match response.trim() {
                "" => Err(GenerationError::EmptyResponse),
                summary => Ok(summary.to_string()),
            });

        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(original_sentences)
            .skipped(response.is_err())
            .build();
        observer.on_stage_end(STAGE_GENERATE, &report);
        let summary = response?;

        Ok(build_result(
            summary,
            Algorithm::Llm.label(),
            requested,
            original_sentences,
            text,
            Vec::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{RecordingObserver, STAGE_SCORE};
    use crate::types::Notice;
    use std::sync::Mutex;

    const GEOLOGY: &str = "Magma rises through the crust beneath the volcano. \
        Basalt forms when lava cools quickly at the surface. \
        Granite forms when magma cools slowly underground. \
        Volcanic ash drifts across the valley. \
        Lava flows carry magma across the basalt plain. \
        Quartz crystals glitter inside cooled granite.";

    fn echo_generator() -> Arc<dyn TextGenerator> {
        Arc::new(
            |_: &str, _: f32, _: usize| -> std::result::Result<String, GenerationError> {
                Ok("  Volcanoes build new rock.  ".to_string())
            },
        )
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SummaryEngine>();
    }

    #[test]
    fn test_every_extractive_algorithm() {
        let engine = SummaryEngine::default();
        for algorithm in [Algorithm::Frequency, Algorithm::Tfidf, Algorithm::TextRank] {
            let result = engine.generate_summary(GEOLOGY, algorithm, 3).unwrap();
            assert_eq!(result.algorithm, algorithm.label());
            assert_eq!(result.sentences_requested, 3);
            assert_eq!(result.original_sentences, 6);
            assert!(result.compression_ratio > 0.0 && result.compression_ratio < 100.0);
            assert!(result.summary_word_count < result.original_word_count);
        }
    }

    #[test]
    fn test_clamps_requested_sentences() {
        let engine = SummaryEngine::default();
        assert_eq!(engine.clamp_sentences(0), 2);
        assert_eq!(engine.clamp_sentences(1), 2);
        assert_eq!(engine.clamp_sentences(11), 10);
        assert_eq!(engine.clamp_sentences(1000), 10);

        let result = engine.generate_summary(GEOLOGY, Algorithm::Tfidf, -3).unwrap();
        assert_eq!(result.sentences_requested, 2);
    }

    #[test]
    fn test_short_document_notice() {
        let engine = SummaryEngine::default();
        let text = "Magma rises. Lava cools.";
        let result = engine.generate_summary(text, Algorithm::TextRank, 5).unwrap();

        assert_eq!(result.summary, text);
        assert_eq!(result.compression_ratio, 100.0);
        assert!(result.has_notice(|n| matches!(n, Notice::InputTooShort { .. })));
    }

    #[test]
    fn test_empty_document() {
        let engine = SummaryEngine::default();
        let result = engine.generate_summary("", Algorithm::Frequency, 3).unwrap();
        assert_eq!(result.summary, "");
        assert_eq!(result.original_sentences, 0);
        assert_eq!(result.compression_ratio, 0.0);
        assert_eq!(result.original_word_count, 0);
    }

    #[test]
    fn test_observed_run_reports_stages() {
        let engine = SummaryEngine::default();
        let mut observer = RecordingObserver::new();
        engine
            .generate_summary_observed(GEOLOGY, Algorithm::TextRank, 2, &mut observer)
            .unwrap();
        assert!(observer.report(STAGE_SCORE).unwrap().converged().is_some());
    }

    #[test]
    fn test_llm_without_generator() {
        let engine = SummaryEngine::default();
        let err = engine.generate_summary(GEOLOGY, Algorithm::Llm, 3).unwrap_err();
        assert!(matches!(err, SummaryError::GeneratorUnavailable));
        assert!(err.is_external());
    }

    #[test]
    fn test_llm_dispatch() {
        let calls: Arc<Mutex<Vec<(f32, usize)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&calls);
        let generator = move |prompt: &str,
                              temperature: f32,
                              max_tokens: usize|
              -> std::result::Result<String, GenerationError> {
            assert!(prompt.contains("Quartz crystals glitter"));
            seen.lock().unwrap().push((temperature, max_tokens));
            Ok("Volcanoes build new rock.".to_string())
        };
        let engine = SummaryEngine::default().with_generator(Arc::new(generator));

        let result = engine.generate_summary(GEOLOGY, Algorithm::Llm, 4).unwrap();
        assert_eq!(result.summary, "Volcanoes build new rock.");
        assert_eq!(result.algorithm, "llm");
        assert_eq!(result.sentences_requested, 4);
        assert_eq!(result.original_sentences, 6);
        assert_eq!(calls.lock().unwrap().as_slice(), &[(0.4, 4096)]);
    }

    #[test]
    fn test_unknown_name_falls_back_to_generator() {
        let engine = SummaryEngine::default().with_generator(echo_generator());
        let result = engine
            .generate_summary_by_name(GEOLOGY, "lexrank", 3)
            .unwrap();
        assert_eq!(result.algorithm, "llm");
        assert_eq!(result.summary, "Volcanoes build new rock.");

        let result = engine
            .generate_summary_by_name(GEOLOGY, "TF-IDF", 3)
            .unwrap();
        assert_eq!(result.algorithm, "TF-IDF");
    }

    #[test]
    fn test_generator_failure_surfaces() {
        let failing = |_: &str, _: f32, _: usize| -> std::result::Result<String, GenerationError> {
            Err(GenerationError::Quota("daily limit".into()))
        };
        let engine = SummaryEngine::default().with_generator(Arc::new(failing));
        let err = engine.generate_summary(GEOLOGY, Algorithm::Llm, 3).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::ExternalService(GenerationError::Quota(_))
        ));

        let blank = |_: &str, _: f32, _: usize| -> std::result::Result<String, GenerationError> {
            Ok("   ".to_string())
        };
        let engine = SummaryEngine::default().with_generator(Arc::new(blank));
        let err = engine.generate_summary(GEOLOGY, Algorithm::Llm, 3).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::ExternalService(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_failed_generation_still_ends_stage() {
        let failing = |_: &str, _: f32, _: usize| -> std::result::Result<String, GenerationError> {
            Err(GenerationError::Transport("connection reset".into()))
        };
        let blank = |_: &str, _: f32, _: usize| -> std::result::Result<String, GenerationError> {
            Ok(String::new())
        };
        let generators: [Arc<dyn TextGenerator>; 2] = [Arc::new(failing), Arc::new(blank)];

        for generator in generators {
            let engine = SummaryEngine::default().with_generator(generator);
            let mut observer = RecordingObserver::new();
            let result =
                engine.generate_summary_observed(GEOLOGY, Algorithm::Llm, 3, &mut observer);

            assert!(result.unwrap_err().is_external());
            assert_eq!(observer.started, vec![STAGE_GENERATE]);
            assert_eq!(observer.stage_names(), vec![STAGE_GENERATE]);
            assert!(observer.report(STAGE_GENERATE).unwrap().skipped());
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SummarizerConfig {
            min_sentences: 6,
            max_sentences: 4,
            ..SummarizerConfig::default()
        };
        let err = SummaryEngine::new(config).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidConfig(_)));
        assert!(err.to_string().contains("/max_sentences"));
    }

    #[test]
    fn test_from_json_config() {
        let engine = SummaryEngine::from_json(r#"{ "max_sentences": 4 }"#).unwrap();
        assert_eq!(engine.clamp_sentences(9), 4);

        let err = SummaryEngine::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SummaryError::Json(_)));
    }

    #[test]
    fn test_summarize_request() {
        let engine = SummaryEngine::default();
        let request = SummaryRequest {
            text: GEOLOGY.to_string(),
            algorithm: "textrank".to_string(),
            num_sentences: None,
        };
        let result = engine.summarize_request(&request).unwrap();
        assert_eq!(result.sentences_requested, 3);
        assert_eq!(result.algorithm, "TextRank");
    }

    #[test]
    fn test_summarize_json() {
        let engine = SummaryEngine::default();
        let request = serde_json::json!({
            "text": GEOLOGY,
            "algorithm": "frequency",
            "num_sentences": 2
        })
        .to_string();

        let response = engine.summarize_json(&request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["algorithm"], "Frequency Analysis");
        assert_eq!(value["sentences_requested"], 2);
        assert_eq!(value["original_sentences"], 6);
        assert!(value.get("notices").is_none());
    }

    #[test]
    fn test_supplementary_stopwords_configurable() {
        let config = SummarizerConfig {
            supplementary_stopwords: vec!["magma".to_string()],
            ..SummarizerConfig::default()
        };
        let engine = SummaryEngine::new(config).unwrap();
        assert!(engine.normalizer.stopwords().is_stopword("magma"));
    }
}
