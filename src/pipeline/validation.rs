//! Validation engine for summarizer configurations.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarizerConfig`] and collects every diagnostic into a
//! [`ValidationReport`]. It never stops at the first error.
//!
//! # Quick start
//!
//! ```
//! use extractive_summarizer::pipeline::validation::ValidationEngine;
//! use extractive_summarizer::SummarizerConfig;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&SummarizerConfig::default());
//! assert!(report.is_valid());
//! ```

use std::fmt;

use serde::Serialize;

use super::spec::SummarizerConfig;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Config error ───────────────────────────────────────────────────────────

/// Stable machine-readable diagnostic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A value falls outside its allowed range.
    OutOfRange,
    /// Two values contradict each other.
    Inconsistent,
    /// A field is not part of the schema.
    UnknownField,
}

/// A problem found in a configuration, located by JSON pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding with its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarizerConfig`] and returns
/// zero or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"sentence_bounds"`).
    fn name(&self) -> &str;

    /// Inspect `config` and return any findings.
    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarizerConfig`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(SentenceBoundsRule));
        engine.add_rule(Box::new(FeatureCapRule));
        engine.add_rule(Box::new(RankLimitsRule));
        engine.add_rule(Box::new(GeneratorBudgetRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `config` and return the collected report.
    pub fn validate(&self, config: &SummarizerConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(config));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. clamp bounds are usable ─────────────────────────────────────────────

struct SentenceBoundsRule;

impl ValidationRule for SentenceBoundsRule {
    fn name(&self) -> &str {
        "sentence_bounds"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if config.min_sentences == 0 {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/min_sentences",
                    "min_sentences must be at least 1",
                )
                .with_hint("A summary needs at least one sentence"),
            ));
        }

        if config.min_sentences > config.max_sentences {
            out.push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::Inconsistent,
                "/max_sentences",
                format!(
                    "max_sentences ({}) is below min_sentences ({})",
                    config.max_sentences, config.min_sentences
                ),
            )));
        } else if config.default_sentences < config.min_sentences
            || config.default_sentences > config.max_sentences
        {
            out.push(ValidationDiagnostic::warning(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/default_sentences",
                    format!(
                        "default_sentences ({}) is outside [{}, {}]",
                        config.default_sentences, config.min_sentences, config.max_sentences
                    ),
                )
                .with_hint("It will be clamped on every request"),
            ));
        }

        out
    }
}

// ─── 2. TF-IDF vocabulary cap ───────────────────────────────────────────────

struct FeatureCapRule;

impl ValidationRule for FeatureCapRule {
    fn name(&self) -> &str {
        "feature_cap"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        if config.tfidf_max_features == Some(0) {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/tfidf_max_features",
                    "tfidf_max_features of 0 leaves no vocabulary",
                )
                .with_hint("Use null for the full vocabulary"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 3. rank iteration limits ───────────────────────────────────────────────

struct RankLimitsRule;

impl ValidationRule for RankLimitsRule {
    fn name(&self) -> &str {
        "rank_limits"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if config.textrank_max_iterations == 0 {
            out.push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::OutOfRange,
                "/textrank_max_iterations",
                "textrank_max_iterations must be at least 1",
            )));
        }

        let tolerance = config.textrank_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            out.push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::OutOfRange,
                "/textrank_tolerance",
                format!("textrank_tolerance must be a non-negative number, got {tolerance}"),
            )));
        } else if tolerance == 0.0 {
            out.push(ValidationDiagnostic::warning(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/textrank_tolerance",
                    "textrank_tolerance of 0 never stops early",
                )
                .with_hint("Every TextRank call will run textrank_max_iterations rounds"),
            ));
        }

        out
    }
}

// ─── 4. generator budget ────────────────────────────────────────────────────

struct GeneratorBudgetRule;

impl ValidationRule for GeneratorBudgetRule {
    fn name(&self) -> &str {
        "generator_budget"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let temperature = config.llm_temperature;
        if !temperature.is_finite() || !(0.0..=2.0).contains(&temperature) {
            out.push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::OutOfRange,
                "/llm_temperature",
                format!("llm_temperature must be within [0, 2], got {temperature}"),
            )));
        }

        if config.llm_tokens_per_sentence == 0 {
            out.push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::OutOfRange,
                "/llm_tokens_per_sentence",
                "llm_tokens_per_sentence must be at least 1",
            )));
        }

        out
    }
}

// ─── 5. unknown fields ──────────────────────────────────────────────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let mut names: Vec<&String> = config.unknown_fields.keys().collect();
        names.sort();

        names
            .into_iter()
            .map(|name| {
                let err = ConfigError::new(
                    ErrorCode::UnknownField,
                    format!("/{name}"),
                    format!("unknown field '{name}'"),
                );
                if config.strict {
                    ValidationDiagnostic::error(err)
                } else {
                    ValidationDiagnostic::warning(err)
                }
            })
            .collect()
    }
}
