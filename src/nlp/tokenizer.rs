//! Text normalization and tokenization
//!
//! Cleans extraction noise out of raw document text, splits it into sentences
//! using Unicode sentence boundaries (UAX #29) and produces the content tokens
//! every scorer works from.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordSet;
use crate::types::Sentence;

/// "page 12", "Page12", "PAGE 3"
static PAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bpage\s*\d+").expect("page marker pattern is valid"));

/// Page fractions such as "3/12"
static PAGE_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+/\d+\b").expect("page fraction pattern is valid"));

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercased abbreviations (without the final period) that are followed by
/// more of the same sentence: titles, name suffixes and reference markers
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "gen", "gov", "sen", "rep", "rev",
    "capt", "lt", "col", "sgt", "vs", "e.g", "i.e", "cf", "fig", "figs", "eq", "vol", "pp",
    "approx",
];

/// Splits raw text into normalized [`Sentence`]s
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: Arc<StopwordSet>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(StopwordSet::default()))
    }
}

impl TextNormalizer {
    /// Create a normalizer sharing the given stopword set
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    /// The stopword set in use
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Remove page artifacts and collapse whitespace
    pub fn clean(&self, text: &str) -> String {
        let text = PAGE_MARKER.replace_all(text, " ");
        let text = PAGE_FRACTION.replace_all(&text, " ");
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }

    /// Split text into sentence strings (after cleaning)
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean(text);
        let mut sentences: Vec<String> = Vec::new();
        let mut pending: Option<String> = None;

        for segment in cleaned.unicode_sentences() {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let current = match pending.take() {
                Some(mut buffer) => {
                    buffer.push(' ');
                    buffer.push_str(segment);
                    buffer
                }
                None => segment.to_string(),
            };

            if ends_with_abbreviation(&current) {
                pending = Some(current);
            } else {
                sentences.push(current);
            }
        }

        if let Some(rest) = pending {
            sentences.push(rest);
        }

        sentences
    }

    /// Content tokens of a single sentence
    ///
    /// Lowercases, drops punctuation, and keeps purely alphabetic words that
    /// are not stopwords.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let stripped: String = sentence
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
            .collect();

        stripped
            .split_whitespace()
            .filter(|word| word.chars().all(char::is_alphabetic))
            .filter(|word| !self.stopwords.is_stopword(word))
            .map(str::to_string)
            .collect()
    }

    /// Split a document into ordered, tokenized sentences
    pub fn normalize(&self, text: &str) -> Vec<Sentence> {
        self.split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = self.tokenize(&text);
                Sentence::new(index, text, tokens)
            })
            .collect()
    }
}

/// Whether a segment ends in an abbreviation or an initial rather than a
/// sentence terminator
fn ends_with_abbreviation(segment: &str) -> bool {
    let mut words = segment.split_whitespace().rev();
    let Some(last) = words.next() else {
        return false;
    };
    let Some(stem) = last.strip_suffix('.') else {
        return false;
    };
    let stem = trim_leading_punctuation(stem);

    if is_initial(stem) {
        // an initial continues a name: "John R. Tolkien", "J. R. R. Tolkien"
        return words.next().is_some_and(|previous| {
            let previous = trim_leading_punctuation(previous);
            previous.strip_suffix('.').is_some_and(is_initial)
                || previous.chars().next().is_some_and(char::is_uppercase)
        });
    }

    ABBREVIATIONS.contains(&stem.to_lowercase().as_str())
}

/// A single capital letter other than the words "I" and "A"
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_uppercase() && c != 'I' && c != 'A'
    )
}

fn trim_leading_punctuation(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
}
