//! Reduction of raw matches into the final [`TextAnnotation`].

use super::scanner::{EmoticonHit, RawMatches};
use crate::domain::lexicon::category;
use crate::domain::{EmotionGroup, NormalizedText};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Separator between sensitive-data values of one category.
pub const VALUE_SEPARATOR: char = ',';

/// Emotion and emoticon totals for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sentiment {
    /// Matched terms across positive emotion categories
    pub positive: usize,

    /// Matched terms across negative emotion categories
    pub negative: usize,

    /// Matched terms across ambiguous emotion categories
    pub ambiguous: usize,

    /// Sum of emoticon polarities over every occurrence
    pub emoticon_score: i32,
}

/// The input side of an annotation.
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    pub name: Option<String>,
    pub text: String,
    pub normalized: NormalizedText,
    pub metadata: IndexMap<String, Value>,
}

/// Immutable record of everything found in one text.
///
/// Categories without a hit are absent from every map; no map ever holds an
/// empty value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnnotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    text: String,
    normalized: String,
    filtered: String,
    sensitive_data: IndexMap<String, String>,
    has_sensitive_data: bool,
    urls: Vec<String>,
    competitor_names: Vec<String>,
    terms: IndexMap<String, Vec<String>>,
    emotions: IndexMap<String, Vec<String>>,
    emoticons: Vec<EmoticonHit>,
    sentiment: Sentiment,
    has_profanity: bool,
    has_identity_hate: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    metadata: IndexMap<String, Value>,
}

impl TextAnnotation {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The raw input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded text.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Case-folded text with stray symbol runs removed.
    pub fn filtered(&self) -> &str {
        &self.filtered
    }

    /// Sensitive-data category → comma-joined matched values.
    pub fn sensitive_data(&self) -> &IndexMap<String, String> {
        &self.sensitive_data
    }

    pub fn sensitive_value(&self, category: &str) -> Option<&str> {
        self.sensitive_data.get(category).map(String::as_str)
    }

    pub fn has_sensitive_data(&self) -> bool {
        self.has_sensitive_data
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn competitor_names(&self) -> &[String] {
        &self.competitor_names
    }

    /// Term category (slang, hedge, profanity, ...) → matched terms.
    pub fn terms(&self) -> &IndexMap<String, Vec<String>> {
        &self.terms
    }

    pub fn term_hits(&self, category: &str) -> Option<&[String]> {
        self.terms.get(category).map(Vec::as_slice)
    }

    /// Emotion category → matched terms.
    pub fn emotions(&self) -> &IndexMap<String, Vec<String>> {
        &self.emotions
    }

    /// Number of matched terms in an emotion category; 0 when absent.
    pub fn emotion_count(&self, category: &str) -> usize {
        self.emotions.get(category).map_or(0, Vec::len)
    }

    pub fn emoticons(&self) -> &[EmoticonHit] {
        &self.emoticons
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn has_profanity(&self) -> bool {
        self.has_profanity
    }

    pub fn has_identity_hate(&self) -> bool {
        self.has_identity_hate
    }

    pub fn metadata(&self) -> &IndexMap<String, Value> {
        &self.metadata
    }

    /// Structured export for downstream consumers.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Applies the join, omission and flag policies to raw matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, source: SourceText, raw: RawMatches) -> TextAnnotation {
        let sensitive_data: IndexMap<String, String> = raw
            .sensitive
            .into_iter()
            .filter_map(|(category, values)| {
                let joined = join_values(&values);
                (!joined.is_empty()).then_some((category, joined))
            })
            .collect();

        let terms: IndexMap<String, Vec<String>> = raw
            .terms
            .into_iter()
            .filter(|(_, hits)| !hits.is_empty())
            .collect();

        let mut sentiment = Sentiment {
            emoticon_score: raw.emoticons.iter().map(|h| i32::from(h.polarity)).sum(),
            ..Sentiment::default()
        };
        let mut emotions = IndexMap::new();
        for (name, (group, hits)) in raw.emotions {
            if hits.is_empty() {
                continue;
            }
            match group {
                EmotionGroup::Positive => sentiment.positive += hits.len(),
                EmotionGroup::Negative => sentiment.negative += hits.len(),
                EmotionGroup::Ambiguous => sentiment.ambiguous += hits.len(),
            }
            emotions.insert(name, hits);
        }

        let has_profanity = terms.contains_key(category::PROFANITY);
        let has_identity_hate = terms.contains_key(category::IDENTITY_HATE)
            || terms.contains_key(category::IDENTITY_HATE_PHRASES);

        TextAnnotation {
            name: source.name,
            text: source.text,
            normalized: source.normalized.lower,
            filtered: source.normalized.filtered,
            has_sensitive_data: !sensitive_data.is_empty(),
            sensitive_data,
            urls: raw.urls,
            competitor_names: raw.competitors,
            terms,
            emotions,
            emoticons: raw.emoticons,
            sentiment,
            has_profanity,
            has_identity_hate,
            metadata: source.metadata,
        }
    }
}

/// Joins values with the separator and trims trailing separators.
fn join_values(values: &[String]) -> String {
    let mut joined = String::new();
    for value in values {
        joined.push_str(value);
        joined.push(VALUE_SEPARATOR);
    }
    joined.trim_end_matches(VALUE_SEPARATOR).to_string()
}
