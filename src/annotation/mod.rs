//! Text annotation: normalization, scanning and aggregation.
//!
//! [`TextAnnotator`] owns shared handles to the frozen pattern registry,
//! lexicon and dictionaries, and turns each input text into one immutable
//! [`TextAnnotation`]. It holds no mutable state, so one annotator can be
//! shared across threads.

pub mod aggregate;
pub mod scanner;

pub use aggregate::{Aggregator, Sentiment, SourceText, TextAnnotation, VALUE_SEPARATOR};
pub use scanner::{EmoticonHit, RawMatches, Scanner};

use crate::domain::{
    competitor_key, normalize, Dictionaries, DictionarySource, Lexicon, PatternRegistry,
};
use crate::error::ScanResult;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// One input to annotate.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub name: Option<String>,
    pub text: String,
    pub metadata: IndexMap<String, Value>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Annotation service over injected, read-only tables.
#[derive(Clone)]
pub struct TextAnnotator {
    patterns: Arc<PatternRegistry>,
    lexicon: Arc<Lexicon>,
    dictionaries: Arc<dyn DictionarySource>,
    locale: String,
}

impl std::fmt::Debug for TextAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnnotator")
            .field("patterns", &self.patterns.len())
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl TextAnnotator {
    /// Creates an annotator with no external dictionaries.
    pub fn new(patterns: Arc<PatternRegistry>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            patterns,
            lexicon,
            dictionaries: Arc::new(Dictionaries::new()),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Creates an annotator over the process-wide registry and bundled lexicon.
    pub fn bundled() -> ScanResult<Self> {
        Ok(Self::new(PatternRegistry::global()?, Lexicon::bundled()?))
    }

    pub fn with_dictionaries(mut self, dictionaries: Arc<dyn DictionarySource>) -> Self {
        self.dictionaries = dictionaries;
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Dictionary key holding competitor names for the active locale.
    pub fn competitor_key(&self) -> String {
        competitor_key(&self.locale)
    }

    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns true if the whole of `candidate` is a URL.
    pub fn is_url(&self, candidate: &str) -> bool {
        self.patterns.is_url(candidate)
    }

    pub fn annotate(&self, text: &str) -> TextAnnotation {
        self.annotate_document(Document::new(text))
    }

    pub fn annotate_named(&self, name: &str, text: &str) -> TextAnnotation {
        self.annotate_document(Document::new(text).with_name(name))
    }

    /// Normalizes, scans and aggregates one document.
    pub fn annotate_document(&self, document: Document) -> TextAnnotation {
        let key = self.competitor_key();
        let competitors = self.dictionaries.lookup(&key).unwrap_or(&[]);

        let normalized = normalize(&document.text);
        let raw = Scanner::new(&self.patterns, &self.lexicon, competitors)
            .scan(&document.text, &normalized);

        for (category, hits) in &raw.sensitive {
            info!(category = %category, matches = hits.len(), "potential sensitive data");
        }

        let source = SourceText {
            name: document.name,
            text: document.text,
            normalized,
            metadata: document.metadata,
        };
        let annotation = Aggregator::new().aggregate(source, raw);

        debug!(
            chars = annotation.text().chars().count(),
            sensitive = annotation.sensitive_data().len(),
            urls = annotation.urls().len(),
            competitors = annotation.competitor_names().len(),
            "annotated text"
        );
        annotation
    }
}
