//! Lexical feature extraction for free text.
//!
//! Given a block of text, this library produces a structured annotation:
//! sensitive-data spans, URLs, competitor-name mentions, emotion and
//! emoticon signals, and profanity / identity-hate flags. Everything is
//! driven by a fixed bank of compiled patterns and categorized term lists;
//! there is no statistical classification.
//!
//! # Architecture
//!
//! - [`domain`]: pattern registry, lexicon store, dictionaries, normalizer
//! - [`annotation`]: scanner, aggregator and the [`TextAnnotator`] service
//! - [`error`]: initialization errors (scanning itself never fails)
//!
//! # Quick Start
//!
//! ```
//! use lexscan::TextAnnotator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let annotator = TextAnnotator::bundled()?;
//! let annotation = annotator.annotate("card 4111 1111 1111 1111, see https://example.com/path");
//!
//! assert!(annotation.has_sensitive_data());
//! assert_eq!(annotation.sensitive_value("Credit Card"), Some("4111 1111 1111 1111"));
//! assert_eq!(annotation.urls(), ["https://example.com/path"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Competitor names
//!
//! ```
//! use lexscan::{Dictionaries, TextAnnotator};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dictionaries = Dictionaries::new().with("competitors_en", ["Acme", "Globex"]);
//! let annotator = TextAnnotator::bundled()?.with_dictionaries(Arc::new(dictionaries));
//!
//! let annotation = annotator.annotate("We beat ACME every day");
//! assert_eq!(annotation.competitor_names(), ["Acme"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Fixture lexicons
//!
//! ```
//! use lexscan::domain::{Lexicon, MatchMode, PatternRegistry};
//! use lexscan::TextAnnotator;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lexicon = Lexicon::builder()
//!     .terms("profanity", ["darn"], MatchMode::Substring)
//!     .build()?;
//! let annotator = TextAnnotator::new(PatternRegistry::global()?, Arc::new(lexicon));
//!
//! assert!(annotator.annotate("Darn it").has_profanity());
//! # Ok(())
//! # }
//! ```

pub mod annotation;
pub mod domain;
pub mod error;

pub use annotation::{
    Aggregator, Document, EmoticonHit, RawMatches, Scanner, Sentiment, TextAnnotation,
    TextAnnotator,
};
pub use domain::{
    Dictionaries, DictionarySource, Lexicon, MatchMode, NormalizedText, PatternMatcher,
    PatternRegistry,
};
pub use error::{ScanError, ScanResult};
