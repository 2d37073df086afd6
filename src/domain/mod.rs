//! Domain models: patterns, lexicons, dictionaries and normalization.
//!
//! Everything in this module is built once and read many times. The
//! [`annotation`](crate::annotation) layer borrows these tables for each scan.

pub mod dictionary;
pub mod lexicon;
pub mod normalize;
pub mod patterns;

pub use dictionary::{competitor_key, Dictionaries, DictionarySource};
pub use lexicon::{
    EmoticonTable, EmotionGroup, EmotionTable, Lexicon, LexiconBuilder, MatchMode, TermTable,
};
pub use normalize::{alphanumeric_filter, fold_case, normalize, NormalizedText};
pub use patterns::{PatternRegistry, SensitivePattern, SENSITIVE_DATA_PATTERNS, URL_PATTERN};

use regex::Regex;

/// A named regex that reports every occurrence it finds.
pub trait PatternMatcher: Send + Sync {
    fn category(&self) -> &str;
    fn pattern(&self) -> &Regex;
    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str>;
}
