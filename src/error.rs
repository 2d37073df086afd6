//! Error types for the lexical scanning library.
//!
//! Only initialization can fail: compiling the pattern registry or loading
//! lexicon and dictionary data. Scanning itself never errors; a category
//! with no match is simply absent from the annotation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lexscan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Error type for registry, lexicon and dictionary initialization.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A source pattern failed to compile
    #[error("Pattern error for category '{category}': {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    /// The same category appeared twice in a pattern source
    #[error("Duplicate pattern category '{category}'")]
    DuplicateCategory { category: String },

    /// A term category could not be compiled into a matcher
    #[error("Term matcher error for category '{category}': {source}")]
    TermMatcher {
        category: String,
        #[source]
        source: aho_corasick::BuildError,
    },

    /// Lexicon or dictionary data is structurally valid JSON but semantically wrong
    #[error("Invalid lexicon data: {reason}")]
    Lexicon { reason: String },

    /// Lexicon or dictionary data is not in the expected JSON layout
    #[error("Malformed lexicon data: {source}")]
    LexiconFormat {
        #[from]
        source: serde_json::Error,
    },

    /// Error occurred while reading a data file
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Wraps an IO error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors raised while compiling the pattern registry.
    pub fn is_pattern_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::DuplicateCategory { .. }
        )
    }
}
