//! Sensitive-data and URL pattern registry.
//!
//! The registry is compiled once from a category → pattern-string source
//! and is read-only afterwards. All patterns are case-insensitive.

use super::PatternMatcher;
use crate::error::{ScanError, ScanResult};
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Category names of the bundled sensitive-data patterns.
pub mod category {
    pub const CREDIT_CARD: &str = "Credit Card";
    pub const SSN: &str = "SSN";
    pub const CREDENTIALS: &str = "credentials";
    pub const EMAIL_ADDRESS: &str = "emailaddress";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const SECRET: &str = "secret";
}

/// Bundled sensitive-data sources, in reporting order.
pub const SENSITIVE_DATA_PATTERNS: &[(&str, &str)] = &[
    (
        category::CREDIT_CARD,
        r"\d{4}[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}|\d{4}[ -]?\d{6}[ -]?\d{4}\d?/",
    ),
    (category::SSN, r"\b\d{3}[ .-]\d{2}[ .-]\d{4}\b"),
    (
        category::CREDENTIALS,
        r"(login( cred(ential)?s| info(rmation)?)?|cred(ential)?s) ?:\s*\S+\s+/?\s*\S+",
    ),
    (category::EMAIL_ADDRESS, r"([a-z0-9_\-.+]+)@\w+(\.\w+)*"),
    (category::USERNAME, r"(user( ?name)?|login): \S+"),
    (category::PASSWORD, r"(pass(word|phrase)?|secret): \S+"),
    (category::SECRET, r"\.*(secret|confidential|classified)\.*"),
];

/// Bundled URL source. Anchored: it recognizes a whole string as a URL.
pub const URL_PATTERN: &str =
    r"^(ht|f)tps?://[0-9a-z]([-.\w]*[0-9a-z])*(:[0-9]+)?/?([a-z0-9\-.?,'/\\+&%$#_=~]*)?$";

static GLOBAL: OnceCell<Arc<PatternRegistry>> = OnceCell::new();

/// One named sensitive-data pattern.
#[derive(Debug, Clone)]
pub struct SensitivePattern {
    category: String,
    regex: Regex,
}

impl SensitivePattern {
    /// Compiles `pattern` case-insensitively under `category`.
    pub fn new(category: &str, pattern: &str) -> ScanResult<Self> {
        Ok(Self {
            category: category.to_string(),
            regex: compile_pattern(category, pattern)?,
        })
    }
}

impl PatternMatcher for SensitivePattern {
    fn category(&self) -> &str {
        &self.category
    }

    fn pattern(&self) -> &Regex {
        &self.regex
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .collect()
    }
}

/// Immutable bank of compiled sensitive-data patterns plus the URL pattern.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<SensitivePattern>,
    url: Regex,
}

impl PatternRegistry {
    /// Compiles every source pattern, or none at all.
    ///
    /// Fails on the first pattern that does not compile and on a category
    /// that appears twice. Source order becomes reporting order.
    pub fn compile<I, K, V>(sources: I, url_pattern: &str) -> ScanResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();

        for (category, pattern) in sources {
            let category = category.as_ref();
            if !seen.insert(category.to_string()) {
                return Err(ScanError::DuplicateCategory {
                    category: category.to_string(),
                });
            }
            patterns.push(SensitivePattern::new(category, pattern.as_ref())?);
        }

        let url = compile_pattern("url", url_pattern)?;
        debug!(categories = patterns.len(), "compiled pattern registry");

        Ok(Self { patterns, url })
    }

    /// Compiles the bundled sensitive-data and URL sources.
    pub fn builtin() -> ScanResult<Self> {
        Self::compile(SENSITIVE_DATA_PATTERNS.iter().copied(), URL_PATTERN)
    }

    /// Returns the process-wide registry, compiling it on first use.
    pub fn global() -> ScanResult<Arc<Self>> {
        GLOBAL
            .get_or_try_init(|| Self::builtin().map(Arc::new))
            .cloned()
    }

    /// Sensitive-data patterns in reporting order.
    pub fn patterns(&self) -> &[SensitivePattern] {
        &self.patterns
    }

    /// Looks up a sensitive-data pattern by category.
    pub fn get(&self, category: &str) -> Option<&SensitivePattern> {
        self.patterns.iter().find(|p| p.category == category)
    }

    /// Category names in reporting order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if the whole of `candidate` is a URL.
    pub fn is_url(&self, candidate: &str) -> bool {
        self.url.is_match(candidate)
    }

    /// The anchored URL pattern.
    pub fn url_pattern(&self) -> &Regex {
        &self.url
    }
}

fn compile_pattern(category: &str, pattern: &str) -> ScanResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ScanError::InvalidPattern {
            category: category.to_string(),
            source,
        })
}
