//! Locale-keyed external dictionaries (competitor names and similar).

use crate::error::{ScanError, ScanResult};
use std::collections::HashMap;
use std::path::Path;

/// Read access to named term lists supplied by a surrounding pipeline.
pub trait DictionarySource: Send + Sync {
    /// Returns the terms stored under `key`, e.g. `"competitors_en"`.
    fn lookup(&self, key: &str) -> Option<&[String]>;
}

/// Key of the competitor-name dictionary for `locale`.
pub fn competitor_key(locale: &str) -> String {
    format!("competitors_{}", locale)
}

/// In-memory dictionary set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a dictionary.
    pub fn insert<I, S>(&mut self, key: &str, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.trim().is_empty())
            .collect();
        self.entries.insert(key.to_string(), terms);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<I, S>(mut self, key: &str, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, terms);
        self
    }

    /// Parses `{"competitors_en": ["Acme", "Globex"], ...}`.
    pub fn from_json_str(raw: &str) -> ScanResult<Self> {
        let map: HashMap<String, Vec<String>> = serde_json::from_str(raw)?;
        let mut dictionaries = Self::new();
        for (key, terms) in map {
            dictionaries.insert(&key, terms);
        }
        Ok(dictionaries)
    }

    /// Reads a dictionaries JSON file.
    pub fn load(path: &Path) -> ScanResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DictionarySource for Dictionaries {
    fn lookup(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}
