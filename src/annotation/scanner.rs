//! Match passes over one input text.
//!
//! The scanner borrows frozen tables and returns every raw hit it finds.
//! Nothing here allocates shared state or fails: no match is just an
//! empty collection.

use crate::domain::{
    fold_case, EmotionGroup, Lexicon, MatchMode, NormalizedText, PatternMatcher,
    PatternRegistry, TermTable,
};
use indexmap::IndexMap;
use serde::Serialize;

/// Characters stripped from both ends of a token before the URL test.
const URL_WRAPPERS: &[char] = &['(', ')', '<', '>', '[', ']', '"'];

/// Sentence punctuation stripped from the end of a URL token.
const URL_TRAILERS: &[char] = &['.', ',', ';', ':', '!', '?', '\''];

/// Punctuation allowed directly after an emoticon.
const EMOTICON_TRAILERS: &[char] = &['.', ',', ';', '!', '?'];

/// One emoticon occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmoticonHit {
    pub token: String,
    pub polarity: i8,
}

/// Hits from every pass, keyed by category, before aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatches {
    /// Every sensitive-data occurrence, duplicates kept, registry order
    pub sensitive: IndexMap<String, Vec<String>>,

    /// Distinct matching terms per term category, table order
    pub terms: IndexMap<String, Vec<String>>,

    /// Distinct matching terms per emotion category, table order
    pub emotions: IndexMap<String, (EmotionGroup, Vec<String>)>,

    /// Emoticon occurrences in order of appearance
    pub emoticons: Vec<EmoticonHit>,

    /// Distinct competitor names found
    pub competitors: Vec<String>,

    /// Whole-token URLs in order of appearance, duplicates kept
    pub urls: Vec<String>,
}

/// Runs the sensitive-data, lexicon and URL passes.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    patterns: &'a PatternRegistry,
    lexicon: &'a Lexicon,
    competitors: &'a [String],
}

impl<'a> Scanner<'a> {
    pub fn new(
        patterns: &'a PatternRegistry,
        lexicon: &'a Lexicon,
        competitors: &'a [String],
    ) -> Self {
        Self {
            patterns,
            lexicon,
            competitors,
        }
    }

    /// Runs all passes. `normalized` must be derived from `text`.
    pub fn scan(&self, text: &str, normalized: &NormalizedText) -> RawMatches {
        RawMatches {
            sensitive: self.scan_sensitive(text),
            terms: self.scan_terms(normalized),
            emotions: self.scan_emotions(normalized),
            emoticons: self.scan_emoticons(text),
            competitors: self.scan_competitors(normalized),
            urls: self.scan_urls(text),
        }
    }

    /// Every occurrence of every sensitive-data pattern in the raw text.
    pub fn scan_sensitive(&self, text: &str) -> IndexMap<String, Vec<String>> {
        let mut out = IndexMap::new();
        for pattern in self.patterns.patterns() {
            let hits = pattern.extract_all(text);
            if !hits.is_empty() {
                out.insert(
                    pattern.category().to_string(),
                    hits.into_iter().map(str::to_string).collect(),
                );
            }
        }
        out
    }

    pub fn scan_terms(&self, normalized: &NormalizedText) -> IndexMap<String, Vec<String>> {
        self.lexicon
            .term_tables()
            .filter_map(|(name, table)| {
                let hits = matching_terms(table, normalized);
                (!hits.is_empty()).then(|| (name.to_string(), hits))
            })
            .collect()
    }

    pub fn scan_emotions(
        &self,
        normalized: &NormalizedText,
    ) -> IndexMap<String, (EmotionGroup, Vec<String>)> {
        self.lexicon
            .emotion_tables()
            .filter_map(|(name, emotion)| {
                let hits = matching_terms(&emotion.table, normalized);
                (!hits.is_empty()).then(|| (name.to_string(), (emotion.group, hits)))
            })
            .collect()
    }

    /// Emoticons bounded by whitespace or the text edges, case-sensitive.
    ///
    /// Sentence punctuation may directly follow a token (`"thanks :)."`),
    /// but a token glued to a preceding word (`"great:)"`) is not counted.
    pub fn scan_emoticons(&self, text: &str) -> Vec<EmoticonHit> {
        let mut hits: Vec<(usize, EmoticonHit)> = Vec::new();
        for (token, polarity) in self.lexicon.emoticons().iter() {
            for (start, _) in text.match_indices(token) {
                if is_emoticon_bounded(text, start, token.len()) {
                    hits.push((
                        start,
                        EmoticonHit {
                            token: token.to_string(),
                            polarity,
                        },
                    ));
                }
            }
        }
        hits.sort_by_key(|(start, _)| *start);
        hits.into_iter().map(|(_, hit)| hit).collect()
    }

    /// Distinct competitor entries whose folded text occurs in the folded input.
    pub fn scan_competitors(&self, normalized: &NormalizedText) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for name in self.competitors {
            let folded = fold_case(name.trim());
            if MatchMode::Substring.is_match(&normalized.lower, &folded) && !out.contains(name) {
                out.push(name.clone());
            }
        }
        out
    }

    /// Whitespace tokens that are URLs in their entirety, once wrapping
    /// brackets and quotes and trailing sentence punctuation are removed.
    pub fn scan_urls(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|token| {
                token
                    .trim_start_matches(URL_WRAPPERS)
                    .trim_end_matches(|c: char| {
                        URL_WRAPPERS.contains(&c) || URL_TRAILERS.contains(&c)
                    })
            })
            .filter(|token| self.patterns.is_url(token))
            .map(str::to_string)
            .collect()
    }
}

/// Distinct terms of `table` found in either normalized view, table order.
fn matching_terms(table: &TermTable, normalized: &NormalizedText) -> Vec<String> {
    table
        .find_in(&[normalized.lower.as_str(), normalized.filtered.as_str()])
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn is_emoticon_bounded(text: &str, start: usize, len: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[start + len..].chars().next();
    before.map_or(true, char::is_whitespace)
        && after.map_or(true, |c| c.is_whitespace() || EMOTICON_TRAILERS.contains(&c))
}
