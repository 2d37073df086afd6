//! Categorized term lists and emoticon polarities.
//!
//! A [`Lexicon`] is assembled once, either from the bundled data file or
//! from a caller-supplied one, and then shared read-only by every scan.

use super::normalize::fold_case;
use crate::error::{ScanError, ScanResult};
use aho_corasick::AhoCorasick;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Well-known term categories.
pub mod category {
    pub const SLANG: &str = "slang";
    pub const HEDGE: &str = "hedge";
    pub const PROFANITY: &str = "profanity";
    pub const IDENTITY_HATE: &str = "identity-hate";
    pub const IDENTITY_HATE_PHRASES: &str = "identity-hate-phrases";
}

/// Layout version of the lexicon data file.
pub const LEXICON_VERSION: u32 = 1;

static BUNDLED_DATA: &str = include_str!("../../data/lexicon.json");
static BUNDLED: OnceCell<Arc<Lexicon>> = OnceCell::new();

/// How a term must sit in the text to count as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Plain substring containment
    #[default]
    Substring,

    /// Containment with non-alphanumeric characters (or text edges) on both sides
    Word,
}

impl MatchMode {
    /// Tests whether `needle` occurs in `haystack` under this mode.
    pub fn is_match(self, haystack: &str, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self {
            Self::Substring => haystack.contains(needle),
            Self::Word => haystack.char_indices().any(|(start, _)| {
                haystack[start..].starts_with(needle)
                    && self.accepts(haystack, start, start + needle.len())
            }),
        }
    }

    /// Checks the boundary rule for an occurrence at `start..end`.
    pub fn accepts(self, haystack: &str, start: usize, end: usize) -> bool {
        match self {
            Self::Substring => true,
            Self::Word => {
                let before = haystack[..start].chars().next_back();
                let after = haystack[end..].chars().next();
                !before.is_some_and(char::is_alphanumeric)
                    && !after.is_some_and(char::is_alphanumeric)
            }
        }
    }
}

/// Which family an emotion category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionGroup {
    Positive,
    Negative,
    Ambiguous,
}

/// Ordered terms of one category, compiled into a single automaton over
/// their case-folded forms.
#[derive(Debug, Clone)]
pub struct TermTable {
    terms: Vec<String>,
    mode: MatchMode,
    automaton: AhoCorasick,
    /// Index of the first term sharing each term's folded form
    primary: Vec<usize>,
}

impl TermTable {
    /// Builds a table, dropping blank entries and exact duplicates.
    pub fn new<I, S>(terms: I, mode: MatchMode) -> Result<Self, aho_corasick::BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.into().trim().to_string();
            if !term.is_empty() && !out.contains(&term) {
                out.push(term);
            }
        }

        let folded: Vec<String> = out.iter().map(|t| fold_case(t)).collect();
        let primary = folded
            .iter()
            .map(|f| folded.iter().position(|g| g == f).unwrap_or(0))
            .collect();
        let automaton = AhoCorasick::new(&folded)?;

        Ok(Self {
            terms: out,
            mode,
            automaton,
            primary,
        })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Distinct terms found in any of the case-folded `views`, in table order.
    ///
    /// Terms that fold to the same text are reported once, under the first
    /// spelling. Overlapping occurrences are all considered, so a short term
    /// nested in a longer one still counts.
    pub fn find_in(&self, views: &[&str]) -> Vec<&str> {
        let mut found = vec![false; self.terms.len()];
        let mut remaining = self
            .primary
            .iter()
            .enumerate()
            .filter(|(i, p)| i == *p)
            .count();

        for view in views {
            for hit in self.automaton.find_overlapping_iter(*view) {
                let id = self.primary[hit.pattern().as_usize()];
                if !found[id] && self.mode.accepts(view, hit.start(), hit.end()) {
                    found[id] = true;
                    remaining -= 1;
                }
            }
            if remaining == 0 {
                break;
            }
        }

        self.terms
            .iter()
            .zip(found)
            .filter_map(|(term, hit)| hit.then_some(term.as_str()))
            .collect()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl PartialEq for TermTable {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms && self.mode == other.mode
    }
}

impl Eq for TermTable {}

/// Emotion terms for one category, tagged with their group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionTable {
    pub group: EmotionGroup,
    pub table: TermTable,
}

/// Emoticon token → polarity. The first polarity given for a token wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmoticonTable {
    entries: IndexMap<String, i8>,
}

impl EmoticonTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an emoticon. Rejects polarities outside -1..=1.
    pub fn insert(&mut self, token: &str, polarity: i8) -> ScanResult<()> {
        if !(-1..=1).contains(&polarity) {
            return Err(ScanError::Lexicon {
                reason: format!("emoticon '{}' has polarity {}", token, polarity),
            });
        }
        let token = token.trim();
        if !token.is_empty() {
            self.entries.entry(token.to_string()).or_insert(polarity);
        }
        Ok(())
    }

    pub fn polarity(&self, token: &str) -> Option<i8> {
        self.entries.get(token).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i8)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only store of every term category, emotion category and emoticon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    terms: IndexMap<String, TermTable>,
    emotions: IndexMap<String, EmotionTable>,
    emoticons: EmoticonTable,
}

impl Lexicon {
    /// Starts an empty lexicon builder.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Returns the lexicon embedded in the crate, parsed on first use.
    pub fn bundled() -> ScanResult<Arc<Self>> {
        BUNDLED
            .get_or_try_init(|| Self::from_json_str(BUNDLED_DATA).map(Arc::new))
            .cloned()
    }

    /// Reads a lexicon data file.
    pub fn load(path: &Path) -> ScanResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    /// Parses the lexicon JSON layout.
    pub fn from_json_str(raw: &str) -> ScanResult<Self> {
        let file: LexiconFile = serde_json::from_str(raw)?;
        if file.version != LEXICON_VERSION {
            return Err(ScanError::Lexicon {
                reason: format!(
                    "unsupported lexicon version {} (expected {})",
                    file.version, LEXICON_VERSION
                ),
            });
        }

        if let Some(name) = file
            .word_bounded
            .iter()
            .find(|name| !file.terms.contains_key(name.as_str()))
        {
            return Err(ScanError::Lexicon {
                reason: format!("word_bounded names unknown term category '{}'", name),
            });
        }

        let mut builder = Self::builder();
        for (name, terms) in file.terms {
            let mode = if file.word_bounded.contains(&name) {
                MatchMode::Word
            } else {
                MatchMode::Substring
            };
            builder = builder.terms(&name, terms, mode);
        }
        for (group, categories) in file.emotions {
            for (name, terms) in categories {
                // underscores join multi-word entries in the data file
                let terms = terms.into_iter().map(|t| t.replace('_', " "));
                builder = builder.emotion(&name, group, terms);
            }
        }
        for (token, polarity) in file.emoticons {
            builder = builder.emoticon(&token, polarity);
        }

        let lexicon = builder.build()?;
        debug!(
            term_categories = lexicon.terms.len(),
            emotion_categories = lexicon.emotions.len(),
            emoticons = lexicon.emoticons.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn term_tables(&self) -> impl Iterator<Item = (&str, &TermTable)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn emotion_tables(&self) -> impl Iterator<Item = (&str, &EmotionTable)> {
        self.emotions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn terms(&self, category: &str) -> Option<&TermTable> {
        self.terms.get(category)
    }

    pub fn emotion(&self, category: &str) -> Option<&EmotionTable> {
        self.emotions.get(category)
    }

    pub fn emoticons(&self) -> &EmoticonTable {
        &self.emoticons
    }
}

/// Assembles a [`Lexicon`] in code. Validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    terms: IndexMap<String, (Vec<String>, MatchMode)>,
    emotions: IndexMap<String, (EmotionGroup, Vec<String>)>,
    emoticons: Vec<(String, i8)>,
}

impl LexiconBuilder {
    /// Adds (or replaces) a term category.
    pub fn terms<I, S>(mut self, category: &str, terms: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms.into_iter().map(Into::into).collect();
        self.terms.insert(category.to_string(), (terms, mode));
        self
    }

    /// Adds (or replaces) an emotion category.
    pub fn emotion<I, S>(mut self, category: &str, group: EmotionGroup, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms.into_iter().map(Into::into).collect();
        self.emotions.insert(category.to_string(), (group, terms));
        self
    }

    pub fn emoticon(mut self, token: &str, polarity: i8) -> Self {
        self.emoticons.push((token.to_string(), polarity));
        self
    }

    pub fn build(self) -> ScanResult<Lexicon> {
        let compile = |category: &str, terms: Vec<String>, mode| {
            TermTable::new(terms, mode).map_err(|source| ScanError::TermMatcher {
                category: category.to_string(),
                source,
            })
        };

        let mut terms = IndexMap::with_capacity(self.terms.len());
        for (category, (list, mode)) in self.terms {
            let table = compile(&category, list, mode)?;
            terms.insert(category, table);
        }

        let mut emotions = IndexMap::with_capacity(self.emotions.len());
        for (category, (group, list)) in self.emotions {
            let table = compile(&category, list, MatchMode::Substring)?;
            emotions.insert(category, EmotionTable { group, table });
        }

        let mut emoticons = EmoticonTable::new();
        for (token, polarity) in &self.emoticons {
            emoticons.insert(token, *polarity)?;
        }

        Ok(Lexicon {
            terms,
            emotions,
            emoticons,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    version: u32,
    #[serde(default)]
    word_bounded: Vec<String>,
    #[serde(default)]
    terms: IndexMap<String, Vec<String>>,
    #[serde(default)]
    emotions: IndexMap<EmotionGroup, IndexMap<String, Vec<String>>>,
    #[serde(default)]
    emoticons: Vec<(String, i8)>,
}
