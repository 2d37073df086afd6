//! Test fixtures: small lexicons and preconfigured annotators.

use lexscan::domain::{EmotionGroup, Lexicon, MatchMode, PatternRegistry};
use lexscan::{Dictionaries, TextAnnotator};
use std::sync::Arc;

/// Competitor names used by the fixture dictionaries.
pub const COMPETITORS: [&str; 2] = ["Acme", "Globex"];

/// A lexicon small enough to reason about in assertions.
pub fn fixture_lexicon() -> Lexicon {
    Lexicon::builder()
        .terms("slang", ["brb", "u", "lol"], MatchMode::Word)
        .terms("hedge", ["perhaps", "in my opinion"], MatchMode::Word)
        .terms("profanity", ["damn", "crap"], MatchMode::Substring)
        .terms("identity-hate", ["gypo"], MatchMode::Substring)
        .terms(
            "identity-hate-phrases",
            ["full of white trash"],
            MatchMode::Substring,
        )
        .emotion("joy", EmotionGroup::Positive, ["cheerful", "walk on air"])
        .emotion("sadness", EmotionGroup::Negative, ["gloomy", "blue"])
        .emotion("surprise", EmotionGroup::Ambiguous, ["amazed"])
        .emoticon(":)", 1)
        .emoticon(":(", -1)
        .emoticon(";)", 0)
        .build()
        .expect("fixture lexicon is valid")
}

/// Annotator over the bundled patterns and the fixture lexicon.
pub fn fixture_annotator() -> TextAnnotator {
    let patterns = PatternRegistry::global().expect("bundled patterns compile");
    TextAnnotator::new(patterns, Arc::new(fixture_lexicon()))
}

/// Fixture annotator with `competitors_en` = [`COMPETITORS`].
pub fn annotator_with_competitors() -> TextAnnotator {
    let dictionaries = Dictionaries::new().with("competitors_en", COMPETITORS);
    fixture_annotator().with_dictionaries(Arc::new(dictionaries))
}

/// Annotator over everything bundled with the crate.
pub fn bundled_annotator() -> TextAnnotator {
    TextAnnotator::bundled().expect("bundled tables load")
}
