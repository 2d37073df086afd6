//! Text normalization for lexicon lookups.
//!
//! Produces two views of an input: a case-folded copy used for every
//! case-insensitive containment test, and a filtered copy of that which
//! drops stray symbol runs so noisy text still hits phrase lists.

use serde::Serialize;

/// Case-folded and alphanumeric-filtered views of one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    /// Unicode lowercase of the input
    pub lower: String,

    /// `lower` with isolated symbol runs removed and whitespace collapsed
    pub filtered: String,
}

/// Builds both normalized views of `text`.
pub fn normalize(text: &str) -> NormalizedText {
    let lower = fold_case(text);
    let filtered = alphanumeric_filter(&lower);
    NormalizedText { lower, filtered }
}

/// Simple Unicode case fold.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Keeps letters and digits, plus whitespace or punctuation that touches one.
///
/// A non-alphanumeric character survives only when it is whitespace or
/// punctuation and the character directly before or after it in the input
/// is alphanumeric. Surviving whitespace is written as a single space and
/// never repeated.
///
/// ```
/// use lexscan::domain::alphanumeric_filter;
///
/// assert_eq!(alphanumeric_filter("you *** fool!!!"), "you fool!");
/// assert_eq!(alphanumeric_filter("--- ***"), "");
/// ```
pub fn alphanumeric_filter(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            out.push(c);
            continue;
        }

        if !(c.is_whitespace() || is_punctuation(c)) {
            continue;
        }

        let prev_alnum = i > 0 && chars[i - 1].is_alphanumeric();
        let next_alnum = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
        if !(prev_alnum || next_alnum) {
            continue;
        }

        if c.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }

    out
}

/// ASCII punctuation (excluding math, currency and modifier symbols) plus
/// the common Unicode quote and dash marks.
fn is_punctuation(c: char) -> bool {
    let ascii_symbol = matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
    (c.is_ascii_punctuation() && !ascii_symbol)
        || matches!(
            c,
            '\u{2010}'..='\u{2027}' | '\u{00ab}' | '\u{00bb}' | '\u{00a1}' | '\u{00bf}'
        )
}
