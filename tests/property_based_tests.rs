//! Property-style tests over hostile and unusual inputs.
//!
//! Each test feeds a wide range of inputs through the engine and checks an
//! invariant that must hold for all of them, rather than a specific output.

use lexscan::domain::{alphanumeric_filter, normalize};

mod common;
use common::*;

fn hostile_inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".repeat(1000),
        "a".repeat(10_000),
        "(".repeat(500),
        ":)".repeat(300),
        "4".repeat(64),
        "\n\r\t\u{0}".to_string(),
        "🔢📱☎️ 😀 :) 🙂".to_string(),
        "ǅemo İstanbul ΣΊΣΥΦΟΣ".to_string(),
        "\u{200b}password:\u{200b} x".to_string(),
        "https://".to_string(),
        "http://-.-/".to_string(),
        "password: ".to_string(),
        "secret".repeat(200),
        "1234-5678-9012-3456 ".repeat(50),
        "user@".repeat(100),
        "مرحبا بالعالم :(".to_string(),
        "x:)y :)z (:".to_string(),
    ]
}

#[test]
fn test_annotate_never_panics() {
    let annotator = bundled_annotator();
    for input in hostile_inputs() {
        let annotation = annotator.annotate(&input);
        assert_eq!(annotation.text(), input);
    }
}

#[test]
fn test_maps_never_hold_empty_values() {
    let annotator = bundled_annotator();
    for input in hostile_inputs() {
        assert_no_empty_values(&annotator.annotate(&input));
    }
}

#[test]
fn test_has_sensitive_data_tracks_map() {
    let annotator = bundled_annotator();
    for input in hostile_inputs() {
        let annotation = annotator.annotate(&input);
        assert_eq!(
            annotation.has_sensitive_data(),
            !annotation.sensitive_data().is_empty(),
            "flag mismatch for {input:?}"
        );
    }
}

#[test]
fn test_sensitive_values_never_end_with_separator() {
    let annotator = bundled_annotator();
    for input in hostile_inputs() {
        for (category, value) in annotator.annotate(&input).sensitive_data() {
            assert!(!value.ends_with(','), "{category} value {value:?}");
        }
    }
}

#[test]
fn test_urls_are_whole_tokens_of_input() {
    let annotator = bundled_annotator();
    for input in hostile_inputs() {
        let annotation = annotator.annotate(&input);
        for url in annotation.urls() {
            assert!(input.contains(url.as_str()));
            assert!(!url.chars().any(char::is_whitespace));
            assert!(annotator.is_url(url));
        }
    }
}

#[test]
fn test_annotation_is_deterministic() {
    let annotator = bundled_annotator();
    for input in hostile_inputs() {
        assert_eq!(annotator.annotate(&input), annotator.annotate(&input));
    }
}

#[test]
fn test_normalized_views() {
    for input in hostile_inputs() {
        let normalized = normalize(&input);
        assert_eq!(normalized.lower, input.to_lowercase());
        assert_eq!(normalized.filtered, alphanumeric_filter(&normalized.lower));
        assert!(!normalized.filtered.starts_with(' '));
        assert!(!normalized.filtered.ends_with(' '));
        assert!(!normalized.filtered.contains("  "));
    }
}

#[test]
fn test_emoticon_score_matches_hits() {
    let annotator = bundled_annotator();
    for input in hostile_inputs() {
        let annotation = annotator.annotate(&input);
        let expected: i32 = annotation
            .emoticons()
            .iter()
            .map(|hit| i32::from(hit.polarity))
            .sum();
        assert_eq!(annotation.sentiment().emoticon_score, expected);
    }
}
