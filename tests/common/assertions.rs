//! Custom assertions for annotation testing.
//!
//! Domain-specific assertions that keep tests readable and give better
//! failure messages than raw map lookups.

use lexscan::TextAnnotation;

/// Asserts that a sensitive-data category is present and contains `fragment`.
///
/// # Panics
/// Panics if the category is absent or its value lacks the fragment.
pub fn assert_sensitive_contains(annotation: &TextAnnotation, category: &str, fragment: &str) {
    let value = annotation.sensitive_value(category).unwrap_or_else(|| {
        panic!(
            "Category '{}' should be present for text {:?}; found {:?}",
            category,
            annotation.text(),
            annotation.sensitive_data().keys().collect::<Vec<_>>()
        )
    });
    assert!(
        value.contains(fragment),
        "Category '{}' value {:?} should contain {:?}",
        category,
        value,
        fragment
    );
}

/// Asserts that `category` appears in none of the annotation's maps.
pub fn assert_category_absent(annotation: &TextAnnotation, category: &str) {
    assert!(
        !annotation.sensitive_data().contains_key(category),
        "'{}' unexpectedly present in sensitive data",
        category
    );
    assert!(
        !annotation.terms().contains_key(category),
        "'{}' unexpectedly present in terms",
        category
    );
    assert!(
        !annotation.emotions().contains_key(category),
        "'{}' unexpectedly present in emotions",
        category
    );
}

/// Asserts that no map holds an empty value.
pub fn assert_no_empty_values(annotation: &TextAnnotation) {
    for (category, value) in annotation.sensitive_data() {
        assert!(!value.is_empty(), "empty sensitive value for '{}'", category);
    }
    for (category, hits) in annotation.terms() {
        assert!(!hits.is_empty(), "empty term hits for '{}'", category);
    }
    for (category, hits) in annotation.emotions() {
        assert!(!hits.is_empty(), "empty emotion hits for '{}'", category);
    }
}

/// Asserts that the annotation found nothing at all.
pub fn assert_nothing_found(annotation: &TextAnnotation) {
    assert!(annotation.sensitive_data().is_empty());
    assert!(!annotation.has_sensitive_data());
    assert!(annotation.urls().is_empty());
    assert!(annotation.competitor_names().is_empty());
    assert!(annotation.terms().is_empty());
    assert!(annotation.emotions().is_empty());
    assert!(annotation.emoticons().is_empty());
    assert!(!annotation.has_profanity());
    assert!(!annotation.has_identity_hate());
}
