//! Property-based tests for docstring normalization and extraction
//!
//! These tests ensure the normalizer's structural guarantees (no outer
//! whitespace, no empty lines, idempotence) and the determinism of the
//! full extraction pipeline over arbitrary comment-like text.

use proptest::prelude::*;
use typetable::docstring::{docstring_lines, extract_values, values_from_line};

/// Generate text shaped like documentation comments: words, quotes,
/// punctuation, line breaks and indentation.
fn doc_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ a-zA-Z',.\\n]{0,200}").expect("valid regex")
}

proptest! {
    #[test]
    fn normalized_lines_have_no_outer_whitespace(doc in doc_strategy()) {
        for line in docstring_lines(&doc) {
            prop_assert!(!line.is_empty());
            prop_assert_eq!(line.trim(), line.as_str());
        }
    }

    #[test]
    fn normalizer_is_idempotent_on_each_line(doc in doc_strategy()) {
        for line in docstring_lines(&doc) {
            prop_assert_eq!(docstring_lines(&line), vec![line.clone()]);
        }
    }

    #[test]
    fn extraction_is_deterministic(doc in doc_strategy()) {
        prop_assert_eq!(extract_values(&doc), extract_values(&doc));
    }

    #[test]
    fn extracted_values_never_keep_trailing_list_punctuation(doc in doc_strategy()) {
        for value in extract_values(&doc) {
            prop_assert!(!value.ends_with(',') && !value.ends_with('.'));
        }
    }

    #[test]
    fn quote_pairs_bound_the_value_count(line in "[ a-z',.]{0,80}") {
        // each value consumes exactly one complete quote pair
        let quotes = line.matches('\'').count();
        prop_assert!(values_from_line(&line).len() <= quotes / 2);
    }
}
