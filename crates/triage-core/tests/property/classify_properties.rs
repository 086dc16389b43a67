//! Property tests for the classifier: totality, determinism, and the
//! invariants every result must satisfy regardless of input.

use proptest::prelude::*;

use triage_core::{classify, Category};

proptest! {
    /// Classification is total: no input string can panic.
    #[test]
    fn never_panics(text in ".*") {
        let _ = classify(&text);
    }

    /// Pure function: identical input, identical result.
    #[test]
    fn deterministic(text in ".*") {
        prop_assert_eq!(classify(&text), classify(&text));
    }

    /// Confidence stays inside the unit interval.
    #[test]
    fn confidence_in_unit_range(text in ".*") {
        let result = classify(&text);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    /// Whitespace-only input is always the no-classification result.
    #[test]
    fn whitespace_is_no_classification(text in r"\s*") {
        let result = classify(&text);
        prop_assert_eq!(result.category, Category::Note);
        prop_assert_eq!(result.confidence, 0.0);
        prop_assert_eq!(result.priority, None);
    }

    /// Non-empty input always carries a priority tier.
    #[test]
    fn non_empty_input_has_a_priority(text in ".*[^\\s].*") {
        prop_assert!(classify(&text).priority.is_some());
    }

    /// Denylisted words never appear among extracted names.
    #[test]
    fn denylist_never_leaks(text in "[A-Za-z ]{0,80}") {
        let result = classify(&text);
        for name in &result.extracted_names {
            prop_assert!(name != "Today" && name != "Tomorrow");
            prop_assert!(name != "The" && name != "This" && name != "That");
        }
    }
}
