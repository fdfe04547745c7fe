//! Property-based tests for search query encoding.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::query::{clamp_limit, encode_terms, SearchQuery};
    use proptest::prelude::*;

    // ============================================================================
    // encode_terms property tests
    // ============================================================================

    proptest! {
        /// Property: the encoded query never contains a literal space or `%20`
        #[test]
        fn encode_terms_never_emits_spaces(input in ".*") {
            let result = encode_terms(&input);
            prop_assert!(!result.contains(' '), "space in {:?} from {:?}", result, input);
            prop_assert!(!result.contains("%20"), "%20 in {:?} from {:?}", result, input);
        }

        /// Property: every literal `+` in the output is a token separator
        #[test]
        fn encode_terms_plus_count_matches_spaces(input in ".*") {
            let result = encode_terms(&input);
            prop_assert_eq!(
                result.matches('+').count(),
                input.matches(' ').count()
            );
        }

        /// Property: alphanumeric words joined by spaces come out joined by `+`
        #[test]
        fn encode_terms_joins_words_with_plus(words in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..6)) {
            let result = encode_terms(&words.join(" "));
            prop_assert_eq!(result, words.join("+"));
        }

        /// Property: the output is pure printable ASCII
        #[test]
        fn encode_terms_output_is_ascii(input in ".*") {
            let result = encode_terms(&input);
            prop_assert!(result.is_ascii());
            prop_assert!(!result.chars().any(|c| c.is_ascii_control()));
        }
    }

    // ============================================================================
    // SearchQuery property tests
    // ============================================================================

    proptest! {
        /// Property: the page size always lands in 1..=100
        #[test]
        fn limit_always_clamped(requested in any::<i64>()) {
            let limit = clamp_limit(requested);
            prop_assert!((1..=100).contains(&limit));
        }

        /// Property: the stars qualifier appears exactly when min_stars > 0
        #[test]
        fn stars_qualifier_iff_positive(term in "[a-z]{0,10}", stars in 0u64..100_000) {
            let query = SearchQuery::new(term).min_stars(stars);
            let encoded = query.encoded_terms();
            if stars > 0 {
                let expected = format!("stars:>={}", stars);
                prop_assert!(encoded.contains(&expected));
            } else {
                prop_assert!(!encoded.contains("stars:"));
            }
        }

        /// Property: the full query string never carries an encoded space
        #[test]
        fn query_string_has_no_encoded_space(
            term in ".{0,20}",
            language in "[a-zA-Z+# ]{0,10}",
            topic in "[a-z -]{0,10}",
        ) {
            let query = SearchQuery::new(term).language(language).topic(topic);
            let full = query.to_query_string();
            prop_assert!(!full.contains(' '));
            prop_assert!(!full.contains("%20"));
        }
    }
}
