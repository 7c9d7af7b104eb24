//! Property-based tests for urlsift using proptest
//!
//! These tests generate random inputs to test edge cases and ensure
//! robustness across a wide range of potential inputs. The core contract is
//! totality: no strategy may panic or error on any byte sequence.

use proptest::prelude::*;

use urlsift::validation::UrlValidator;
use urlsift::{BlobUrlFinder, LinkifyValidator, Tokenizer, XmlUrlFinder};

/// Arbitrary byte blobs, including invalid UTF-8
fn blob_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

/// Printable text with a healthy dose of delimiter characters
fn delimiter_heavy_text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r#"[ -~]{0,64}"#).expect("valid text pattern")
}

/// Space-free replacement tokens
fn replace_tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        proptest::string::string_regex(r"[a-z]{1,6}").expect("valid token pattern"),
        1..4,
    )
}

/// Count occurrences of a byte in text
fn occurrences(text: &str, byte: u8) -> usize {
    text.bytes().filter(|&b| b == byte).count()
}

/// Number of (open, close) index pairs with open strictly before close
fn cross_product_pairs(text: &str, open: u8, close: u8) -> usize {
    let opens: Vec<usize> = text
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == open)
        .map(|(i, _)| i)
        .collect();

    text.bytes()
        .enumerate()
        .filter(|&(_, b)| b == close)
        .map(|(c, _)| opens.iter().filter(|&&o| o < c).count())
        .sum()
}

proptest! {
    #[test]
    fn prop_no_strategy_panics_on_arbitrary_bytes(blob in blob_strategy()) {
        let tokenizer = Tokenizer::new(blob);

        let _ = tokenizer.get_all_tokens(false).count();
        let _ = tokenizer.get_all_tokens(true).count();
        let _ = tokenizer.get_line_tokens().count();
        let _ = tokenizer.get_split_tokens().count();
        let _ = tokenizer.get_ascii_strings(4).count();
        let _ = tokenizer.get_split_tokens_after_replace(&["x"]).len();
        let _ = tokenizer.get_tokens_between_spaces_after_replace(&["x"]).len();
    }

    #[test]
    fn prop_self_pairing_counts_and_contents(text in delimiter_heavy_text_strategy()) {
        let tokenizer = Tokenizer::new(text.as_str());
        let delimiter_count = occurrences(tokenizer.text(), b'"');

        let tokens: Vec<String> = tokenizer.get_tokens_between_double_quotes().collect();

        // N occurrences bound max(N-1, 0) adjacent windows, minus empties
        prop_assert!(tokens.len() <= delimiter_count.saturating_sub(1));
        for token in &tokens {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains('"'));
        }
    }

    #[test]
    fn prop_open_close_cross_product_count(text in delimiter_heavy_text_strategy()) {
        let tokenizer = Tokenizer::new(text.as_str());
        let expected = cross_product_pairs(tokenizer.text(), b'[', b']');

        let actual = tokenizer.get_tokens_between_brackets(false).count();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_strict_tokens_never_contain_close_marker(text in delimiter_heavy_text_strategy()) {
        let tokenizer = Tokenizer::new(text.as_str());

        for token in tokenizer.get_tokens_between_angle_brackets(true) {
            prop_assert!(!token.contains('>'));
        }
        for token in tokenizer.get_tokens_between_brackets(true) {
            prop_assert!(!token.contains(']'));
        }
        for token in tokenizer.get_tokens_between_curly_brackets(true) {
            prop_assert!(!token.contains('}'), "token contains close curly bracket");
        }
        for token in tokenizer.get_tokens_between_parentheses(true) {
            prop_assert!(!token.contains(')'));
        }
    }

    #[test]
    fn prop_ascii_strings_are_printable_and_long_enough(
        blob in blob_strategy(),
        min_length in 1usize..16,
    ) {
        let tokenizer = Tokenizer::new(blob);

        for ascii_string in tokenizer.get_ascii_strings(min_length) {
            prop_assert!(ascii_string.len() >= min_length);
            prop_assert!(ascii_string.bytes().all(|b| (0x20..=0x7E).contains(&b)));
        }
    }

    #[test]
    fn prop_replace_variants_purge_tokens_and_leave_original_alone(
        text in delimiter_heavy_text_strategy(),
        replace_tokens in replace_tokens_strategy(),
    ) {
        let tokenizer = Tokenizer::new(text.as_str());
        let text_before = tokenizer.text().to_string();

        let split_tokens = tokenizer.get_split_tokens_after_replace(&replace_tokens);
        let space_tokens = tokenizer.get_tokens_between_spaces_after_replace(&replace_tokens);

        for token in split_tokens.iter().chain(space_tokens.iter()) {
            for replaced in &replace_tokens {
                prop_assert!(
                    !token.contains(replaced.as_str()),
                    "token {token:?} still contains replaced substring {replaced:?}"
                );
            }
        }

        prop_assert_eq!(tokenizer.text(), text_before);
    }

    #[test]
    fn prop_repeated_invocations_are_identical(blob in blob_strategy()) {
        let tokenizer = Tokenizer::new(blob);

        let first: Vec<String> = tokenizer.get_all_tokens(false).collect();
        let second: Vec<String> = tokenizer.get_all_tokens(false).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_validator_is_total(text in any::<String>()) {
        let validator = LinkifyValidator;

        let _ = validator.find_urls(&text);
    }

    #[test]
    fn prop_xml_walker_is_total(blob in blob_strategy()) {
        let finder = XmlUrlFinder::new(blob);

        let _ = finder.find_urls();
    }

    #[test]
    fn prop_blob_finder_is_total(blob in blob_strategy()) {
        let finder = BlobUrlFinder::new(blob);

        let _ = finder.find_urls(false);
        let _ = finder.find_urls(true);
    }
}
