//! Candidate aggregation and URL discovery
//!
//! This module unions the output of every tokenizer strategy into one
//! candidate set and resolves each candidate through the validator.

use rustc_hash::FxHashSet;

use crate::core::constants::tokens;
use crate::logging;
use crate::tokenizer::Tokenizer;
use crate::validation::{LinkifyValidator, UrlValidator};

/// URL finder over an arbitrary blob, combining all tokenizer strategies.
pub struct BlobUrlFinder<V = LinkifyValidator> {
    tokenizer: Tokenizer,
    validator: V,
}

impl BlobUrlFinder {
    /// Create a finder from raw bytes or text, resolving candidates through
    /// the default linkify-backed validator.
    pub fn new(blob: impl Into<Vec<u8>>) -> Self {
        Self::with_validator(blob, LinkifyValidator)
    }
}

impl<V: UrlValidator> BlobUrlFinder<V> {
    /// Create a finder that resolves candidates through a custom validator.
    pub fn with_validator(blob: impl Into<Vec<u8>>, validator: V) -> Self {
        Self {
            tokenizer: Tokenizer::new(blob),
            validator,
        }
    }

    /// The tokenizer backing this finder, for callers that want to run
    /// individual strategies themselves.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Union every positional strategy plus ASCII-string extraction into a
    /// candidate set, then resolve each candidate to URLs.
    ///
    /// `strict` is forwarded to the bracket-like strategies; it trades
    /// recall for a smaller candidate set on bracket-dense input.
    pub fn find_urls(&self, strict: bool) -> FxHashSet<String> {
        let mut total_found = 0usize;
        let mut candidates: FxHashSet<String> = FxHashSet::default();

        for token in self.tokenizer.get_all_tokens(strict) {
            total_found += 1;
            candidates.insert(token);
        }
        for ascii_string in self
            .tokenizer
            .get_ascii_strings(tokens::DEFAULT_ASCII_MIN_LENGTH)
        {
            total_found += 1;
            candidates.insert(ascii_string);
        }

        logging::log_candidate_discovery(candidates.len(), total_found);

        let mut urls = FxHashSet::default();
        for candidate in &candidates {
            urls.extend(self.validator.find_urls(candidate));
        }

        logging::log_resolved_urls(urls.len());

        urls
    }
}
