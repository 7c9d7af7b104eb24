//! Candidate-to-URL resolution
//!
//! This module defines the validator seam the extraction components hand
//! their candidates to, plus the default implementation backed by linkify.

use linkify::{LinkFinder, LinkKind};
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

// Reuse LinkFinder instance for better performance
static LINK_FINDER: Lazy<LinkFinder> = Lazy::new(|| {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
});

/// Resolves a single candidate string to the set of URLs it contains.
///
/// Implementations must accept arbitrary strings, including empty,
/// whitespace-only, and non-URL-shaped input, and must never fail; the
/// result is the (possibly empty) subset recognized as valid URLs.
pub trait UrlValidator {
    fn find_urls(&self, candidate: &str) -> FxHashSet<String>;
}

/// Default validator backed by the linkify crate's URL recognizer.
#[derive(Default, Debug, Clone, Copy)]
pub struct LinkifyValidator;

impl UrlValidator for LinkifyValidator {
    fn find_urls(&self, candidate: &str) -> FxHashSet<String> {
        LINK_FINDER
            .links(candidate)
            .map(|link| link.as_str().to_string())
            .collect()
    }
}
