//! Structured-document URL extraction
//!
//! Treats a blob as an XML document, harvests attribute values and element
//! text as candidates, and resolves them through the validator. A parse
//! failure is absorbed: the walker always yields a (possibly empty) result.

use log::debug;
use roxmltree::Document;
use rustc_hash::FxHashSet;

use crate::core::constants::prefilter;
use crate::tokenizer::decode_dropping_invalid;
use crate::validation::{LinkifyValidator, UrlValidator};

/// URL finder over a blob interpreted as an XML document.
pub struct XmlUrlFinder<V = LinkifyValidator> {
    text: String,
    validator: V,
}

impl XmlUrlFinder {
    /// Create a finder from raw bytes or text, resolving candidates through
    /// the default linkify-backed validator.
    pub fn new(blob: impl Into<Vec<u8>>) -> Self {
        Self::with_validator(blob, LinkifyValidator)
    }
}

impl<V: UrlValidator> XmlUrlFinder<V> {
    /// Create a finder that resolves candidates through a custom validator.
    pub fn with_validator(blob: impl Into<Vec<u8>>, validator: V) -> Self {
        let blob = blob.into();
        let text = decode_dropping_invalid(&blob);
        Self { text, validator }
    }

    /// Harvest candidate values from the document and resolve them to URLs.
    ///
    /// Candidates are the root element's representation, every attribute
    /// value, and every element's direct text payload, the latter two
    /// pre-filtered to values containing both `.` and `/` so the validator
    /// is not invoked on values with no URL-like shape. Unparsable input
    /// yields an empty set, never an error.
    pub fn find_urls(&self) -> FxHashSet<String> {
        let mut candidates: FxHashSet<String> = FxHashSet::default();

        match Document::parse(&self.text) {
            Ok(document) => {
                candidates.insert(format!("{:?}", document.root_element().tag_name()));

                for node in document.descendants() {
                    if !node.is_element() {
                        continue;
                    }

                    for attribute in node.attributes() {
                        if has_url_shape(attribute.value()) {
                            candidates.insert(attribute.value().to_string());
                        }
                    }

                    if let Some(text) = node.text() {
                        if has_url_shape(text) {
                            candidates.insert(text.to_string());
                        }
                    }
                }
            }
            Err(err) => {
                debug!("substituting empty document after parse failure: {err}");
            }
        }

        let mut urls = FxHashSet::default();
        for candidate in &candidates {
            urls.extend(self.validator.find_urls(candidate));
        }

        urls
    }
}

/// Cheap shape check so numeric ids and bare words never reach the
/// validator.
fn has_url_shape(value: &str) -> bool {
    !value.is_empty() && value.contains(prefilter::DOT) && value.contains(prefilter::SLASH)
}
