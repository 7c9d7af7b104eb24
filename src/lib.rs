//! urlsift - extract candidate URLs from arbitrary byte blobs
//!
//! A forensic/triage library: given bytes that may be malformed,
//! binary-contaminated, or partially structured (XML), enumerate every
//! plausible URL substring under many delimiter conventions and resolve the
//! candidates through a pluggable validator. Recall matters more than
//! precision; the validator rejects the garbage.
//!
//! ```
//! use urlsift::{BlobUrlFinder, Tokenizer};
//!
//! let tokenizer = Tokenizer::new("visit <http://example.com/path> now");
//! let tokens: Vec<String> = tokenizer.get_tokens_between_angle_brackets(true).collect();
//! assert_eq!(tokens, vec!["http://example.com/path"]);
//!
//! let finder = BlobUrlFinder::new(r#"see "https://example.com/x" here"#);
//! assert!(finder.find_urls(false).contains("https://example.com/x"));
//! ```

pub mod core;
pub mod discovery;
pub mod logging;
pub mod tokenizer;
pub mod validation;
pub mod xml;

// Re-export commonly used items
pub use discovery::BlobUrlFinder;
pub use tokenizer::Tokenizer;
pub use validation::{LinkifyValidator, UrlValidator};
pub use xml::XmlUrlFinder;
