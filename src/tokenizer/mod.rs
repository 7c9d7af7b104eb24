//! Multi-strategy candidate tokenization
//!
//! This module turns an arbitrary byte blob into candidate substrings under
//! many delimiter conventions at once. It is deliberately over-generative:
//! recall matters more than precision, and a downstream validator rejects
//! the garbage.

use memchr::memchr_iter;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::{delimiters, tokens};

static LINE_TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\r\n]+").expect("Failed to compile line token pattern"));

static SPLIT_TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+").expect("Failed to compile split token pattern"));

/// Tokenizer over a single immutable blob.
///
/// Construction normalizes the input to one canonical byte form and derives
/// a text view from it by dropping invalid UTF-8 sequences. Both views are
/// immutable for the lifetime of the instance; every strategy is a pure
/// function of them. No strategy can fail or panic, whatever the input.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    blob: Vec<u8>,
    text: String,
}

impl Tokenizer {
    /// Create a tokenizer from raw bytes or text.
    ///
    /// Text input is encoded to UTF-8 first so the byte view and the text
    /// view are always derived from the same canonical bytes.
    pub fn new(blob: impl Into<Vec<u8>>) -> Self {
        let blob = blob.into();
        let text = decode_dropping_invalid(&blob);
        Self { blob, text }
    }

    /// The raw byte view of the blob.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// The decoded text view of the blob (invalid UTF-8 sequences dropped).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Concatenate the output of every positional strategy.
    ///
    /// No deduplication happens here; downstream callers union candidates
    /// into a set. `strict` is shared by all bracket-like strategies.
    pub fn get_all_tokens(&self, strict: bool) -> impl Iterator<Item = String> + '_ {
        self.get_line_tokens()
            .chain(self.get_split_tokens())
            .chain(self.get_tokens_between_angle_brackets(strict))
            .chain(self.get_tokens_between_backticks())
            .chain(self.get_tokens_between_brackets(strict))
            .chain(self.get_tokens_between_curly_brackets(strict))
            .chain(self.get_tokens_between_double_quotes())
            .chain(self.get_tokens_between_parentheses(strict))
            .chain(self.get_tokens_between_single_quotes())
            .chain(self.get_tokens_between_spaces())
    }

    /// Every maximal run of characters containing no CR or LF.
    pub fn get_line_tokens(&self) -> impl Iterator<Item = String> + '_ {
        LINE_TOKEN_PATTERN
            .find_iter(&self.text)
            .map(|m| m.as_str().to_string())
    }

    /// Every maximal run of non-whitespace characters.
    pub fn get_split_tokens(&self) -> impl Iterator<Item = String> + '_ {
        SPLIT_TOKEN_PATTERN
            .find_iter(&self.text)
            .map(|m| m.as_str().to_string())
    }

    /// Split tokens of a derived tokenizer whose text has every listed
    /// substring blanked out with a single space.
    ///
    /// The original tokenizer is never mutated; a fresh instance is built
    /// and consumed during the call, which is why this returns an owned
    /// sequence rather than a borrowing iterator.
    pub fn get_split_tokens_after_replace<S: AsRef<str>>(
        &self,
        replace_tokens: &[S],
    ) -> Vec<String> {
        self.with_replacements(replace_tokens)
            .get_split_tokens()
            .collect()
    }

    /// Every maximal run of printable ASCII bytes (0x20-0x7E) of at least
    /// `min_length` bytes, over the raw byte view.
    ///
    /// Operates on raw bytes rather than the text view so that runs
    /// adjacent to invalid UTF-8 are still seen.
    pub fn get_ascii_strings(&self, min_length: usize) -> impl Iterator<Item = String> + '_ {
        self.blob
            .split(|&b| !(tokens::PRINTABLE_ASCII_MIN..=tokens::PRINTABLE_ASCII_MAX).contains(&b))
            .filter(move |run| !run.is_empty() && run.len() >= min_length)
            .map(|run| String::from_utf8_lossy(run).into_owned())
    }

    pub fn get_tokens_between_angle_brackets(
        &self,
        strict: bool,
    ) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_open_and_close(delimiters::ANGLE_OPEN, delimiters::ANGLE_CLOSE, strict)
    }

    pub fn get_tokens_between_backticks(&self) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_sequence(delimiters::BACKTICK)
    }

    pub fn get_tokens_between_brackets(&self, strict: bool) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_open_and_close(
            delimiters::BRACKET_OPEN,
            delimiters::BRACKET_CLOSE,
            strict,
        )
    }

    pub fn get_tokens_between_curly_brackets(
        &self,
        strict: bool,
    ) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_open_and_close(delimiters::CURLY_OPEN, delimiters::CURLY_CLOSE, strict)
    }

    pub fn get_tokens_between_double_quotes(&self) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_sequence(delimiters::DOUBLE_QUOTE)
    }

    pub fn get_tokens_between_parentheses(
        &self,
        strict: bool,
    ) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_open_and_close(delimiters::PAREN_OPEN, delimiters::PAREN_CLOSE, strict)
    }

    pub fn get_tokens_between_single_quotes(&self) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_sequence(delimiters::SINGLE_QUOTE)
    }

    pub fn get_tokens_between_spaces(&self) -> impl Iterator<Item = String> + '_ {
        self.tokens_between_sequence(delimiters::SPACE)
    }

    /// Space-bounded tokens of a derived tokenizer whose text has every
    /// listed substring blanked out with a single space.
    pub fn get_tokens_between_spaces_after_replace<S: AsRef<str>>(
        &self,
        replace_tokens: &[S],
    ) -> Vec<String> {
        self.with_replacements(replace_tokens)
            .get_tokens_between_spaces()
            .collect()
    }

    /// Substrings strictly between every adjacent pair of occurrences of a
    /// self-pairing delimiter. N occurrences yield max(N-1, 0) candidates;
    /// empty candidates are filtered out.
    fn tokens_between_sequence(&self, delimiter: u8) -> impl Iterator<Item = String> + '_ {
        let text = self.text.as_str();
        let indices = self.indices_of(delimiter);
        (1..indices.len())
            .map(move |i| &text[indices[i - 1] + 1..indices[i]])
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }

    /// Substrings strictly between every open-marker occurrence and every
    /// later close-marker occurrence.
    ///
    /// This is the full open x close cross product, not nearest-match
    /// pairing: with malformed or nested input the "correct" pairing is
    /// unknown, and maximal recall requires emitting every span. Candidate
    /// count is O(open_count * close_count), which is a performance cliff on
    /// input dense in bracket characters; callers wanting bounded cost must
    /// cap blob size or pass `strict`, which drops any candidate that still
    /// contains the close marker.
    fn tokens_between_open_and_close(
        &self,
        open: u8,
        close: u8,
        strict: bool,
    ) -> impl Iterator<Item = String> + '_ {
        let text = self.text.as_str();
        let open_indices = self.indices_of(open);
        let close_indices = self.indices_of(close);
        let close_char = char::from(close);

        open_indices
            .into_iter()
            .flat_map(move |o| {
                close_indices
                    .clone()
                    .into_iter()
                    .filter(move |&c| o < c)
                    .map(move |c| &text[o + 1..c])
            })
            .filter(move |token| !strict || !token.contains(close_char))
            .map(str::to_string)
    }

    /// Byte offsets of every occurrence of an ASCII delimiter in the text.
    /// ASCII bytes only occur as standalone characters in UTF-8, so these
    /// offsets are always valid slice boundaries.
    fn indices_of(&self, delimiter: u8) -> Vec<usize> {
        memchr_iter(delimiter, self.text.as_bytes()).collect()
    }

    /// Build an independent tokenizer whose text has every listed substring
    /// replaced with a single space. `self` is left untouched.
    fn with_replacements<S: AsRef<str>>(&self, replace_tokens: &[S]) -> Tokenizer {
        let mut text = self.text.clone();
        for token in replace_tokens {
            text = text.replace(token.as_ref(), tokens::REPLACEMENT);
        }

        Tokenizer::new(text)
    }
}

/// Decode bytes to text, dropping invalid UTF-8 sequences entirely rather
/// than substituting replacement characters, so garbage bytes never surface
/// inside candidates.
pub(crate) fn decode_dropping_invalid(blob: &[u8]) -> String {
    let mut text = String::with_capacity(blob.len());
    for chunk in blob.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    text
}
