/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values used across the extraction
/// strategies, making them easier to maintain and modify.
/// Token extraction constants
pub mod tokens {
    /// Default minimum length for extracted ASCII strings
    pub const DEFAULT_ASCII_MIN_LENGTH: usize = 4;
    /// Lowest printable ASCII byte (space)
    pub const PRINTABLE_ASCII_MIN: u8 = 0x20;
    /// Highest printable ASCII byte (tilde)
    pub const PRINTABLE_ASCII_MAX: u8 = 0x7E;
    /// Replacement inserted for each blanked-out substring
    pub const REPLACEMENT: &str = " ";
}

/// Delimiter bytes recognized by the positional strategies.
///
/// Every delimiter is a single ASCII byte, so its byte offset in the decoded
/// text is always a `char` boundary.
pub mod delimiters {
    pub const ANGLE_OPEN: u8 = b'<';
    pub const ANGLE_CLOSE: u8 = b'>';
    pub const BRACKET_OPEN: u8 = b'[';
    pub const BRACKET_CLOSE: u8 = b']';
    pub const CURLY_OPEN: u8 = b'{';
    pub const CURLY_CLOSE: u8 = b'}';
    pub const PAREN_OPEN: u8 = b'(';
    pub const PAREN_CLOSE: u8 = b')';
    pub const BACKTICK: u8 = b'`';
    pub const DOUBLE_QUOTE: u8 = b'"';
    pub const SINGLE_QUOTE: u8 = b'\'';
    pub const SPACE: u8 = b' ';
}

/// Candidate pre-filter constants for structured-document extraction
pub mod prefilter {
    /// A value must contain this to have URL-like shape
    pub const DOT: char = '.';
    /// A value must contain this to have URL-like shape
    pub const SLASH: char = '/';
}
