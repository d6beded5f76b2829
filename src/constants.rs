//! Application constants for the delimited reader
//!
//! This module contains all configuration keys and default values
//! used to build [`crate::config::ParserSettings`].

// =============================================================================
// Value Handling
// =============================================================================

/// Value that, after trimming, is turned into an explicit null
pub const NIL_CHARACTER_KEY: &str = "nil-character";
pub const NIL_CHARACTER_DEFAULT: &str = "";

/// Strip leading spaces from each value before the null check
pub const VALUE_LEFT_TRIM_KEY: &str = "value-left-trim";
pub const VALUE_LEFT_TRIM_DEFAULT: bool = false;

/// Strip trailing spaces from each value before the null check
pub const VALUE_RIGHT_TRIM_KEY: &str = "value-right-trim";
pub const VALUE_RIGHT_TRIM_DEFAULT: bool = false;

// =============================================================================
// Line Splitting and Decoding
// =============================================================================

/// Delimiter between fields and between header columns
pub const SEPARATOR_CHARACTER_KEY: &str = "separator-character";
pub const SEPARATOR_CHARACTER_DEFAULT: &str = ",";

/// Encoding label used to decode the byte source
pub const FILE_ENCODE_KEY: &str = "file-encode";
pub const FILE_ENCODE_DEFAULT: &str = "UTF-8";

/// Number of leading lines discarded before any header or data
pub const SKIP_LINE_KEY: &str = "skip-line";
pub const SKIP_LINE_DEFAULT: usize = 0;

// =============================================================================
// Column Resolution
// =============================================================================

/// Use the first line as the column-name source
pub const ENABLE_HEADER_KEY: &str = "enable-header";
pub const ENABLE_HEADER_DEFAULT: bool = false;

/// If false, header-derived column names are upper-cased
pub const COLUMN_CASE_SENSITIVE_KEY: &str = "column-case-sensitive";
pub const COLUMN_CASE_SENSITIVE_DEFAULT: bool = false;

/// Explicit comma-separated column names, used when header mode is off
pub const COLUMN_SERIALIZE_KEY: &str = "column-serialize";

/// Separator for list-valued configuration entries
pub const CONFIG_LIST_SEPARATOR: char = ',';

/// Prefix of generated positional column names (`COL_0`, `COL_1`, ...)
pub const AUTO_COLUMN_PREFIX: &str = "COL_";

// =============================================================================
// Error Policy
// =============================================================================

/// Abort the whole pass on the first arity mismatch instead of skipping the line
pub const HALT_IF_ERROR_KEY: &str = "halt-if-error";
pub const HALT_IF_ERROR_DEFAULT: bool = true;

/// Every key understood by the config resolver
pub const KNOWN_KEYS: &[&str] = &[
    NIL_CHARACTER_KEY,
    SEPARATOR_CHARACTER_KEY,
    FILE_ENCODE_KEY,
    SKIP_LINE_KEY,
    VALUE_LEFT_TRIM_KEY,
    VALUE_RIGHT_TRIM_KEY,
    ENABLE_HEADER_KEY,
    COLUMN_CASE_SENSITIVE_KEY,
    COLUMN_SERIALIZE_KEY,
    HALT_IF_ERROR_KEY,
];

// =============================================================================
// Properties Files
// =============================================================================

/// Marks a properties line as a comment when it is the first non-space character
pub const PROPERTIES_COMMENT_PREFIX: char = '#';

/// Separates key from value in a properties line
pub const PROPERTIES_KEY_VALUE_SEPARATOR: char = '=';
