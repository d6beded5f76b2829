//! Properties file loading for parser configuration
//!
//! Reads the flat `key=value` text format used to configure the record
//! parser into a string-to-string mapping. The mapping is resolved into
//! typed settings by [`crate::config::ParserSettings::from_properties`].
//!
//! ## Format
//!
//! - One `key=value` pair per line; the first `=` splits key from value
//! - Keys are trimmed of surrounding spaces, values are kept verbatim
//! - Blank lines and lines whose first non-space character is `#` are skipped
//! - Later duplicate keys overwrite earlier ones

pub mod loader;

#[cfg(test)]
pub mod tests;

pub use loader::{load_properties, parse_properties, parse_properties_str};
