//! Delimited Reader Library
//!
//! A Rust library for streaming delimited-text (CSV-like) files line by line
//! and handing each parsed record to caller-supplied callbacks.
//!
//! This library provides tools for:
//! - Loading parser settings from simple `key=value` properties files
//! - Decoding input in any WHATWG-labelled character encoding
//! - Resolving column names from a header row, configuration, or positional defaults
//! - Trimming values and mapping a configurable sentinel to an explicit null
//! - Halting or skipping on lines whose field count does not match the columns

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod properties;
        pub mod record_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldValue, Record};
pub use app::services::properties::{load_properties, parse_properties};
pub use app::services::record_parser::{
    Callbacks, ParseStats, PlainCallbacks, RecordHandler, RecordParser,
};
pub use config::ParserSettings;

/// Result type alias for delimited reader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for configuration, I/O setup and record parsing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A typed configuration value could not be parsed
    #[error("Configuration error: {key} can not parse to {expected} ({value})")]
    ConfigParse {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// The configured encoding label is not known to the encoding registry
    #[error("Unknown encoding: {label}")]
    UnknownEncoding { label: String },

    /// A file or stream could not be opened or read
    #[error("Source unavailable: {source_name}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// A properties line lacks a valid `key=value` shape
    #[error("Malformed property line (line {line_number}): {line}")]
    MalformedPropertyLine { line_number: usize, line: String },

    /// A data line's field count does not match the resolved column count
    #[error("Line {line_number}: columns({expected}) not match to values({actual})")]
    ArityMismatch {
        line_number: usize,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Create a configuration parse error
    pub fn config_parse(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::ConfigParse {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }

    /// Create an unknown encoding error
    pub fn unknown_encoding(label: impl Into<String>) -> Self {
        Self::UnknownEncoding {
            label: label.into(),
        }
    }

    /// Create a source unavailable error with the name of the source
    pub fn source_unavailable(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    /// Create a malformed property line error
    pub fn malformed_property_line(line_number: usize, line: impl Into<String>) -> Self {
        Self::MalformedPropertyLine {
            line_number,
            line: line.into(),
        }
    }

    /// Create an arity mismatch error
    pub fn arity_mismatch(line_number: usize, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            line_number,
            expected,
            actual,
        }
    }

    /// Whether this error is a per-line data error rather than a setup failure
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. })
    }
}
