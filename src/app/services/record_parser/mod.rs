//! Line-oriented record parser for delimited text
//!
//! This module streams lines from a byte source, decodes them with a
//! configurable encoding, splits them on a plain separator, and hands one
//! [`Record`](crate::Record) per line to a [`RecordHandler`].
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`encoding`] - Encoding label lookup and source wrapping
//! - [`line_reader`] - Incremental decoding and line scanning
//! - [`columns`] - Header, configured and generated column names; field splitting
//! - [`record_builder`] - Arity check, trimming and null substitution
//! - [`handler`] - Callback trait and closure adapters
//! - [`parser`] - Read-pass orchestration and error policy
//! - [`stats`] - Per-pass statistics
//!
//! ## Usage
//!
//! ```rust
//! use delimited_reader::{ParserSettings, RecordParser};
//!
//! # fn example() -> delimited_reader::Result<()> {
//! let settings = ParserSettings {
//!     header_enabled: true,
//!     ..ParserSettings::default()
//! };
//!
//! let mut names = Vec::new();
//! let mut parser = RecordParser::with_callbacks(
//!     settings,
//!     |record| names.push(record.get_text("NAME").map(str::to_string)),
//!     |line| eprintln!("rejected: {line}"),
//! );
//! let stats = parser.read("id,name\n1,Alice\n2,Bob".as_bytes())?;
//! drop(parser);
//!
//! assert_eq!(stats.records_parsed, 2);
//! assert_eq!(names, vec![Some("Alice".to_string()), Some("Bob".to_string())]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod columns;
pub mod encoding;
pub mod handler;
pub mod line_reader;
pub mod parser;
pub mod record_builder;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::{ColumnNames, ColumnSource, generate_column_names, split_fields};
pub use encoding::EncodingAdapter;
pub use handler::{Callbacks, PlainCallbacks, RecordHandler};
pub use line_reader::LineReader;
pub use parser::RecordParser;
pub use record_builder::{ArityMismatch, ValuePolicy, build_record};
pub use stats::ParseStats;
