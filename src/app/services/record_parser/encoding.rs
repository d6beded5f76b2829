//! Character encoding lookup for byte sources
//!
//! Encoding names are resolved through the WHATWG label registry provided by
//! `encoding_rs`, so `UTF-8`, `utf8`, `latin1`, `windows-874` or `Shift_JIS`
//! all work. Lookup is case-insensitive and ignores surrounding whitespace.

use super::line_reader::LineReader;
use crate::{Error, Result};
use encoding_rs::Encoding;
use std::io::Read;
use tracing::debug;

/// A resolved character encoding that can wrap raw byte sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingAdapter {
    encoding: &'static Encoding,
}

impl EncodingAdapter {
    /// Look up an encoding by label
    ///
    /// # Errors
    /// * Returns `Error::UnknownEncoding` if the label is not registered
    pub fn resolve(label: &str) -> Result<Self> {
        let encoding =
            Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::unknown_encoding(label))?;

        debug!("Resolved encoding label '{}' to {}", label, encoding.name());
        Ok(Self { encoding })
    }

    /// Canonical name of the resolved encoding
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Wrap a byte source so that line reads yield decoded text
    ///
    /// A byte order mark for this encoding at the start of the source is dropped.
    pub fn wrap<R: Read>(&self, source: R) -> LineReader<R> {
        LineReader::new(source, self.encoding.new_decoder_with_bom_removal())
    }
}
