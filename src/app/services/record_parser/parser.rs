//! Core record parser implementation
//!
//! This module drives a read pass: encoding lookup, line scanning, column
//! resolution, and dispatch of each line to the record builder and handler.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::columns::{ColumnNames, split_fields};
use super::encoding::EncodingAdapter;
use super::handler::{Callbacks, PlainCallbacks, RecordHandler};
use super::line_reader::LineReader;
use super::record_builder::{ValuePolicy, build_record};
use super::stats::ParseStats;
use crate::app::models::Record;
use crate::config::ParserSettings;
use crate::{Error, Result};

/// Line-oriented record parser
///
/// Holds immutable settings and a handler. Each call to [`read`](Self::read)
/// or [`read_path`](Self::read_path) is an independent pass that resolves
/// its own column list; nothing from a previous pass carries over.
pub struct RecordParser<H> {
    settings: ParserSettings,
    policy: ValuePolicy,
    handler: H,
    last_stats: ParseStats,
}

impl<H: RecordHandler> RecordParser<H> {
    /// Create a parser from settings and a handler
    pub fn new(settings: ParserSettings, handler: H) -> Self {
        let policy = ValuePolicy::from(&settings);
        Self {
            settings,
            policy,
            handler,
            last_stats: ParseStats::new(),
        }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Statistics of the most recent pass, including one that ended in an error
    pub fn last_stats(&self) -> &ParseStats {
        &self.last_stats
    }

    /// Parse a file, releasing the handle on every exit path
    ///
    /// # Errors
    /// * Returns `Error::SourceUnavailable` if the file can not be opened or read
    /// * Returns `Error::UnknownEncoding` if the configured encoding is not registered
    /// * Returns `Error::ArityMismatch` on the first bad line when halt-on-error is set
    pub fn read_path(&mut self, path: &Path) -> Result<ParseStats> {
        let file = File::open(path)
            .map_err(|e| Error::source_unavailable(path.display().to_string(), e))?;

        self.read_named(file, &path.display().to_string())
    }

    /// Parse an open byte stream; the caller keeps ownership of the stream
    pub fn read<R: Read>(&mut self, source: R) -> Result<ParseStats> {
        self.read_named(source, "stream")
    }

    fn read_named<R: Read>(&mut self, source: R, source_name: &str) -> Result<ParseStats> {
        let adapter = EncodingAdapter::resolve(&self.settings.encoding)?;
        info!("Parsing {} ({})", source_name, adapter.name());

        self.last_stats = ParseStats::new();
        let mut lines = adapter.wrap(source);
        let result = self.run_pass(&mut lines, source_name);

        let stats = &self.last_stats;
        match &result {
            Ok(()) => info!(
                "Parsed {} records from {} lines ({} rejected)",
                stats.records_parsed, stats.lines_read, stats.records_rejected
            ),
            Err(e) => warn!(
                "Parsing {} stopped after {} records: {}",
                source_name, stats.records_parsed, e
            ),
        }
        result.map(|()| stats.clone())
    }

    fn run_pass<R: Read>(&mut self, lines: &mut LineReader<R>, source_name: &str) -> Result<()> {
        let read_error = |e: std::io::Error| Error::source_unavailable(source_name, e);

        for _ in 0..self.settings.skip_lines {
            match lines.next_line().map_err(read_error)? {
                Some(line) => debug!("Skipped leading line {}: {}", lines.line_number(), line),
                None => return Ok(()),
            }
        }

        let mut columns = self.resolve_initial_columns(lines, source_name)?;
        if self.settings.header_enabled && columns.is_none() {
            debug!("No header line in {}", source_name);
            return Ok(());
        }

        while let Some(raw) = lines.next_line().map_err(read_error)? {
            let fields = split_fields(&raw, &self.settings.separator);
            let columns = columns.get_or_insert_with(|| {
                let generated = ColumnNames::generated(fields.len());
                debug!("Generated {} column names from first data line", generated.len());
                generated
            });

            self.last_stats.lines_read += 1;
            match build_record(columns.names(), &fields, &self.policy) {
                Ok(record) => {
                    self.last_stats.records_parsed += 1;
                    self.handler.on_record(record);
                }
                Err(mismatch) => {
                    self.last_stats.records_rejected += 1;
                    self.handler.on_error(&raw);

                    if self.settings.halt_on_error {
                        self.last_stats.halted = true;
                        return Err(mismatch.at_line(lines.line_number()));
                    }
                    warn!("Skipped line {}: {}", lines.line_number(), mismatch);
                }
            }
        }

        Ok(())
    }

    /// Resolve columns available before the first data line
    ///
    /// Header mode wins over configured names. Returns `None` when names
    /// must be generated from the first data line, or when header mode is on
    /// and the input is empty.
    fn resolve_initial_columns<R: Read>(
        &self,
        lines: &mut LineReader<R>,
        source_name: &str,
    ) -> Result<Option<ColumnNames>> {
        if self.settings.header_enabled {
            let header = lines
                .next_line()
                .map_err(|e| Error::source_unavailable(source_name, e))?;

            return Ok(header.map(|line| {
                let columns = ColumnNames::from_header(
                    &line,
                    &self.settings.separator,
                    self.settings.column_case_sensitive,
                );
                debug!("Header columns: {:?}", columns.names());
                columns
            }));
        }

        if self.settings.columns.is_empty() {
            return Ok(None);
        }

        debug!("Configured columns: {:?}", self.settings.columns);
        Ok(Some(ColumnNames::configured(self.settings.columns.clone())))
    }
}

impl<F, G> RecordParser<Callbacks<F, G>>
where
    F: FnMut(Record),
    G: FnMut(&str),
{
    /// Create a parser delivering typed-null records to closures
    pub fn with_callbacks(settings: ParserSettings, on_record: F, on_error: G) -> Self {
        Self::new(settings, Callbacks::new(on_record, on_error))
    }
}

impl<F, G> RecordParser<PlainCallbacks<F, G>>
where
    F: FnMut(HashMap<String, String>),
    G: FnMut(&str),
{
    /// Create a parser delivering plain string maps to closures
    pub fn with_plain_callbacks(settings: ParserSettings, on_record: F, on_error: G) -> Self {
        let null_text = settings.null_sentinel.clone();
        Self::new(settings, PlainCallbacks::new(null_text, on_record, on_error))
    }
}
