//! Callback seam between the parser and the caller
//!
//! Callbacks run synchronously, in source line order, on the thread that
//! drives the read.

use crate::app::models::Record;
use std::collections::HashMap;

/// Receiver for parsed records and rejected lines
pub trait RecordHandler {
    /// Called once per successfully parsed line
    fn on_record(&mut self, record: Record);

    /// Called with the original text of a line whose field count did not match
    fn on_error(&mut self, raw_line: &str);
}

/// Handler built from a pair of closures, delivering typed-null records
pub struct Callbacks<F, G> {
    on_record: F,
    on_error: G,
}

impl<F, G> Callbacks<F, G>
where
    F: FnMut(Record),
    G: FnMut(&str),
{
    pub fn new(on_record: F, on_error: G) -> Self {
        Self {
            on_record,
            on_error,
        }
    }
}

impl<F, G> RecordHandler for Callbacks<F, G>
where
    F: FnMut(Record),
    G: FnMut(&str),
{
    fn on_record(&mut self, record: Record) {
        (self.on_record)(record)
    }

    fn on_error(&mut self, raw_line: &str) {
        (self.on_error)(raw_line)
    }
}

/// Handler delivering plain string maps with no null distinction
///
/// Values that matched the null sentinel arrive as the sentinel text.
pub struct PlainCallbacks<F, G> {
    on_record: F,
    on_error: G,
    null_text: String,
}

impl<F, G> PlainCallbacks<F, G>
where
    F: FnMut(HashMap<String, String>),
    G: FnMut(&str),
{
    pub fn new(null_text: impl Into<String>, on_record: F, on_error: G) -> Self {
        Self {
            on_record,
            on_error,
            null_text: null_text.into(),
        }
    }
}

impl<F, G> RecordHandler for PlainCallbacks<F, G>
where
    F: FnMut(HashMap<String, String>),
    G: FnMut(&str),
{
    fn on_record(&mut self, record: Record) {
        (self.on_record)(record.into_plain(&self.null_text))
    }

    fn on_error(&mut self, raw_line: &str) {
        (self.on_error)(raw_line)
    }
}

impl<H: RecordHandler + ?Sized> RecordHandler for &mut H {
    fn on_record(&mut self, record: Record) {
        (**self).on_record(record)
    }

    fn on_error(&mut self, raw_line: &str) {
        (**self).on_error(raw_line)
    }
}

impl<H: RecordHandler + ?Sized> RecordHandler for Box<H> {
    fn on_record(&mut self, record: Record) {
        (**self).on_record(record)
    }

    fn on_error(&mut self, raw_line: &str) {
        (**self).on_error(raw_line)
    }
}
