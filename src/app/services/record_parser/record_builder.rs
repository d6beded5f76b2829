//! Record construction from column names and raw field values
//!
//! Arity is validated first; a mismatch produces no partial record. Each
//! value is then left-trimmed, right-trimmed and compared to the null
//! sentinel, strictly in that order.

use crate::Error;
use crate::app::models::{FieldValue, Record};
use crate::config::ParserSettings;

/// Field count on a line differs from the resolved column count
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("columns({expected}) not match to values({actual})")]
pub struct ArityMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl ArityMismatch {
    /// Attach the source line number, producing a crate error
    pub fn at_line(self, line_number: usize) -> Error {
        Error::arity_mismatch(line_number, self.expected, self.actual)
    }
}

/// Per-value trim and null policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePolicy {
    pub null_sentinel: String,
    pub left_trim: bool,
    pub right_trim: bool,
}

impl ValuePolicy {
    pub fn new(null_sentinel: impl Into<String>, left_trim: bool, right_trim: bool) -> Self {
        Self {
            null_sentinel: null_sentinel.into(),
            left_trim,
            right_trim,
        }
    }

    /// Apply trimming then null substitution to one raw value
    pub fn apply(&self, raw: &str) -> FieldValue {
        let value = trim_value(raw, self.left_trim, self.right_trim);
        if value == self.null_sentinel {
            FieldValue::Null
        } else {
            FieldValue::Text(value.to_string())
        }
    }
}

impl From<&ParserSettings> for ValuePolicy {
    fn from(settings: &ParserSettings) -> Self {
        Self::new(
            settings.null_sentinel.clone(),
            settings.left_trim,
            settings.right_trim,
        )
    }
}

/// Build a record from positionally aligned columns and values
pub fn build_record<S: AsRef<str>>(
    columns: &[String],
    values: &[S],
    policy: &ValuePolicy,
) -> Result<Record, ArityMismatch> {
    if columns.len() != values.len() {
        return Err(ArityMismatch {
            expected: columns.len(),
            actual: values.len(),
        });
    }

    let mut record = Record::with_capacity(columns.len());
    for (column, raw) in columns.iter().zip(values) {
        record.insert(column.as_str(), policy.apply(raw.as_ref()));
    }
    Ok(record)
}

/// Strip leading and/or trailing space characters (not other whitespace)
pub fn trim_value(value: &str, left_trim: bool, right_trim: bool) -> &str {
    let mut value = value;
    if left_trim {
        value = value.trim_start_matches(' ');
    }
    if right_trim {
        value = value.trim_end_matches(' ');
    }
    value
}
