//! Core data models for parsed records
//!
//! A [`Record`] maps column names to [`FieldValue`]s for one successfully
//! parsed line. It is built fresh per line and handed to the caller by value.

use indexmap::IndexMap;
use std::collections::HashMap;

/// A single field value: either text or an explicit null
///
/// Null is distinct from the empty string; it is produced only when the
/// trimmed value equals the configured null sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Null,
}

impl FieldValue {
    /// Borrow the text, or `None` for a null field
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Convert into an `Option`, mapping null to `None`
    pub fn into_option(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Null => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}

/// Mapping from column name to value for one parsed line
///
/// Entries keep column order. Inserting a name that is already present
/// replaces its value in place, so duplicate column names resolve to the
/// last value on the line.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the value for a column
    pub fn insert(&mut self, column: impl Into<String>, value: FieldValue) {
        self.fields.insert(column.into(), value);
    }

    /// Get the value for a column
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// Get the text for a column; `None` if the column is absent or null
    pub fn get_text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FieldValue::as_str)
    }

    /// Whether the column is present and holds the null marker
    pub fn is_null(&self, column: &str) -> bool {
        self.get(column).is_some_and(FieldValue::is_null)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column names in record order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Convert into a map with nulls as `None`
    pub fn into_map(self) -> HashMap<String, Option<String>> {
        self.fields
            .into_iter()
            .map(|(name, value)| (name, value.into_option()))
            .collect()
    }

    /// Convert into a plain string map with no null distinction
    ///
    /// Null fields are restored to `null_text`, the sentinel they matched.
    pub fn into_plain(self, null_text: &str) -> HashMap<String, String> {
        self.fields
            .into_iter()
            .map(|(name, value)| {
                let text = value.into_option().unwrap_or_else(|| null_text.to_string());
                (name, text)
            })
            .collect()
    }
}
