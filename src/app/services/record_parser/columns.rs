//! Column-name resolution and field splitting
//!
//! The column list for a read pass comes from exactly one place: the header
//! line, explicit configuration, or positional names generated from the
//! first data line. Case normalization happens here, once, at resolution.

use crate::constants::AUTO_COLUMN_PREFIX;

/// Where a resolved column list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// First line of the input
    Header,
    /// `column-serialize` configuration
    Configured,
    /// Generated `COL_n` names sized by the first data line
    Generated,
}

/// Column names resolved for one read pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    names: Vec<String>,
    source: ColumnSource,
}

impl ColumnNames {
    /// Derive column names from a header line
    ///
    /// Each token is trimmed of surrounding spaces and upper-cased character
    /// by character unless `case_sensitive` is set.
    pub fn from_header(line: &str, separator: &str, case_sensitive: bool) -> Self {
        let names = split_fields(line, separator)
            .into_iter()
            .map(|token| {
                let token = token.trim_matches(' ');
                if case_sensitive {
                    token.to_string()
                } else {
                    upper_case_per_char(token)
                }
            })
            .collect();

        Self {
            names,
            source: ColumnSource::Header,
        }
    }

    /// Use configured column names verbatim
    pub fn configured(names: Vec<String>) -> Self {
        Self {
            names,
            source: ColumnSource::Configured,
        }
    }

    /// Generate `COL_0 .. COL_(size-1)`
    pub fn generated(size: usize) -> Self {
        Self {
            names: generate_column_names(size),
            source: ColumnSource::Generated,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn source(&self) -> ColumnSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Upper-case one character at a time
///
/// Characters whose upper case spans several characters (`ß` to `SS`) are
/// kept unchanged, so a name never grows.
fn upper_case_per_char(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// Generate positional column names
pub fn generate_column_names(size: usize) -> Vec<String> {
    (0..size)
        .map(|index| format!("{}{}", AUTO_COLUMN_PREFIX, index))
        .collect()
}

/// Split a line on a plain substring separator
///
/// No quoting or escaping is recognised. An empty separator splits the line
/// into its characters, and an empty line then yields no fields.
pub fn split_fields<'a>(line: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return line
            .char_indices()
            .map(|(start, c)| &line[start..start + c.len_utf8()])
            .collect();
    }
    line.split(separator).collect()
}
