//! Configuration management and validation.
//!
//! Provides the typed config resolver over a string-keyed mapping and the
//! immutable [`ParserSettings`] snapshot consumed by the record parser.

use crate::app::services::properties::load_properties;
use crate::constants::*;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Return the mapped value verbatim, or the default when the key is absent
pub fn get_string(props: &HashMap<String, String>, key: &str, default: &str) -> String {
    props
        .get(key)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Return the mapped value parsed as a boolean, or the default when absent
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts
/// `0`, `f`, `F`, `FALSE`, `false`, `False`. Anything else is a fatal
/// [`Error::ConfigParse`].
pub fn get_bool(props: &HashMap<String, String>, key: &str, default: bool) -> Result<bool> {
    match props.get(key) {
        Some(value) => parse_bool(value).ok_or_else(|| Error::config_parse(key, value, "boolean")),
        None => Ok(default),
    }
}

/// Return the mapped value parsed as an unsigned integer, or the default when absent
pub fn get_usize(props: &HashMap<String, String>, key: &str, default: usize) -> Result<usize> {
    match props.get(key) {
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| Error::config_parse(key, value, "integer")),
        None => Ok(default),
    }
}

/// Split the mapped value on commas, or return the default list when absent
///
/// An empty mapped value yields a single empty entry.
pub fn get_string_list(
    props: &HashMap<String, String>,
    key: &str,
    default: &[String],
) -> Vec<String> {
    match props.get(key) {
        Some(value) => value
            .split(CONFIG_LIST_SEPARATOR)
            .map(str::to_string)
            .collect(),
        None => default.to_vec(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Immutable parser configuration snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSettings {
    /// Trimmed value that maps a field to the null marker
    pub null_sentinel: String,

    /// Field and column delimiter (plain substring, no quoting)
    pub separator: String,

    /// Encoding label used to decode the byte source
    pub encoding: String,

    /// Leading lines discarded before header detection
    pub skip_lines: usize,

    /// Strip leading spaces from each value
    pub left_trim: bool,

    /// Strip trailing spaces from each value
    pub right_trim: bool,

    /// Treat the first line as the column-name source
    pub header_enabled: bool,

    /// Keep header-derived names verbatim instead of upper-casing them
    pub column_case_sensitive: bool,

    /// Explicit column names, used when header mode is off (empty = auto-name)
    pub columns: Vec<String>,

    /// Abort the pass on the first arity mismatch
    pub halt_on_error: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            null_sentinel: NIL_CHARACTER_DEFAULT.to_string(),
            separator: SEPARATOR_CHARACTER_DEFAULT.to_string(),
            encoding: FILE_ENCODE_DEFAULT.to_string(),
            skip_lines: SKIP_LINE_DEFAULT,
            left_trim: VALUE_LEFT_TRIM_DEFAULT,
            right_trim: VALUE_RIGHT_TRIM_DEFAULT,
            header_enabled: ENABLE_HEADER_DEFAULT,
            column_case_sensitive: COLUMN_CASE_SENSITIVE_DEFAULT,
            columns: Vec::new(),
            halt_on_error: HALT_IF_ERROR_DEFAULT,
        }
    }
}

/// Keys in the mapping that no setting reads, sorted
pub fn unknown_keys(props: &HashMap<String, String>) -> Vec<&str> {
    let mut keys: Vec<&str> = props
        .keys()
        .map(String::as_str)
        .filter(|key| !KNOWN_KEYS.contains(key))
        .collect();
    keys.sort_unstable();
    keys
}

impl ParserSettings {
    /// Resolve settings from a string-keyed mapping, applying defaults for absent keys
    ///
    /// # Errors
    /// * Returns `Error::ConfigParse` if a boolean or integer entry is not parsable
    pub fn from_properties(props: &HashMap<String, String>) -> Result<Self> {
        for key in unknown_keys(props) {
            warn!("Ignoring unknown configuration key '{}'", key);
        }

        let settings = Self {
            null_sentinel: get_string(props, NIL_CHARACTER_KEY, NIL_CHARACTER_DEFAULT),
            separator: get_string(props, SEPARATOR_CHARACTER_KEY, SEPARATOR_CHARACTER_DEFAULT),
            encoding: get_string(props, FILE_ENCODE_KEY, FILE_ENCODE_DEFAULT),
            skip_lines: get_usize(props, SKIP_LINE_KEY, SKIP_LINE_DEFAULT)?,
            left_trim: get_bool(props, VALUE_LEFT_TRIM_KEY, VALUE_LEFT_TRIM_DEFAULT)?,
            right_trim: get_bool(props, VALUE_RIGHT_TRIM_KEY, VALUE_RIGHT_TRIM_DEFAULT)?,
            header_enabled: get_bool(props, ENABLE_HEADER_KEY, ENABLE_HEADER_DEFAULT)?,
            column_case_sensitive: get_bool(
                props,
                COLUMN_CASE_SENSITIVE_KEY,
                COLUMN_CASE_SENSITIVE_DEFAULT,
            )?,
            columns: get_string_list(props, COLUMN_SERIALIZE_KEY, &[]),
            halt_on_error: get_bool(props, HALT_IF_ERROR_KEY, HALT_IF_ERROR_DEFAULT)?,
        };

        debug!("Resolved parser settings: {:?}", settings);
        Ok(settings)
    }

    /// Load a properties file and resolve settings from it
    pub fn load(path: &Path) -> Result<Self> {
        let props = load_properties(path)?;
        Self::from_properties(&props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_string_default_and_value() {
        let empty = HashMap::new();
        assert_eq!(get_string(&empty, "missing", "fallback"), "fallback");

        let map = props(&[("key", " spaced value ")]);
        assert_eq!(get_string(&map, "key", ""), " spaced value ");
    }

    #[test]
    fn test_get_bool_forms() {
        let empty = HashMap::new();
        assert!(get_bool(&empty, "missing", true).unwrap());

        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(get_bool(&props(&[("flag", value)]), "flag", false).unwrap());
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!get_bool(&props(&[("flag", value)]), "flag", true).unwrap());
        }
    }

    #[test]
    fn test_get_bool_invalid() {
        let map = props(&[("flag", "Hello")]);
        let err = get_bool(&map, "flag", true).unwrap_err();

        match err {
            Error::ConfigParse { key, value, .. } => {
                assert_eq!(key, "flag");
                assert_eq!(value, "Hello");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_get_usize() {
        assert_eq!(get_usize(&HashMap::new(), "n", 4).unwrap(), 4);
        assert_eq!(get_usize(&props(&[("n", "12")]), "n", 0).unwrap(), 12);
        assert!(matches!(
            get_usize(&props(&[("n", "-1")]), "n", 0),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_get_string_list() {
        let default = vec!["a".to_string(), "b".to_string()];
        assert_eq!(get_string_list(&HashMap::new(), "cols", &default), default);

        let map = props(&[("cols", "COFFEE,PAY,ME")]);
        assert_eq!(
            get_string_list(&map, "cols", &[]),
            vec!["COFFEE", "PAY", "ME"]
        );

        // Empty value is kept as a single empty entry
        let map = props(&[("cols", "")]);
        assert_eq!(get_string_list(&map, "cols", &[]), vec![""]);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = ParserSettings::from_properties(&HashMap::new()).unwrap();

        assert_eq!(settings, ParserSettings::default());
        assert_eq!(settings.separator, ",");
        assert_eq!(settings.encoding, "UTF-8");
        assert_eq!(settings.null_sentinel, "");
        assert!(settings.columns.is_empty());
        assert!(settings.halt_on_error);
        assert!(!settings.header_enabled);
    }

    #[test]
    fn test_settings_from_properties() {
        let map = props(&[
            (NIL_CHARACTER_KEY, "null"),
            (SEPARATOR_CHARACTER_KEY, "|"),
            (FILE_ENCODE_KEY, "windows-1252"),
            (SKIP_LINE_KEY, "2"),
            (VALUE_LEFT_TRIM_KEY, "true"),
            (VALUE_RIGHT_TRIM_KEY, "true"),
            (ENABLE_HEADER_KEY, "false"),
            (COLUMN_CASE_SENSITIVE_KEY, "true"),
            (COLUMN_SERIALIZE_KEY, "COL_A,COL_B,COL_C"),
            (HALT_IF_ERROR_KEY, "false"),
        ]);

        let settings = ParserSettings::from_properties(&map).unwrap();

        assert_eq!(settings.null_sentinel, "null");
        assert_eq!(settings.separator, "|");
        assert_eq!(settings.encoding, "windows-1252");
        assert_eq!(settings.skip_lines, 2);
        assert!(settings.left_trim && settings.right_trim);
        assert!(settings.column_case_sensitive);
        assert_eq!(settings.columns, vec!["COL_A", "COL_B", "COL_C"]);
        assert!(!settings.halt_on_error);
    }

    #[test]
    fn test_unknown_keys_reported_sorted() {
        let map = props(&[
            ("enable-header", "true"),
            ("sepparator-character", ";"),
            ("colour", "blue"),
        ]);

        assert_eq!(unknown_keys(&map), vec!["colour", "sepparator-character"]);
        assert!(unknown_keys(&props(&[("skip-line", "1")])).is_empty());

        // Unknown keys are ignored, not fatal
        assert!(ParserSettings::from_properties(&map).unwrap().header_enabled);
    }

    #[test]
    fn test_settings_invalid_bool_is_fatal() {
        let map = props(&[(HALT_IF_ERROR_KEY, "maybe")]);
        assert!(matches!(
            ParserSettings::from_properties(&map),
            Err(Error::ConfigParse { .. })
        ));
    }
}
