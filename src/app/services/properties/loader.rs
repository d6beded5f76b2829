//! Line-by-line properties parsing

use crate::constants::{PROPERTIES_COMMENT_PREFIX, PROPERTIES_KEY_VALUE_SEPARATOR};
use crate::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Load a properties file from disk
///
/// # Errors
/// * Returns `Error::SourceUnavailable` if the file can not be opened or read
/// * Returns `Error::MalformedPropertyLine` for the first line without a valid `key=value` shape
pub fn load_properties(path: &Path) -> Result<HashMap<String, String>> {
    info!("Loading properties file: {}", path.display());

    let file = File::open(path)
        .map_err(|e| Error::source_unavailable(path.display().to_string(), e))?;

    parse_properties(BufReader::new(file), &path.display().to_string())
}

/// Parse properties held in memory
pub fn parse_properties_str(content: &str) -> Result<HashMap<String, String>> {
    parse_properties(content.as_bytes(), "<memory>")
}

/// Parse properties from any buffered reader
///
/// `source_name` is only used to label I/O errors.
pub fn parse_properties<R: BufRead>(reader: R, source_name: &str) -> Result<HashMap<String, String>> {
    let mut properties = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::source_unavailable(source_name, e))?;
        let line_number = index + 1;

        if let Some((key, value)) = parse_line(&line, line_number)? {
            if properties.insert(key.clone(), value).is_some() {
                debug!("Property '{}' redefined at line {}", key, line_number);
            }
        }
    }

    debug!("Loaded {} properties from {}", properties.len(), source_name);
    Ok(properties)
}

/// Split one line into a key/value pair, or `None` for blank and comment lines
fn parse_line(raw: &str, line_number: usize) -> Result<Option<(String, String)>> {
    let line = raw.trim_start_matches(' ');

    if line.is_empty() || line.starts_with(PROPERTIES_COMMENT_PREFIX) {
        return Ok(None);
    }

    match line.find(PROPERTIES_KEY_VALUE_SEPARATOR) {
        Some(separator_index) if separator_index > 0 => {
            let key = line[..separator_index].trim_matches(' ').to_string();
            let value = line[separator_index + 1..].to_string();
            Ok(Some((key, value)))
        }
        _ => Err(Error::malformed_property_line(line_number, raw)),
    }
}
