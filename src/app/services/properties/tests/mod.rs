//! Test utilities for properties loading

use std::io::Write;
use tempfile::NamedTempFile;


/// Properties content covering every parser setting
pub fn create_full_properties() -> String {
    r#"# Parser configuration
enable-header=false
nil-character=
separator-character=,
file-encode=UTF-8
value-left-trim=true
value-right-trim=true
column-case-sensitive=false

  # indented comment
column-serialize=COL_A,COL_B,COL_C"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
