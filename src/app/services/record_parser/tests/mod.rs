//! Test utilities for record parser testing
//!
//! This module provides a recording handler and settings helpers used
//! across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use super::handler::RecordHandler;
use crate::app::models::Record;
use crate::config::ParserSettings;

mod encoding_tests;

/// One handler invocation, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Record(Record),
    Error(String),
}

/// Handler that records every callback for later assertions
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub events: Vec<Event>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<&Record> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Record(record) => Some(record),
                Event::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Error(line) => Some(line.as_str()),
                Event::Record(_) => None,
            })
            .collect()
    }
}

impl RecordHandler for RecordingHandler {
    fn on_record(&mut self, record: Record) {
        self.events.push(Event::Record(record));
    }

    fn on_error(&mut self, raw_line: &str) {
        self.events.push(Event::Error(raw_line.to_string()));
    }
}

/// Settings with header mode on and case-insensitive column names
pub fn header_settings() -> ParserSettings {
    ParserSettings {
        header_enabled: true,
        ..ParserSettings::default()
    }
}

/// Settings with header mode off and skip-on-error
pub fn lenient_settings() -> ParserSettings {
    ParserSettings {
        halt_on_error: false,
        ..ParserSettings::default()
    }
}

/// Helper to create contact-list CSV content with a header
pub fn create_contacts_csv() -> String {
    "id,firstname,lastname,email,email2,profession\n\
     0,Genovera,Wildermuth,Genovera.Wildermuth@yopmail.com,Genovera.Wildermuth@gmail.com,worker\n\
     1,Raina,Gibbeon,Raina.Gibbeon@yopmail.com,Raina.Gibbeon@gmail.com\n\
     2,Steffane,Codding,Steffane.Codding@yopmail.com,Steffane.Codding@gmail.com,firefighter\n"
        .to_string()
}

/// Helper to create a temporary file with raw byte content
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
