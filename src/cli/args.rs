//! Command-line argument definitions for the delimited reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::Result;
use crate::app::services::properties::load_properties;
use crate::config::ParserSettings;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// CLI arguments for the delimited reader
///
/// Streams a delimited text file through the record parser and prints one
/// JSON object per parsed record.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "delimited-reader",
    version,
    about = "Parse delimited text files into JSON records",
    long_about = "Streams a delimited text file line by line, decodes it with the configured \
                  encoding, resolves column names from a header row, configuration or positional \
                  defaults, and prints each record as a JSON object."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a delimited file and print records as JSON lines
    Parse(ParseArgs),
    /// Print the resolved parser settings as JSON
    Config(ConfigArgs),
}

/// Where parser settings come from
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SettingsArgs {
    /// Properties file with parser settings
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override a single setting (repeatable), e.g. --set enable-header=true
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value
    )]
    pub overrides: Vec<(String, String)>,
}

impl SettingsArgs {
    /// Load the properties file (if any), apply overrides, and resolve settings
    pub fn resolve(&self) -> Result<ParserSettings> {
        let mut props = match &self.config {
            Some(path) => load_properties(path)?,
            None => HashMap::new(),
        };

        for (key, value) in &self.overrides {
            debug!("Override {}={}", key, value);
            props.insert(key.clone(), value.clone());
        }

        ParserSettings::from_properties(&props)
    }
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Delimited text file to parse
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Emit plain string values, with no null distinction
    #[arg(long = "plain")]
    pub plain: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Verbosity flags shared by all commands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LoggingArgs {
    /// Enable verbose (debug) logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl LoggingArgs {
    /// Get the log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Arguments for the config command
#[derive(Debug, Clone, Parser)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Parse a `KEY=VALUE` override, splitting on the first `=`
fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
