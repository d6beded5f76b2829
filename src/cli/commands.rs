//! Command implementations for the delimited reader CLI
//!
//! Thin wrappers that resolve settings, run the record parser, and write
//! results. All parsing behaviour lives in the library.

use crate::app::services::record_parser::{ParseStats, RecordParser};
use crate::cli::args::{Args, Commands, ConfigArgs, LoggingArgs, ParseArgs};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, warn};

/// Run the selected subcommand
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Parse(parse_args)) => {
            setup_logging(&parse_args.logging);
            let stats = run_parse(&parse_args)?;
            info!(
                "Done: {} records, {} rejected ({:.1}% success)",
                stats.records_parsed,
                stats.records_rejected,
                stats.success_rate()
            );
            Ok(())
        }
        Some(Commands::Config(config_args)) => {
            setup_logging(&config_args.logging);
            run_config(&config_args)
        }
        None => Ok(()),
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &LoggingArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("delimited_reader={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Parse the input file and print one JSON object per record to stdout
pub fn run_parse(args: &ParseArgs) -> Result<ParseStats> {
    let settings = args
        .settings
        .resolve()
        .context("Failed to resolve parser settings")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_error = None;

    let result = if args.plain {
        let mut parser = RecordParser::with_plain_callbacks(
            settings,
            |row| {
                let ordered: BTreeMap<_, _> = row.into_iter().collect();
                emit(&mut out, &ordered, &mut write_error);
            },
            |line| warn!("Rejected line: {}", line),
        );
        parser.read_path(&args.input)
    } else {
        let mut parser = RecordParser::with_callbacks(
            settings,
            |record| emit(&mut out, &record, &mut write_error),
            |line| warn!("Rejected line: {}", line),
        );
        parser.read_path(&args.input)
    };

    out.flush().context("Failed to flush output")?;
    if let Some(e) = write_error {
        return Err(e).context("Failed to write records");
    }

    result.with_context(|| format!("Failed to parse {}", args.input.display()))
}

/// Print the resolved settings as pretty JSON
pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let settings = args
        .settings
        .resolve()
        .context("Failed to resolve parser settings")?;

    let json = serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
    println!("{}", json);
    Ok(())
}

/// Write one JSON line, remembering the first write failure and skipping after it
fn emit<W: Write, T: Serialize>(out: &mut W, value: &T, write_error: &mut Option<io::Error>) {
    if write_error.is_some() {
        return;
    }

    let result = serde_json::to_writer(&mut *out, value)
        .map_err(io::Error::from)
        .and_then(|()| out.write_all(b"\n"));

    if let Err(e) = result {
        *write_error = Some(e);
    }
}
