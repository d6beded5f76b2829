use clap::Parser;
use delimited_reader::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Delimited Reader - streaming delimited text to JSON records");
    println!("===========================================================");
    println!();
    println!("USAGE:");
    println!("    delimited-reader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a delimited file and print records as JSON lines");
    println!("    config      Print the resolved parser settings");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a file whose first line is a header:");
    println!("    delimited-reader parse data.csv --set enable-header=true");
    println!();
    println!("    # Parse with settings from a properties file:");
    println!("    delimited-reader parse data.csv --config parser.properties");
    println!();
    println!("    # Show the settings a properties file resolves to:");
    println!("    delimited-reader config --config parser.properties");
}
