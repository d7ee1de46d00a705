//! # multab
//!
//! A CLI tool for printing the multiplication table of an arithmetic
//! sequence.
//!
//! ## Overview
//!
//! multab is built on top of multablib. It reads `min`, `max` and
//! `increment` from a properties file, parses them at a declared numeric
//! kind, validates them, and prints the outer-product grid as fixed-width
//! text (or JSON). Diagnostics go to stderr, the table to stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Print the table, parsing configuration values as int (the default)
//! multab
//!
//! # Parse configuration values as double
//! multab double
//!
//! # Read a different properties file
//! multab --config demo.properties
//!
//! # Emit the table as JSON
//! multab --output json
//! ```

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use multablib::{
    format_row, rows, validate, Diagnostics, NumericKind, Properties, Range, Table,
    TracingDiagnostics,
};
use tracing::Level;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("multab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the multiplication table of an arithmetic sequence")
        .arg(
            Arg::new("kind")
                .value_name("KIND")
                .help("Numeric kind: byte, int, long, float or double [default: int]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("config.properties")
                .help("Properties file providing min, max and increment"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Install the stderr subscriber so diagnostics never mix into the table.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Execute one invocation.
///
/// `Ok(true)` means a table was printed; `Ok(false)` means the configuration
/// failed validation (already reported through `diag`, nothing printed).
fn run(matches: &ArgMatches, diag: &dyn Diagnostics) -> anyhow::Result<bool> {
    // The kind name flows through the library parser so an unsupported name
    // gets the library's diagnostic, not a clap usage error.
    let kind = match matches.get_one::<String>("kind") {
        Some(raw) => raw.parse::<NumericKind>()?,
        None => NumericKind::default(),
    };

    let config = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.properties");
    let props = Properties::load(config)?;
    diag.info(&format!("loaded {} ({} entries)", config, props.len()));

    let increment = props.require("increment")?;
    let min = props.require("min")?;
    let max = props.require("max")?;
    let range = Range::parse(kind, min, max, increment)?;

    if !validate(&range, diag) {
        return Ok(false);
    }
    diag.info(&format!(
        "values are min={} max={} increment={} kind={}",
        range.min, range.max, range.increment, kind
    ));
    diag.info("generating table");

    if matches.get_one::<String>("output").map(String::as_str) == Some("json") {
        let table = Table::generate(&range);
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        let mut out = io::stdout().lock();
        for row in rows(&range) {
            writeln!(out, "{}", format_row(&row))?;
        }
    }

    Ok(true)
}

fn main() -> ExitCode {
    init_tracing();
    let diag = TracingDiagnostics;
    let matches = build_command().get_matches();

    match run(&matches, &diag) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            diag.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
