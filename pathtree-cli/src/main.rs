//! Pathtree CLI - reorder flat JSON record streams into tree order.
//!
//! Reads a sequence of records (a JSON array, or one JSON object per line),
//! rebuilds the hierarchy they describe, and writes the records back out in
//! tree order: the synthesized root first, then every placed record, then
//! any passthrough records that had no address. `children` in the output
//! holds zero-based indexes into the placed sequence.

mod error;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pathtree::{Item, PathTreeBuilder, TreeConfig};

use crate::error::CliError;

/// Input and output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// A single JSON array of records.
    Json,
    /// One JSON record per line.
    Jsonl,
}

/// Reorder a flat stream of path-addressed JSON records into tree order.
#[derive(Debug, Parser)]
#[command(name = "pathtree", version, about)]
struct Args {
    /// Input file, or "-" for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comma-separated default-page names; the first seeds promoted names.
    #[arg(long, value_delimiter = ',')]
    default_pages: Vec<String>,

    /// Comma-separated container kinds; the first types synthesized folders.
    #[arg(long, value_delimiter = ',')]
    default_containers: Vec<String>,

    /// Input and output encoding.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON array output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let raw = read_input(&args.input)?;
    let items = decode(&raw, args.format)?;
    debug!(records = items.len(), "decoded input");

    let mut config = TreeConfig::new();
    if !args.default_pages.is_empty() {
        config = config.with_default_pages(args.default_pages.clone());
    }
    if !args.default_containers.is_empty() {
        config = config.with_default_containers(args.default_containers.clone());
    }

    let output = PathTreeBuilder::with_config(config).build(items)?;
    debug!(stats = %output.stats, "build finished");

    // Placed records first (root included), passthrough records after.
    let mut records = output.items;
    records.extend(output.passthrough);

    let encoded = encode(&records, args.format, args.pretty)?;
    write_output(args.output.as_deref(), &encoded)?;
    Ok(())
}

fn read_input(source: &str) -> Result<String, CliError> {
    let mut raw = String::new();
    if source == "-" {
        io::stdin().read_to_string(&mut raw)?;
    } else {
        File::open(source)?.read_to_string(&mut raw)?;
    }
    Ok(raw)
}

fn decode(raw: &str, format: Format) -> Result<Vec<Item>, CliError> {
    match format {
        Format::Json => Ok(serde_json::from_str(raw)?),
        Format::Jsonl => raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(CliError::from))
            .collect(),
    }
}

fn encode(records: &[Item], format: Format, pretty: bool) -> Result<String, CliError> {
    match format {
        Format::Json if pretty => {
            let mut text = serde_json::to_string_pretty(records)?;
            text.push('\n');
            Ok(text)
        }
        Format::Json => {
            let mut text = serde_json::to_string(records)?;
            text.push('\n');
            Ok(text)
        }
        Format::Jsonl => {
            let mut text = String::new();
            for record in records {
                text.push_str(&serde_json::to_string(record)?);
                text.push('\n');
            }
            Ok(text)
        }
    }
}

fn write_output(target: Option<&std::path::Path>, encoded: &str) -> Result<(), CliError> {
    match target {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(encoded.as_bytes())?;
        }
        None => {
            io::stdout().write_all(encoded.as_bytes())?;
        }
    }
    Ok(())
}
