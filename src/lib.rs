//! Reidset: person re-identification dataset indexing.
//!
//! Reidset scans re-id image directories, decodes the person identity and
//! camera embedded in each file name (`0001_c3s1_000151_01.jpg`) and produces
//! `(path, identity, camera)` records for the train, query and gallery splits.
//! Training identities are relabeled to a dense `0..K` range; query and
//! gallery keep their raw codes so they can be matched against each other.
//!
//! # Modules
//!
//! - [`record`]: Record types (ImageRecord, PersonId, CameraId, Splits)
//! - [`parse`]: Directory scanning and filename parsing
//! - [`dataset`]: Split layout, existence checks and dataset aggregation
//! - [`stats`]: Per-split identity/image/camera counts
//! - [`error`]: Error types for reidset operations

pub mod dataset;
pub mod error;
pub mod parse;
pub mod record;
pub mod stats;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::ReidsetError;

use dataset::{occluded_duke, resolve_root, DatasetOptions};
use record::{ImageRecord, PersonId, Split};

/// The reidset CLI application.
#[derive(Parser)]
#[command(name = "reidset")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Parse one image directory and print its records.
    Scan(ScanArgs),
    /// Load the Occluded-Duke splits and print the records of one split.
    Splits(SplitsArgs),
    /// Load the Occluded-Duke splits and print per-split counts.
    Summary(SummaryArgs),
}

/// Arguments for the scan subcommand.
#[derive(clap::Args)]
struct ScanArgs {
    /// Directory containing `*.jpg` images.
    dir: PathBuf,

    /// Remap identities to dense labels starting at 0.
    #[arg(long)]
    relabel: bool,

    /// Output format ('text', 'json', or 'csv').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Dataset location and aggregation options.
#[derive(clap::Args)]
struct DatasetArgs {
    /// Directory containing `occluded_duke/`.
    #[arg(long, env = "REIDSET_ROOT", default_value = ".")]
    root: PathBuf,

    /// Append query and gallery to the training split.
    #[arg(long)]
    combine_all: bool,

    /// Identity code to drop when combining (repeatable).
    #[arg(long = "junk-identity", allow_negative_numbers = true)]
    junk_identities: Vec<i64>,
}

impl DatasetArgs {
    fn options(&self) -> DatasetOptions {
        DatasetOptions {
            root: self.root.clone(),
            combine_all: self.combine_all,
            junk_identities: self
                .junk_identities
                .iter()
                .copied()
                .map(PersonId::new)
                .collect(),
        }
    }
}

/// Arguments for the splits subcommand.
#[derive(clap::Args)]
struct SplitsArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Split to print ('train', 'query', or 'gallery').
    #[arg(long, default_value = "train")]
    split: String,

    /// Output format ('text', 'json', or 'csv').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the summary subcommand.
#[derive(clap::Args)]
struct SummaryArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the reidset CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ReidsetError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Scan(args)) => run_scan(args),
        Some(Commands::Splits(args)) => run_splits(args),
        Some(Commands::Summary(args)) => run_summary(args),
        None => {
            println!("reidset {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Person re-identification dataset indexing.");
            println!();
            println!("Run 'reidset --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the scan subcommand.
fn run_scan(args: ScanArgs) -> Result<(), ReidsetError> {
    let format = RecordFormat::parse(&args.output)?;
    let dir = resolve_root(&args.dir)?;
    let records = parse::parse_directory(&dir, args.relabel)?;
    write_records(&records, format)
}

/// Execute the splits subcommand.
fn run_splits(args: SplitsArgs) -> Result<(), ReidsetError> {
    let format = RecordFormat::parse(&args.output)?;
    let split: Split = args.split.parse()?;
    let dataset = occluded_duke::load(&args.dataset.options())?;
    write_records(dataset.split(split), format)
}

/// Execute the summary subcommand.
fn run_summary(args: SummaryArgs) -> Result<(), ReidsetError> {
    let json = match args.output.as_str() {
        "text" => false,
        "json" => true,
        other => {
            return Err(ReidsetError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    };

    let summary = occluded_duke::load(&args.dataset.options())?.summary();

    if json {
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|source| ReidsetError::JsonWrite { source })?;
        println!("{}", text);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RecordFormat {
    Text,
    Json,
    Csv,
}

impl RecordFormat {
    fn parse(raw: &str) -> Result<Self, ReidsetError> {
        match raw {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ReidsetError::UnsupportedFormat(format!(
                "'{}' (supported: text, json, csv)",
                other
            ))),
        }
    }
}

fn write_records(records: &[ImageRecord], format: RecordFormat) -> Result<(), ReidsetError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        RecordFormat::Text => {
            for record in records {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    record.path.display(),
                    record.identity,
                    record.camera
                )?;
            }
            writeln!(out, "{} record(s)", records.len())?;
        }
        RecordFormat::Json => {
            serde_json::to_writer_pretty(&mut out, records)
                .map_err(|source| ReidsetError::JsonWrite { source })?;
            writeln!(out)?;
        }
        RecordFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            for record in records {
                writer
                    .serialize(record)
                    .map_err(|source| ReidsetError::CsvWrite { source })?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}
