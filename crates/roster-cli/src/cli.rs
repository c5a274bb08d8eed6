//! CLI argument definitions for the roster importer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster Importer - Map and import member rosters",
    long_about = "Import member rosters from CSV, TSV, or Excel files.\n\n\
                  Headers are auto-mapped onto the member schema; review the\n\
                  mapping and validation findings with `inspect`, then run\n\
                  `import` to write members into the community store."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a file, auto-map its headers, and show the validation report.
    Inspect(InspectArgs),

    /// Run the full import pipeline against a community store.
    Import(ImportArgs),

    /// List the target member schema columns.
    Schema,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Number of preview rows to print (0 for none).
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,
}

#[derive(Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Community the imported members belong to.
    #[arg(long = "community", value_name = "ID")]
    pub community: String,

    /// Directory holding the member table files.
    #[arg(long = "store-dir", value_name = "DIR", default_value = "data")]
    pub store_dir: PathBuf,

    /// Destination table when no gender split applies.
    #[arg(long = "target", value_enum, default_value = "men")]
    pub target: TargetArg,

    /// Split rows into the men/women tables using the detected gender column.
    #[arg(long = "split", conflicts_with = "no_split")]
    pub split: bool,

    /// Keep all rows together even though a gender column was detected.
    #[arg(long = "no-split")]
    pub no_split: bool,

    /// Validate and walk the batches without writing to the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Override a cell before import, as ROW:Target=value (ROW is 1-based).
    #[arg(long = "edit", value_name = "ROW:TARGET=VALUE")]
    pub edit: Vec<String>,

    /// Rows inserted per batch.
    #[arg(long = "batch-size", value_name = "N", default_value_t = 50)]
    pub batch_size: usize,
}

/// Mapping flags shared by `inspect` and `import`.
#[derive(Args)]
pub struct MappingArgs {
    /// Roster file to read (.csv, .tsv, .txt, .xlsx, .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Override one header's mapping, as "Header=Target".
    #[arg(long = "map", value_name = "HEADER=TARGET")]
    pub map: Vec<String>,

    /// Clear one header's mapping.
    #[arg(long = "unmap", value_name = "HEADER")]
    pub unmap: Vec<String>,

    /// Load a saved mapping file before applying --map/--unmap overrides.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping_file: Option<PathBuf>,

    /// Save the final mapping for reuse.
    #[arg(long = "save-mapping", value_name = "PATH")]
    pub save_mapping: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TargetArg {
    Men,
    Women,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
