//! Command-line argument definitions for the NWS climate report tool
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::Result;
use crate::app::models::StationId;
use crate::app::services::range_query::DateRange;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NWS climate report tool
///
/// Parses National Weather Service daily climate reports and manages a
/// filename-indexed archive of reports and one-minute observation series.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nws-climate",
    version,
    about = "Parse NWS daily climate reports and query a filename-indexed archive",
    long_about = "Parses National Weather Service daily climate (CLI) reports into structured \
                  records, stores them in an archive whose file names encode station, issuance \
                  time and summary date, and answers date-range queries from file names alone."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and the configured level.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for archive roots, logging and station overrides.
    /// If not specified, looks for the platform config directory's nws-climate/config.toml
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse report files and print the extracted records
    Parse(ParseArgs),
    /// Parse report files and store them in the archive
    Ingest(IngestArgs),
    /// Load archived reports for a station and date range
    Query(QueryArgs),
    /// Print the archive path (or glob pattern) for a key
    Path(PathArgs),
    /// List one-minute series files overlapping a time range
    Series(SeriesArgs),
    /// Show the station registry
    Stations(StationsArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Report files to parse
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for parsed reports"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the ingest command
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Report files to store
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    #[arg(
        long = "root",
        value_name = "PATH",
        help = "Report archive root (overrides archive.cli_root)"
    )]
    pub root: Option<PathBuf>,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    #[arg(short = 's', long = "station", value_name = "ID", help = "Station code, e.g. NYC")]
    pub station: StationId,

    #[arg(long = "start", value_name = "DATE", help = "First summary date (YYYY-MM-DD)")]
    pub start: Option<NaiveDate>,

    #[arg(long = "end", value_name = "DATE", help = "Last summary date (YYYY-MM-DD)")]
    pub end: Option<NaiveDate>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for loaded reports"
    )]
    pub output_format: OutputFormat,

    #[arg(
        long = "root",
        value_name = "PATH",
        help = "Report archive root (overrides archive.cli_root)"
    )]
    pub root: Option<PathBuf>,
}

/// Arguments for the path command
#[derive(Debug, Clone, Parser)]
pub struct PathArgs {
    #[arg(short = 's', long = "station", value_name = "ID", help = "Station code, e.g. NYC")]
    pub station: Option<StationId>,

    /// Issuance time as station-local wall-clock time
    #[arg(
        long = "issued",
        value_name = "DATETIME",
        help = "Issuance time, station-local (YYYY-MM-DDTHH:MM:SS)",
        requires = "station"
    )]
    pub issued: Option<NaiveDateTime>,

    #[arg(long = "summary", value_name = "DATE", help = "Summary date (YYYY-MM-DD)")]
    pub summary: Option<NaiveDate>,

    #[arg(
        long = "root",
        value_name = "PATH",
        help = "Report archive root (overrides archive.cli_root)"
    )]
    pub root: Option<PathBuf>,
}

/// Arguments for the series command
#[derive(Debug, Clone, Parser)]
pub struct SeriesArgs {
    #[arg(short = 's', long = "station", value_name = "ID", help = "Station code, e.g. NYC")]
    pub station: StationId,

    /// Range start as station-local wall-clock time
    #[arg(long = "start", value_name = "DATETIME", help = "Range start, station-local")]
    pub start: Option<NaiveDateTime>,

    /// Range end as station-local wall-clock time
    #[arg(long = "end", value_name = "DATETIME", help = "Range end, station-local")]
    pub end: Option<NaiveDateTime>,

    #[arg(
        long = "root",
        value_name = "PATH",
        help = "Series archive root (overrides archive.one_minute_root)"
    )]
    pub root: Option<PathBuf>,
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    #[arg(long = "office", value_name = "CODE", help = "Only stations issued by this office")]
    pub office: Option<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the station table"
    )]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the log level from verbosity flags, falling back to the configured level
    pub fn get_log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => configured,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Commands {
    /// Report archive root given on the command line, if any
    pub fn cli_root(&self) -> Option<PathBuf> {
        match self {
            Commands::Ingest(args) => args.root.clone(),
            Commands::Query(args) => args.root.clone(),
            Commands::Path(args) => args.root.clone(),
            _ => None,
        }
    }

    /// Series archive root given on the command line, if any
    pub fn one_minute_root(&self) -> Option<PathBuf> {
        match self {
            Commands::Series(args) => args.root.clone(),
            _ => None,
        }
    }
}

impl QueryArgs {
    /// Summary date range to query
    pub fn date_range(&self) -> Result<DateRange<NaiveDate>> {
        DateRange::new(self.start, self.end)
    }
}
