//! Command implementations for the NWS climate report CLI
//!
//! Each command is implemented in its own module. Configuration is loaded and logging
//! initialized once here, and the resulting station registry is shared with the
//! command through an `Arc`.

pub mod ingest;
pub mod parse;
pub mod path;
pub mod query;
pub mod series;
pub mod shared;
pub mod stations;

pub use shared::CommandStats;

use crate::Result;
use crate::cli::args::{Args, Commands};
use shared::{config_file_path, load_configuration, log_config_source, setup_logging};
use std::sync::Arc;
use tracing::debug;

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `parse`: Parse report files and print records
/// - `ingest`: Parse report files and store them in the archive
/// - `query`: Load archived reports by station and summary date
/// - `path`: Print the encoded archive path or pattern
/// - `series`: List one-minute series files overlapping a range
/// - `stations`: Show the station registry
pub fn run(args: Args) -> Result<CommandStats> {
    let config_file = config_file_path(&args);
    let config = load_configuration(&args, config_file.as_deref())?;
    setup_logging(&args, &config.logging.level)?;
    log_config_source(config_file.as_deref());
    debug!("Arguments: {:?}", args);

    let registry = Arc::new(config.station_registry()?);
    let show_progress = args.show_progress();

    match args.command {
        Commands::Parse(parse_args) => parse::run_parse(parse_args, registry, show_progress),
        Commands::Ingest(ingest_args) => {
            ingest::run_ingest(ingest_args, &config, registry, show_progress)
        }
        Commands::Query(query_args) => query::run_query(query_args, &config, registry),
        Commands::Path(path_args) => path::run_path(path_args, &config, registry),
        Commands::Series(series_args) => series::run_series(series_args, &config, registry),
        Commands::Stations(stations_args) => stations::run_stations(stations_args, &registry),
    }
}
