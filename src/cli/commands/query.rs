//! Query command implementation

use super::shared::{CommandStats, format_report, print_failure, print_reports_json};
use crate::Result;
use crate::app::services::report_archive::ReportArchive;
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::{OutputFormat, QueryArgs};
use crate::config::Config;
use std::sync::Arc;
use tracing::info;

/// Query command runner
///
/// Loads every archived report for the station whose summary date falls in the
/// requested range. Files that fail to decode or parse are listed on stderr.
pub fn run_query(
    args: QueryArgs,
    config: &Config,
    registry: Arc<StationRegistry>,
) -> Result<CommandStats> {
    let range = args.date_range()?;
    let archive = ReportArchive::new(&config.archive.cli_root, registry);
    info!(
        "Querying {} reports in {} ({:?} to {:?})",
        args.station,
        archive.root().display(),
        range.start(),
        range.end()
    );

    let outcome = archive.load(args.station, &range)?;
    for failure in &outcome.failures {
        print_failure(&failure.path, &failure.error);
    }

    match args.output_format {
        OutputFormat::Json => print_reports_json(&outcome.reports)?,
        OutputFormat::Text => {
            for report in &outcome.reports {
                println!("{}", format_report(report));
            }
        }
    }

    Ok(CommandStats {
        files_processed: outcome.reports.len(),
        files_failed: outcome.failures.len(),
        reports_stored: 0,
    })
}
