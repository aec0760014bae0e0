//! Series command implementation

use super::shared::CommandStats;
use crate::Result;
use crate::app::services::range_query::DateRange;
use crate::app::services::report_archive::SeriesArchive;
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::SeriesArgs;
use crate::config::Config;
use std::sync::Arc;
use tracing::info;

/// Series command runner
///
/// Range bounds are station-local wall-clock times. Prints each matching file with
/// its decoded span.
pub fn run_series(
    args: SeriesArgs,
    config: &Config,
    registry: Arc<StationRegistry>,
) -> Result<CommandStats> {
    let start = args
        .start
        .map(|start| registry.localize(args.station, start))
        .transpose()?;
    let end = args
        .end
        .map(|end| registry.localize(args.station, end))
        .transpose()?;
    let range = DateRange::new(start, end)?;

    let archive = SeriesArchive::new(&config.archive.one_minute_root, registry);
    info!(
        "Listing {} series files in {}",
        args.station,
        archive.root().display()
    );

    let found = archive.find(args.station, &range)?;
    for series in &found {
        println!(
            "{}\t{}\t{}",
            series.path.display(),
            series.key.start.to_rfc3339(),
            series.key.end.to_rfc3339()
        );
    }

    Ok(CommandStats {
        files_processed: found.len(),
        ..CommandStats::default()
    })
}
