//! Ingest command implementation
//!
//! Parses report files and stores each successfully parsed report at its
//! canonical archive path.

use super::shared::{CommandStats, create_progress_bar, print_failure, print_summary};
use crate::Result;
use crate::app::services::report_archive::ReportArchive;
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::IngestArgs;
use crate::config::Config;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ingest command runner
pub fn run_ingest(
    args: IngestArgs,
    config: &Config,
    registry: Arc<StationRegistry>,
    show_progress: bool,
) -> Result<CommandStats> {
    let archive = ReportArchive::new(&config.archive.cli_root, registry);
    info!(
        "Ingesting {} report files into {}",
        args.files.len(),
        archive.root().display()
    );

    let mut stats = CommandStats::default();
    let pb = create_progress_bar(args.files.len(), "Ingesting reports", show_progress);

    for file in &args.files {
        let stored = archive
            .parser()
            .parse_file(file)
            .and_then(|report| archive.store(&report));

        match stored {
            Ok(path) => {
                debug!("{} -> {}", file.display(), path.display());
                stats.files_processed += 1;
                stats.reports_stored += 1;
            }
            Err(e) => {
                warn!("Failed to ingest {}: {}", file.display(), e);
                pb.suspend(|| print_failure(file, &e));
                stats.files_failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_summary("Ingest complete", &stats);
    Ok(stats)
}
