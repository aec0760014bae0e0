//! Parse command implementation
//!
//! Parses report files without touching the archive and prints the extracted
//! records. A file that fails to parse is reported and counted; the remaining
//! files are still processed.

use super::shared::{
    CommandStats, create_progress_bar, format_report, print_failure, print_reports_json,
    print_summary,
};
use crate::Result;
use crate::app::services::report_parser::ReportParser;
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::{OutputFormat, ParseArgs};
use std::sync::Arc;
use tracing::{info, warn};

/// Parse command runner
pub fn run_parse(
    args: ParseArgs,
    registry: Arc<StationRegistry>,
    show_progress: bool,
) -> Result<CommandStats> {
    info!("Parsing {} report files", args.files.len());

    let parser = ReportParser::new(registry);
    let mut stats = CommandStats::default();
    let mut reports = Vec::with_capacity(args.files.len());

    let pb = create_progress_bar(args.files.len(), "Parsing reports", show_progress);
    for file in &args.files {
        match parser.parse_file(file) {
            Ok(report) => {
                stats.files_processed += 1;
                reports.push(report);
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", file.display(), e);
                pb.suspend(|| print_failure(file, &e));
                stats.files_failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    match args.output_format {
        OutputFormat::Json => print_reports_json(&reports)?,
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", format_report(report));
            }
            if args.files.len() > 1 {
                print_summary("Parse complete", &stats);
            }
        }
    }

    Ok(stats)
}
