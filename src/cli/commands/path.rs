//! Path command implementation

use super::shared::CommandStats;
use crate::Result;
use crate::app::models::PartialArchiveKey;
use crate::app::services::archive_codec::ReportPathCodec;
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::PathArgs;
use crate::config::Config;
use std::sync::Arc;

/// Path command runner
///
/// Prints the canonical path for a complete key, or the glob pattern for a
/// partial one.
pub fn run_path(
    args: PathArgs,
    config: &Config,
    registry: Arc<StationRegistry>,
) -> Result<CommandStats> {
    let key = build_key(&args, &registry)?;
    let codec = ReportPathCodec::new(&config.archive.cli_root, registry);

    println!("{}", codec.encode(&key)?.display());
    Ok(CommandStats::default())
}

/// Partial key from the command arguments, localizing the issuance time
fn build_key(args: &PathArgs, registry: &StationRegistry) -> Result<PartialArchiveKey> {
    let mut key = PartialArchiveKey {
        station: args.station,
        summary_date: args.summary,
        ..PartialArchiveKey::default()
    };
    if let (Some(station), Some(issued)) = (args.station, args.issued) {
        key.issuance_time = Some(registry.localize(station, issued)?);
    }
    Ok(key)
}
