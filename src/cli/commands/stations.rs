//! Stations command implementation
//!
//! Prints the station registry in effect after configuration overrides, optionally
//! restricted to the stations of one issuing office.

use super::shared::CommandStats;
use crate::app::services::station_registry::{StationProfile, StationRegistry};
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::{Error, Result};
use colored::*;
use tracing::debug;

/// Stations command runner
pub fn run_stations(args: StationsArgs, registry: &StationRegistry) -> Result<CommandStats> {
    let profiles = select_profiles(registry, args.office.as_deref())?;
    debug!("Showing {} of {} stations", profiles.len(), registry.station_count());

    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profiles)?),
        OutputFormat::Text => {
            println!(
                "{:<8} {:<8} {}",
                "STATION".bold(),
                "OFFICE".bold(),
                "TIMEZONE".bold()
            );
            for profile in &profiles {
                println!(
                    "{:<8} {:<8} {}",
                    profile.station.as_str(),
                    profile.office,
                    profile.timezone.name()
                );
            }
        }
    }

    Ok(CommandStats::default())
}

/// Profiles to show, in station order
fn select_profiles<'a>(
    registry: &'a StationRegistry,
    office: Option<&str>,
) -> Result<Vec<&'a StationProfile>> {
    let Some(office) = office else {
        return Ok(registry.stations());
    };

    let stations = registry.stations_for_office(office);
    if stations.is_empty() {
        return Err(Error::configuration(format!(
            "No stations are issued by office '{}'",
            office
        )));
    }
    stations
        .into_iter()
        .map(|station| registry.profile(station))
        .collect()
}
