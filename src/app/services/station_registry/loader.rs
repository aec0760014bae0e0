//! Station registry construction from configuration entries
//!
//! Configured `[[stations]]` entries overlay the built-in table, so a deployment can
//! correct an office code or timezone without a rebuild.

use super::{StationProfile, StationRegistry};
use crate::config::StationEntry;
use crate::{Error, Result};
use chrono_tz::Tz;
use tracing::{debug, info};

impl StationRegistry {
    /// Build a registry from the built-in table overlaid with configured entries
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if an entry names an unknown IANA timezone
    ///   or an office code that is not three uppercase letters
    pub fn load_with_overrides(entries: &[StationEntry]) -> Result<Self> {
        let mut registry = Self::builtin();

        for entry in entries {
            let profile = profile_from_entry(entry)?;
            debug!(
                "Overriding station {}: timezone={}, office={}",
                profile.station, profile.timezone, profile.office
            );
            registry.insert(profile);
        }

        info!(
            "Station registry ready with {} stations ({} configured overrides)",
            registry.station_count(),
            entries.len()
        );
        Ok(registry)
    }

    /// Build a registry containing only the configured entries
    pub fn load_exact(entries: &[StationEntry]) -> Result<Self> {
        let profiles = entries
            .iter()
            .map(profile_from_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_profiles(profiles))
    }
}

/// Convert and validate one configured station entry
pub fn profile_from_entry(entry: &StationEntry) -> Result<StationProfile> {
    let timezone = entry.timezone.parse::<Tz>().map_err(|e| {
        Error::configuration(format!(
            "Invalid timezone '{}' for station {}: {}",
            entry.timezone, entry.station, e
        ))
    })?;

    if !is_office_code(&entry.office) {
        return Err(Error::configuration(format!(
            "Invalid office code '{}' for station {}: expected three uppercase letters",
            entry.office, entry.station
        )));
    }

    Ok(StationProfile::new(entry.station, timezone, entry.office.clone()))
}

fn is_office_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}
