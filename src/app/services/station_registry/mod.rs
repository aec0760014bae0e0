//! Station registry service for timezone and issuing-office lookups
//!
//! This module provides the immutable station table that the report parser and the
//! archive codec consult to localize naive report timestamps. The registry is built
//! once (from the built-in table, optionally overlaid with configured entries) and
//! shared read-only behind an `Arc`.

use crate::app::models::StationId;
use crate::{Error, Result};
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::HashMap;

pub mod loader;
pub mod query;

#[cfg(test)]
pub mod tests;

/// Timezone and issuing office for one station
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationProfile {
    /// Station identifier
    pub station: StationId,

    /// Canonical IANA timezone of the station
    pub timezone: Tz,

    /// Three-letter code of the office that issues the station's reports
    pub office: String,
}

impl StationProfile {
    pub fn new(station: StationId, timezone: Tz, office: impl Into<String>) -> Self {
        Self {
            station,
            timezone,
            office: office.into(),
        }
    }
}

/// Station registry providing O(1) profile lookups
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Profiles indexed by station identifier
    pub(crate) profiles: HashMap<StationId, StationProfile>,
}

impl StationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a set of profiles; later entries replace earlier ones
    pub fn from_profiles(profiles: impl IntoIterator<Item = StationProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.station, profile))
                .collect(),
        }
    }

    /// Registry holding the built-in settlement stations
    pub fn builtin() -> Self {
        use chrono_tz::America::{Chicago, Denver, Los_Angeles, New_York};

        Self::from_profiles([
            StationProfile::new(StationId::Nyc, New_York, "OKX"),
            StationProfile::new(StationId::Mdw, Chicago, "LOT"),
            StationProfile::new(StationId::Mia, New_York, "MFL"),
            StationProfile::new(StationId::Aus, Chicago, "EWX"),
            StationProfile::new(StationId::Den, Denver, "BOU"),
            StationProfile::new(StationId::Phl, New_York, "PHI"),
            StationProfile::new(StationId::Lax, Los_Angeles, "LOX"),
        ])
    }

    /// Insert or replace a profile
    pub fn insert(&mut self, profile: StationProfile) {
        self.profiles.insert(profile.station, profile);
    }

    /// Get a station profile; a missing entry is a configuration error
    pub fn profile(&self, station: StationId) -> Result<&StationProfile> {
        self.profiles
            .get(&station)
            .ok_or_else(|| Error::station_not_configured(station))
    }

    /// Check if a station has a registry entry
    pub fn contains_station(&self, station: StationId) -> bool {
        self.profiles.contains_key(&station)
    }

    /// Get the total number of stations in the registry
    pub fn station_count(&self) -> usize {
        self.profiles.len()
    }

    /// Timezone of a station
    pub fn timezone(&self, station: StationId) -> Result<Tz> {
        self.profile(station).map(|profile| profile.timezone)
    }

    /// Issuing office of a station
    pub fn office(&self, station: StationId) -> Result<&str> {
        self.profile(station).map(|profile| profile.office.as_str())
    }

    /// Attach a station's timezone to a naive local timestamp
    pub fn localize(&self, station: StationId, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
        let timezone = self.timezone(station)?;
        localize(timezone, naive).ok_or_else(|| Error::unrepresentable_timestamp(station, naive))
    }
}

/// Attach a timezone to a naive local timestamp
///
/// A repeated wall-clock time (end of daylight saving) resolves to the standard-time
/// instant. A skipped wall-clock time (start of daylight saving) is read with the
/// offset in force before the transition, which lands one hour later on the clock.
pub fn localize(timezone: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => Some(datetime),
        LocalResult::Ambiguous(_, standard) => Some(standard),
        LocalResult::None => timezone
            .from_local_datetime(&(naive - Duration::hours(1)))
            .latest()
            .map(|before| before + Duration::hours(1)),
    }
}
