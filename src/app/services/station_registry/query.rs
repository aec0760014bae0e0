//! Station listing and reverse lookups

use super::{StationProfile, StationRegistry};
use crate::app::models::StationId;

impl StationRegistry {
    /// Get all station IDs in the registry, in enumeration order
    pub fn station_ids(&self) -> Vec<StationId> {
        let mut ids: Vec<StationId> = self.profiles.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Get all profiles in the registry, in enumeration order
    pub fn stations(&self) -> Vec<&StationProfile> {
        let mut profiles: Vec<&StationProfile> = self.profiles.values().collect();
        profiles.sort_by_key(|profile| profile.station);
        profiles
    }

    /// Find the stations whose reports are issued by an office
    ///
    /// A forecast office may issue reports for more than one climate site.
    pub fn stations_for_office(&self, office: &str) -> Vec<StationId> {
        let mut ids: Vec<StationId> = self
            .profiles
            .values()
            .filter(|profile| profile.office.eq_ignore_ascii_case(office))
            .map(|profile| profile.station)
            .collect();
        ids.sort();
        ids
    }
}
