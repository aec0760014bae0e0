//! Shared test utilities and fixtures for station registry tests

use crate::app::models::StationId;
use crate::config::StationEntry;


/// Create a configured station entry
pub fn create_test_entry(station: StationId, timezone: &str, office: &str) -> StationEntry {
    StationEntry {
        station,
        timezone: timezone.to_string(),
        office: office.to_string(),
    }
}
