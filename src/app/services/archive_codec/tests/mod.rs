//! Shared fixtures for archive path codec tests

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::app::services::archive_codec::{ReportPathCodec, SeriesPathCodec};
use crate::app::services::station_registry::StationRegistry;

pub mod report_path_tests;

pub const TEST_ROOT: &str = "/archive";

pub fn create_report_codec() -> ReportPathCodec {
    ReportPathCodec::new(format!("{}/cli", TEST_ROOT), Arc::new(StationRegistry::builtin()))
}

pub fn create_series_codec() -> SeriesPathCodec {
    SeriesPathCodec::new(
        format!("{}/one_minute", TEST_ROOT),
        Arc::new(StationRegistry::builtin()),
    )
}

/// Wall-clock instant in a timezone, resolving the unambiguous case only
pub fn local(tz: Tz, y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Tz> {
    tz.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
