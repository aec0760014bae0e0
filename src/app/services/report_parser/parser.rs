//! Climate report parser implementation
//!
//! The grammar is an ordered list of steps over a [`LineCursor`]. Each step either
//! searches forward for an anchor or asserts the shape of the current line; any failure
//! aborts the whole report with a typed error.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use regex::Captures;
use tracing::{debug, trace};

use super::cursor::LineCursor;
use super::patterns;
use super::time_parsing::{parse_clock, parse_clock_token, parse_date_parts, parse_date_phrase};
use crate::app::models::{ClimateReport, StationId, is_afternoon};
use crate::app::services::station_registry::StationRegistry;
use crate::constants::{
    CLIMATE_REPORT_HEADER, CORRECTION_MARKER, ISSUING_ORGANIZATION_PREFIX, MISSING_SENTINEL,
    TODAY_LABEL, VALID_MARKER, YESTERDAY_LABEL,
};
use crate::{Error, Result};

/// One row of the temperature table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TemperatureReading {
    value: Option<i32>,
    time: Option<DateTime<Tz>>,
}

/// Parser for NWS climate report text
///
/// Holds the station registry used to localize report timestamps. The parser itself is
/// stateless, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct ReportParser {
    station_registry: Arc<StationRegistry>,
}

impl ReportParser {
    /// Create a new parser with station registry dependency
    pub fn new(station_registry: Arc<StationRegistry>) -> Self {
        Self { station_registry }
    }

    /// Registry used for timezone lookups
    pub fn station_registry(&self) -> &Arc<StationRegistry> {
        &self.station_registry
    }

    /// Read and parse a report file
    pub fn parse_file(&self, file_path: &Path) -> Result<ClimateReport> {
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read report {}", file_path.display()), e)
        })?;
        self.parse(&content)
    }

    /// Parse raw report text into a structured report
    pub fn parse(&self, raw_text: &str) -> Result<ClimateReport> {
        let mut cursor = LineCursor::new(raw_text);

        // Header: office, station, fixed title block, issuance time
        let site = cursor.seek(&patterns::SITE_LINE, "site")?;
        let issuing_office = site[1].to_string();

        let station_line = cursor.seek(&patterns::STATION_LINE, "station")?;
        let station: StationId = station_line[1].parse()?;
        let timezone = self.station_registry.timezone(station)?;
        trace!("Report header: office={}, station={}", issuing_office, station);

        cursor.expect_line("blank line", |line| line.trim().is_empty())?;
        cursor.expect_line(CLIMATE_REPORT_HEADER, |line| {
            line.trim().starts_with(CLIMATE_REPORT_HEADER)
        })?;
        cursor.expect_line(ISSUING_ORGANIZATION_PREFIX, |line| {
            line.trim().starts_with(ISSUING_ORGANIZATION_PREFIX)
        })?;

        let issuance = cursor.expect_match(&patterns::ISSUANCE_LINE, "issuance timestamp")?;
        let issuance_time = self.parse_issuance(station, &issuance)?;

        // Summary date and the optional "valid as of" line
        let summary = cursor.seek(&patterns::SUMMARY_DATE, "summary date")?;
        let summary_date = parse_date_phrase(&summary[1], "summary date")?;

        let valid_time = match cursor.current() {
            Some(line) if line.contains(VALID_MARKER) => {
                let valid = cursor
                    .expect_match(&patterns::VALID_AS_OF, "VALID ... AS OF <time> LOCAL TIME")?;
                let time = parse_clock(&valid[1], &valid[2], "valid time")?;
                Some(self.station_registry.localize(station, summary_date.and_time(time))?)
            }
            _ => None,
        };

        // Temperature table
        cursor.seek(&patterns::TEMPERATURE_SECTION, "temperature section")?;
        check_day_label(&mut cursor, issuance_time.date_naive(), summary_date)?;

        let maximum = cursor.expect_match(&patterns::MAXIMUM, "MAXIMUM temperature line")?;
        let max = self.temperature_reading(station, summary_date, &maximum, "maximum temperature")?;

        let minimum =
            cursor.seek_before(&patterns::MINIMUM, &patterns::DAY_LABEL, "minimum temperature")?;
        let min = self.temperature_reading(station, summary_date, &minimum, "minimum temperature")?;

        let average =
            cursor.seek_before(&patterns::AVERAGE, &patterns::DAY_LABEL, "average temperature")?;
        let avg_temp = parse_temperature_value(&average[1], "average temperature")?;

        let report = ClimateReport {
            station,
            issuance_time,
            issuing_office,
            summary_date,
            is_afternoon_report: is_afternoon(valid_time.as_ref()),
            max_temp: max.value,
            max_temp_time: max.time,
            min_temp: min.value,
            min_temp_time: min.time,
            avg_temp,
            valid_time,
            is_correction: raw_text.contains(CORRECTION_MARKER),
            raw_text: raw_text.to_string(),
        };

        debug!(
            "Parsed {} report for {} issued {} (tz {}): max={:?} min={:?} avg={:?}",
            report.station,
            report.summary_date,
            report.issuance_time,
            timezone,
            report.max_temp,
            report.min_temp,
            report.avg_temp
        );
        Ok(report)
    }

    /// Localize the issuance line captures into the station timezone
    fn parse_issuance(&self, station: StationId, caps: &Captures<'_>) -> Result<DateTime<Tz>> {
        let time = parse_clock(&caps[1], &caps[2], "issuance time")?;
        let date = parse_date_parts(&caps[3], &caps[4], &caps[5], "issuance date")?;
        self.station_registry.localize(station, date.and_time(time))
    }

    /// Convert a MAXIMUM/MINIMUM row into value and localized time
    fn temperature_reading(
        &self,
        station: StationId,
        summary_date: NaiveDate,
        caps: &Captures<'_>,
        field: &'static str,
    ) -> Result<TemperatureReading> {
        let value = parse_temperature_value(&caps[1], field)?;

        // A time is only meaningful alongside a reported value
        let time = match (value, &caps[2]) {
            (None, _) => None,
            (Some(_), token) if token == MISSING_SENTINEL => None,
            (Some(_), token) => {
                let time = parse_clock_token(token, field)?;
                Some(self.station_registry.localize(station, summary_date.and_time(time))?)
            }
        };

        Ok(TemperatureReading { value, time })
    }
}

/// Parse a temperature value, mapping the missing-data sentinel to `None`
fn parse_temperature_value(token: &str, field: &'static str) -> Result<Option<i32>> {
    if token == MISSING_SENTINEL {
        return Ok(None);
    }
    token
        .parse::<i32>()
        .map(Some)
        .map_err(|_| Error::invalid_field(field, token))
}

/// Check the TODAY/YESTERDAY label against the issuance/summary day delta
fn check_day_label(
    cursor: &mut LineCursor<'_>,
    issuance_date: NaiveDate,
    summary_date: NaiveDate,
) -> Result<()> {
    let delta_days = (issuance_date - summary_date).num_days();
    let actual = cursor.current().map(str::trim).unwrap_or_default().to_string();

    let expected = match delta_days {
        0 => TODAY_LABEL,
        1 => YESTERDAY_LABEL,
        _ => return Err(Error::inconsistent_report_day(actual, delta_days)),
    };

    if actual != expected {
        return Err(Error::inconsistent_report_day(actual, delta_days));
    }
    cursor.advance();
    Ok(())
}
