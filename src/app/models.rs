//! Data models for NWS climate report processing
//!
//! This module contains the station identifiers, the structured climate report record,
//! and the archive keys that identify stored artifacts by filename.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::AFTERNOON_CUTOFF_HOUR;

// =============================================================================
// Station Identifiers
// =============================================================================

/// Enumerated climate report stations
///
/// The identifier is the three-letter code that follows `CLI` in the report's
/// product line (e.g. `CLINYC`), and is also the directory name used in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StationId {
    /// New York, Central Park
    Nyc,
    /// Chicago, Midway
    Mdw,
    /// Miami
    Mia,
    /// Austin, Camp Mabry
    Aus,
    /// Denver
    Den,
    /// Philadelphia
    Phl,
    /// Los Angeles
    Lax,
}

impl StationId {
    /// All enumerated stations
    pub const ALL: [StationId; 7] = [
        StationId::Nyc,
        StationId::Mdw,
        StationId::Mia,
        StationId::Aus,
        StationId::Den,
        StationId::Phl,
        StationId::Lax,
    ];

    /// Three-letter code as it appears in reports and archive paths
    pub fn as_str(&self) -> &'static str {
        match self {
            StationId::Nyc => "NYC",
            StationId::Mdw => "MDW",
            StationId::Mia => "MIA",
            StationId::Aus => "AUS",
            StationId::Den => "DEN",
            StationId::Phl => "PHL",
            StationId::Lax => "LAX",
        }
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StationId::ALL
            .iter()
            .find(|station| station.as_str() == s)
            .copied()
            .ok_or_else(|| Error::unknown_station(s))
    }
}

// =============================================================================
// Climate Report
// =============================================================================

/// Structured content of one daily climate report
///
/// Created once by the report parser and never mutated. Temperatures are `None`
/// when the report carried the `MM` missing-data sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateReport {
    /// Station the report describes
    pub station: StationId,

    /// Issuance instant, localized to the station timezone
    pub issuance_time: DateTime<Tz>,

    /// Office code from the report header (e.g. "OKX")
    pub issuing_office: String,

    /// Station-local date the report summarizes
    pub summary_date: NaiveDate,

    /// Whether the "valid as of" time is at or after the afternoon cutoff
    pub is_afternoon_report: bool,

    /// Maximum temperature in degrees F
    pub max_temp: Option<i32>,

    /// Time the maximum was observed
    pub max_temp_time: Option<DateTime<Tz>>,

    /// Minimum temperature in degrees F
    pub min_temp: Option<i32>,

    /// Time the minimum was observed
    pub min_temp_time: Option<DateTime<Tz>>,

    /// Average temperature in degrees F
    pub avg_temp: Option<i32>,

    /// Time the summary is valid as of, for same-day reports
    pub valid_time: Option<DateTime<Tz>>,

    /// Whether the report is a correction of an earlier issuance
    pub is_correction: bool,

    /// Original report text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raw_text: String,
}

impl ClimateReport {
    /// Archive identity of this report
    pub fn archive_key(&self) -> ArchiveKey {
        ArchiveKey {
            station: self.station,
            issuance_time: self.issuance_time,
            summary_date: self.summary_date,
        }
    }

    /// Copy of the report without its raw text, for logging and display
    pub fn redacted(&self) -> Self {
        Self {
            raw_text: String::new(),
            ..self.clone()
        }
    }

    /// Days between the issuance date and the summary date (0 or 1)
    pub fn report_day_delta(&self) -> i64 {
        (self.issuance_time.date_naive() - self.summary_date).num_days()
    }
}

/// Whether a "valid as of" instant marks an afternoon report
pub fn is_afternoon(valid_time: Option<&DateTime<Tz>>) -> bool {
    valid_time.is_some_and(|valid| valid.hour() >= AFTERNOON_CUTOFF_HOUR)
}

// =============================================================================
// Archive Keys
// =============================================================================

/// Identity of an archived climate report
///
/// This is what the archive path encodes; it can be recovered from a file name
/// without reading the report body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchiveKey {
    pub station: StationId,
    pub issuance_time: DateTime<Tz>,
    pub summary_date: NaiveDate,
}

/// Archive key with any component left unset
///
/// Unset components become wildcards when encoded into a path pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialArchiveKey {
    pub station: Option<StationId>,
    pub issuance_time: Option<DateTime<Tz>>,
    pub summary_date: Option<NaiveDate>,
}

impl PartialArchiveKey {
    /// Key matching every archived report
    pub fn any() -> Self {
        Self::default()
    }

    /// Key matching every report for one station
    pub fn for_station(station: StationId) -> Self {
        Self {
            station: Some(station),
            ..Self::default()
        }
    }

    /// Restrict to an issuance instant
    pub fn with_issuance_time(mut self, issuance_time: DateTime<Tz>) -> Self {
        self.issuance_time = Some(issuance_time);
        self
    }

    /// Restrict to a summary date
    pub fn with_summary_date(mut self, summary_date: NaiveDate) -> Self {
        self.summary_date = Some(summary_date);
        self
    }

    /// Fully specified key, if every component is set
    pub fn complete(&self) -> Option<ArchiveKey> {
        Some(ArchiveKey {
            station: self.station?,
            issuance_time: self.issuance_time?,
            summary_date: self.summary_date?,
        })
    }
}

impl From<ArchiveKey> for PartialArchiveKey {
    fn from(key: ArchiveKey) -> Self {
        Self {
            station: Some(key.station),
            issuance_time: Some(key.issuance_time),
            summary_date: Some(key.summary_date),
        }
    }
}

/// Identity of an archived one-minute observation series file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesKey {
    pub station: StationId,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Series key with any component left unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialSeriesKey {
    pub station: Option<StationId>,
    pub start: Option<DateTime<Tz>>,
    pub end: Option<DateTime<Tz>>,
}

impl PartialSeriesKey {
    /// Key matching every series file for one station
    pub fn for_station(station: StationId) -> Self {
        Self {
            station: Some(station),
            ..Self::default()
        }
    }
}

impl From<SeriesKey> for PartialSeriesKey {
    fn from(key: SeriesKey) -> Self {
        Self {
            station: Some(key.station),
            start: Some(key.start),
            end: Some(key.end),
        }
    }
}
