//! NWS Climate Report Library
//!
//! A Rust library for turning National Weather Service daily climate reports
//! (CLI products) into structured records and keeping them in a filename-indexed
//! on-disk archive.
//!
//! This library provides tools for:
//! - Parsing raw CLI report text with a forward-only line cursor
//! - Resolving station timezones and issuing offices from an immutable registry
//! - Encoding report identities into canonical archive paths and decoding them back
//! - Filtering archived artifacts by date range without reading their bodies
//! - Storing and loading reports with per-item failure collection

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod archive_codec;
        pub mod range_query;
        pub mod report_archive;
        pub mod report_parser;
        pub mod station_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ArchiveKey, ClimateReport, PartialArchiveKey, StationId};
pub use app::services::range_query::{DateRange, in_range, ranges_intersect};
pub use config::Config;

/// Result type alias for climate report processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report parsing, archive path handling and range queries
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required forward-searched line never matched before input ran out
    #[error("Anchor not found: {field}")]
    AnchorNotFound { field: &'static str },

    /// The line at the cursor did not have the required shape
    #[error("Malformed report structure: expected {expected}, found '{actual}'")]
    MalformedStructure { expected: String, actual: String },

    /// Station code outside the enumerated station set
    #[error("Unknown station: {code}")]
    UnknownStation { code: String },

    /// Enumerated station with no registry entry
    #[error("Station {station} has no registry entry")]
    StationNotConfigured { station: String },

    /// TODAY/YESTERDAY label disagrees with the issuance/summary day delta
    #[error(
        "Inconsistent report day: label '{label}' with issuance {delta_days} day(s) after summary date"
    )]
    InconsistentReportDay { label: String, delta_days: i64 },

    /// A matched field could not be converted to a value
    #[error("Invalid value for {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },

    /// Archive path does not follow the path template
    #[error("Invalid archive path '{path}': {reason}")]
    PathFormat { path: String, reason: String },

    /// Archive path's parent directory disagrees with its embedded station
    #[error("Archive path '{path}' is stored under '{directory}' but encodes station {station}")]
    PathStationMismatch {
        path: String,
        directory: String,
        station: String,
    },

    /// A timestamp that cannot survive naive local-time path encoding
    #[error("Timestamp {local} cannot be encoded unambiguously for station {station}")]
    UnrepresentableTimestamp { station: String, local: String },

    /// A range whose start is after its end
    #[error("Invalid range: start {start} is after end {end}")]
    RangePrecondition { start: String, end: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File or directory not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Glob pattern rejected
    #[error("Invalid glob pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Serialization of output failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an anchor-not-found error for a named field
    pub fn anchor_not_found(field: &'static str) -> Self {
        Self::AnchorNotFound { field }
    }

    /// Create a malformed structure error
    pub fn malformed_structure(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::MalformedStructure {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unknown station error
    pub fn unknown_station(code: impl Into<String>) -> Self {
        Self::UnknownStation { code: code.into() }
    }

    /// Create a station-not-configured error
    pub fn station_not_configured(station: impl std::fmt::Display) -> Self {
        Self::StationNotConfigured {
            station: station.to_string(),
        }
    }

    /// Create an inconsistent report day error
    pub fn inconsistent_report_day(label: impl Into<String>, delta_days: i64) -> Self {
        Self::InconsistentReportDay {
            label: label.into(),
            delta_days,
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// Create a path format error
    pub fn path_format(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PathFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a path/station mismatch error
    pub fn path_station_mismatch(
        path: impl Into<String>,
        directory: impl Into<String>,
        station: impl std::fmt::Display,
    ) -> Self {
        Self::PathStationMismatch {
            path: path.into(),
            directory: directory.into(),
            station: station.to_string(),
        }
    }

    /// Create an unrepresentable timestamp error
    pub fn unrepresentable_timestamp(
        station: impl std::fmt::Display,
        local: impl std::fmt::Display,
    ) -> Self {
        Self::UnrepresentableTimestamp {
            station: station.to_string(),
            local: local.to_string(),
        }
    }

    /// Create a range precondition error
    pub fn range_precondition(start: impl std::fmt::Debug, end: impl std::fmt::Debug) -> Self {
        Self::RangePrecondition {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether this error came from report text rather than the environment
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::AnchorNotFound { .. }
                | Error::MalformedStructure { .. }
                | Error::UnknownStation { .. }
                | Error::InconsistentReportDay { .. }
                | Error::InvalidField { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::GlobPattern {
            pattern: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Failed to parse TOML: {}", error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}
