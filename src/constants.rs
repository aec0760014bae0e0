//! Application constants for the NWS climate report archive
//!
//! This module contains the report grammar markers, archive path templates,
//! and default values used throughout the library.

// =============================================================================
// Report Grammar
// =============================================================================

/// Missing-data sentinel used in report tables
pub const MISSING_SENTINEL: &str = "MM";

/// Marker that flags a re-issued (corrected) report anywhere in its text
pub const CORRECTION_MARKER: &str = "CORRECTED";

/// Marker word for the optional "valid as of" line
pub const VALID_MARKER: &str = "VALID";

/// Required prefix of the report title line
pub const CLIMATE_REPORT_HEADER: &str = "CLIMATE REPORT";

/// Required prefix of the issuing organization line
pub const ISSUING_ORGANIZATION_PREFIX: &str = "NATIONAL WEATHER SERVICE";

/// Day label for a report summarizing its issuance day
pub const TODAY_LABEL: &str = "TODAY";

/// Day label for a report summarizing the day before issuance
pub const YESTERDAY_LABEL: &str = "YESTERDAY";

/// Local hour at or after which a "valid as of" time marks an afternoon report
pub const AFTERNOON_CUTOFF_HOUR: u32 = 11;

// =============================================================================
// Archive Path Templates
// =============================================================================

/// Wildcard token substituted for unset key components
pub const PATH_WILDCARD: &str = "*";

/// Date-only component format used in archive file names
pub const PATH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date and time component format used in archive file names
pub const PATH_DATETIME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Artifact kind and labels for archived climate reports
pub mod report_artifact {
    pub const KIND: &str = "cli";
    pub const FIRST_LABEL: &str = "issued";
    pub const SECOND_LABEL: &str = "summary";
    pub const EXTENSION: &str = "txt";
}

/// Artifact kind and labels for archived one-minute observation series
pub mod series_artifact {
    pub const KIND: &str = "one_minute";
    pub const FIRST_LABEL: &str = "start";
    pub const SECOND_LABEL: &str = "end";
    pub const EXTENSION: &str = "csv";
}

// =============================================================================
// Defaults
// =============================================================================

/// Application directory name under the platform data/config directories
pub const APP_DIR_NAME: &str = "nws-climate";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Subdirectory of the data directory holding archived reports
pub const DEFAULT_CLI_DIR: &str = "cli";

/// Subdirectory of the data directory holding one-minute series files
pub const DEFAULT_ONE_MINUTE_DIR: &str = "one_minute";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Minimum number of files before multi-file commands show a progress bar
pub const PROGRESS_BAR_THRESHOLD: usize = 20;
