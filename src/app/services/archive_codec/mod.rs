//! Archive path codec
//!
//! Archived artifacts are identified entirely by their path, so a file can be located
//! and filtered without reading its body. Both artifact kinds share one file name
//! template:
//!
//! ```text
//! <root>/<station>/<kind>.<station>.<first-label>-<first>.<second-label>-<second>.<ext>
//! ```
//!
//! - [`report_path`] - Climate reports, keyed by issuance instant and summary date
//! - [`series_path`] - One-minute observation series, keyed by start and end instants
//!
//! Encoding a partial key renders every unset component as `*`, giving a glob pattern
//! that matches exactly the artifacts sharing the set components. Timestamps are
//! written as naive station-local wall-clock times and re-localized through the
//! [`StationRegistry`] on decode. A key that sets a time without a station renders it
//! in the time's own zone.
//!
//! [`StationRegistry`]: crate::app::services::station_registry::StationRegistry

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use chrono_tz::Tz;

use crate::app::models::StationId;
use crate::app::services::station_registry::{StationRegistry, localize};
use crate::constants::{PATH_DATE_FORMAT, PATH_DATETIME_FORMAT, PATH_WILDCARD};
use crate::{Error, Result};

pub mod report_path;
pub mod series_path;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use report_path::ReportPathCodec;
pub use series_path::SeriesPathCodec;

/// File name template shared by every archived artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactTemplate {
    pub kind: &'static str,
    pub first_label: &'static str,
    pub second_label: &'static str,
    pub extension: &'static str,
}

/// Components recovered from an artifact file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactName<'a> {
    pub station: StationId,
    pub first: &'a str,
    pub second: &'a str,
}

impl ArtifactTemplate {
    /// Station directory and file name, with the wildcard for unset components
    pub fn relative_path(
        &self,
        station: Option<StationId>,
        first: Option<&str>,
        second: Option<&str>,
    ) -> PathBuf {
        let station = station.map_or(PATH_WILDCARD, |station| station.as_str());
        let file_name = format!(
            "{kind}.{station}.{first_label}-{first}.{second_label}-{second}.{ext}",
            kind = self.kind,
            first_label = self.first_label,
            first = first.unwrap_or(PATH_WILDCARD),
            second_label = self.second_label,
            second = second.unwrap_or(PATH_WILDCARD),
            ext = self.extension,
        );
        PathBuf::from(station).join(file_name)
    }

    /// Glob pattern under `root`
    ///
    /// The root is escaped so that glob metacharacters in directory names are
    /// matched literally.
    pub fn pattern(
        &self,
        root: &Path,
        station: Option<StationId>,
        first: Option<&str>,
        second: Option<&str>,
    ) -> PathBuf {
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        PathBuf::from(escaped_root).join(self.relative_path(station, first, second))
    }

    /// Split a concrete artifact path into its station and timestamp components
    ///
    /// # Errors
    /// * `Error::PathFormat` if the file name does not follow the template
    /// * `Error::PathStationMismatch` if the parent directory is not the station code
    pub fn split<'a>(&self, path: &'a Path) -> Result<ArtifactName<'a>> {
        let display = path.display().to_string();
        let invalid = |reason: String| Error::path_format(display.clone(), reason);

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid("missing or non UTF-8 file name".to_string()))?;

        let stem = file_name
            .strip_suffix(self.extension)
            .and_then(|stem| stem.strip_suffix('.'))
            .ok_or_else(|| invalid(format!("expected .{} extension", self.extension)))?;

        let parts: Vec<&str> = stem.split('.').collect();
        let &[kind, station_code, first, second] = parts.as_slice() else {
            return Err(invalid(format!(
                "expected 4 dot-separated components, found {}",
                parts.len()
            )));
        };

        if kind != self.kind {
            return Err(invalid(format!(
                "expected artifact kind '{}', found '{}'",
                self.kind, kind
            )));
        }

        let station: StationId = station_code
            .parse()
            .map_err(|_| invalid(format!("unknown station '{}'", station_code)))?;

        let first = strip_label(first, self.first_label)
            .ok_or_else(|| invalid(format!("expected '{}-' component", self.first_label)))?;
        let second = strip_label(second, self.second_label)
            .ok_or_else(|| invalid(format!("expected '{}-' component", self.second_label)))?;

        let directory = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        if directory != station.as_str() {
            return Err(Error::path_station_mismatch(display, directory, station));
        }

        Ok(ArtifactName {
            station,
            first,
            second,
        })
    }
}

fn strip_label<'a>(component: &'a str, label: &str) -> Option<&'a str> {
    component.strip_prefix(label)?.strip_prefix('-')
}

/// Render an instant as the station-local path timestamp
///
/// # Errors
/// * `Error::UnrepresentableTimestamp` if re-localizing the rendered wall-clock time
///   would not give back the same instant (repeated DST hour or sub-second precision)
pub fn encode_instant(
    registry: &StationRegistry,
    station: StationId,
    instant: &DateTime<Tz>,
) -> Result<String> {
    let timezone = registry.timezone(station)?;
    render_local(instant.with_timezone(&timezone), station)
}

/// Render an instant as a path timestamp in its own timezone
///
/// Used for keys that fix a time but leave the station open. The pattern only matches
/// artifacts whose station shares that timezone.
pub fn encode_unzoned_instant(instant: &DateTime<Tz>) -> Result<String> {
    render_local(*instant, instant.timezone().name())
}

fn render_local(local: DateTime<Tz>, owner: impl std::fmt::Display) -> Result<String> {
    let naive = local.naive_local();
    if naive.nanosecond() != 0 || localize(local.timezone(), naive).as_ref() != Some(&local) {
        return Err(Error::unrepresentable_timestamp(owner, local));
    }
    Ok(naive.format(PATH_DATETIME_FORMAT).to_string())
}

/// Parse a path timestamp and localize it to the station timezone
pub fn decode_instant(
    registry: &StationRegistry,
    station: StationId,
    path: &Path,
    component: &str,
) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(component, PATH_DATETIME_FORMAT).map_err(|_| {
        Error::path_format(
            path.display().to_string(),
            format!("invalid timestamp '{}'", component),
        )
    })?;
    registry.localize(station, naive)
}

/// Render a date as a path component
pub fn encode_date(date: &NaiveDate) -> String {
    date.format(PATH_DATE_FORMAT).to_string()
}

/// Parse a date path component
pub fn decode_date(path: &Path, component: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(component, PATH_DATE_FORMAT).map_err(|_| {
        Error::path_format(
            path.display().to_string(),
            format!("invalid date '{}'", component),
        )
    })
}
