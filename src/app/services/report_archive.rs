//! Filename-indexed on-disk archives for climate reports and one-minute series
//!
//! Candidate files are located by globbing the encoded path pattern and filtered on
//! their decoded keys, so only files that survive the range filter are ever opened.
//! Loading collects per-file failures instead of aborting the batch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use tracing::{debug, info, warn};

use crate::app::models::{
    ArchiveKey, ClimateReport, PartialArchiveKey, PartialSeriesKey, SeriesKey, StationId,
};
use crate::app::services::archive_codec::{ReportPathCodec, SeriesPathCodec};
use crate::app::services::range_query::{DateRange, ranges_intersect};
use crate::app::services::report_parser::ReportParser;
use crate::app::services::station_registry::StationRegistry;
use crate::{Error, Result};

/// An archived report located by its path
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedReport {
    pub path: PathBuf,
    pub key: ArchiveKey,
}

/// An archived one-minute series file located by its path
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedSeries {
    pub path: PathBuf,
    pub key: SeriesKey,
}

/// A file that could not be decoded or parsed
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Result of loading a batch of archived reports
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Successfully parsed reports, ordered by summary date then issuance time
    pub reports: Vec<ClimateReport>,
    /// Files that failed, with the reason
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Archive of climate report text files under one root
#[derive(Debug, Clone)]
pub struct ReportArchive {
    codec: ReportPathCodec,
    parser: ReportParser,
}

impl ReportArchive {
    /// Create an archive rooted at `root`, sharing one station registry between
    /// the path codec and the parser
    pub fn new(root: impl Into<PathBuf>, station_registry: Arc<StationRegistry>) -> Self {
        Self {
            codec: ReportPathCodec::new(root, Arc::clone(&station_registry)),
            parser: ReportParser::new(station_registry),
        }
    }

    pub fn root(&self) -> &Path {
        self.codec.root()
    }

    pub fn codec(&self) -> &ReportPathCodec {
        &self.codec
    }

    pub fn parser(&self) -> &ReportParser {
        &self.parser
    }

    /// Write a report's raw text to its canonical path
    ///
    /// Creates the station directory if needed and replaces any existing file with the
    /// same key.
    pub fn store(&self, report: &ClimateReport) -> Result<PathBuf> {
        if report.raw_text.is_empty() {
            return Err(Error::invalid_field("raw_text", ""));
        }

        let path = self.codec.path_for(&report.archive_key())?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!("Failed to create directory {}", parent.display()), e)
            })?;
        }
        std::fs::write(&path, &report.raw_text)
            .map_err(|e| Error::io(format!("Failed to write report {}", path.display()), e))?;

        debug!(
            "Stored {} report for {} at {}",
            report.station,
            report.summary_date,
            path.display()
        );
        Ok(path)
    }

    /// Archived reports whose summary date lies in `range`
    ///
    /// Files under the root that do not decode are logged and skipped.
    pub fn find(
        &self,
        station: Option<StationId>,
        range: &DateRange<NaiveDate>,
    ) -> Result<Vec<ArchivedReport>> {
        let mut found = Vec::new();
        for (path, decoded) in self.scan(station)? {
            match decoded {
                Ok(key) if range.contains(&key.summary_date) => {
                    found.push(ArchivedReport { path, key })
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        sort_reports(&mut found);
        debug!("Found {} archived reports in range", found.len());
        Ok(found)
    }

    /// Read and parse every archived report for `station` in `range`
    ///
    /// # Errors
    /// * `Error::FileNotFound` if the station directory does not exist
    ///
    /// Undecodable paths and unparseable files are returned as failures in the outcome.
    pub fn load(&self, station: StationId, range: &DateRange<NaiveDate>) -> Result<LoadOutcome> {
        let station_dir = self.root().join(station.as_str());
        if !station_dir.is_dir() {
            return Err(Error::file_not_found(station_dir.display().to_string()));
        }

        let mut outcome = LoadOutcome::default();
        let mut selected = Vec::new();
        for (path, decoded) in self.scan(Some(station))? {
            match decoded {
                Ok(key) if range.contains(&key.summary_date) => {
                    selected.push(ArchivedReport { path, key })
                }
                Ok(_) => {}
                Err(error) => {
                    warn!("Failed to decode {}: {}", path.display(), error);
                    outcome.failures.push(LoadFailure { path, error });
                }
            }
        }
        sort_reports(&mut selected);

        for archived in selected {
            match self.parser.parse_file(&archived.path) {
                Ok(report) => outcome.reports.push(report),
                Err(error) => {
                    warn!("Failed to parse {}: {}", archived.path.display(), error);
                    outcome.failures.push(LoadFailure {
                        path: archived.path,
                        error,
                    });
                }
            }
        }

        info!(
            "Loaded {} {} reports ({} failed)",
            outcome.reports.len(),
            station,
            outcome.failures.len()
        );
        Ok(outcome)
    }

    /// Glob the station pattern and decode every match
    fn scan(&self, station: Option<StationId>) -> Result<Vec<(PathBuf, Result<ArchiveKey>)>> {
        let key = match station {
            Some(station) => PartialArchiveKey::for_station(station),
            None => PartialArchiveKey::any(),
        };
        let pattern = self.codec.encode(&key)?;
        let paths = glob_paths(&pattern)?;

        Ok(paths
            .into_iter()
            .map(|path| {
                let decoded = self.codec.decode(&path);
                (path, decoded)
            })
            .collect())
    }
}

fn sort_reports(reports: &mut [ArchivedReport]) {
    reports.sort_by(|a, b| {
        (a.key.summary_date, a.key.issuance_time, a.key.station)
            .cmp(&(b.key.summary_date, b.key.issuance_time, b.key.station))
    });
}

/// Archive of one-minute observation series files under one root
#[derive(Debug, Clone)]
pub struct SeriesArchive {
    codec: SeriesPathCodec,
}

impl SeriesArchive {
    pub fn new(root: impl Into<PathBuf>, station_registry: Arc<StationRegistry>) -> Self {
        Self {
            codec: SeriesPathCodec::new(root, station_registry),
        }
    }

    pub fn root(&self) -> &Path {
        self.codec.root()
    }

    pub fn codec(&self) -> &SeriesPathCodec {
        &self.codec
    }

    /// Series files for `station` whose span intersects `range`
    pub fn find(
        &self,
        station: StationId,
        range: &DateRange<DateTime<Tz>>,
    ) -> Result<Vec<ArchivedSeries>> {
        let pattern = self.codec.encode(&PartialSeriesKey::for_station(station))?;

        let mut found = Vec::new();
        for path in glob_paths(&pattern)? {
            let key = match self.codec.decode(&path) {
                Ok(key) => key,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            if ranges_intersect(Some(&key.start), Some(&key.end), range.start(), range.end())? {
                found.push(ArchivedSeries { path, key });
            }
        }

        found.sort_by(|a, b| a.key.start.cmp(&b.key.start));
        debug!("Found {} {} series files in range", found.len(), station);
        Ok(found)
    }
}

/// Expand a glob pattern into the matching paths
fn glob_paths(pattern: &Path) -> Result<Vec<PathBuf>> {
    let pattern = pattern.to_str().ok_or_else(|| {
        Error::path_format(pattern.display().to_string(), "pattern is not valid UTF-8")
    })?;

    let entries = glob::glob(pattern).map_err(|source| Error::GlobPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!("Unreadable archive entry {}: {}", e.path().display(), e),
        }
    }
    debug!("Pattern {} matched {} files", pattern, paths.len());
    Ok(paths)
}
