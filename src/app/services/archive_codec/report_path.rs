//! Path codec for archived climate reports
//!
//! `<root>/<station>/cli.<station>.issued-<YYYY-MM-DDTHH-MM-SS>.summary-<YYYY-MM-DD>.txt`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::{
    ArtifactTemplate, decode_date, decode_instant, encode_date, encode_instant,
    encode_unzoned_instant,
};
use crate::Result;
use crate::app::models::{ArchiveKey, PartialArchiveKey};
use crate::app::services::station_registry::StationRegistry;
use crate::constants::report_artifact;

/// File name template for archived climate reports
pub const REPORT_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    kind: report_artifact::KIND,
    first_label: report_artifact::FIRST_LABEL,
    second_label: report_artifact::SECOND_LABEL,
    extension: report_artifact::EXTENSION,
};

/// Encoder/decoder between report archive keys and paths under one root
#[derive(Debug, Clone)]
pub struct ReportPathCodec {
    root: PathBuf,
    station_registry: Arc<StationRegistry>,
}

impl ReportPathCodec {
    pub fn new(root: impl Into<PathBuf>, station_registry: Arc<StationRegistry>) -> Self {
        Self {
            root: root.into(),
            station_registry,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Encode a partial key into a glob pattern, with `*` for every unset component
    ///
    /// # Errors
    /// * `Error::UnrepresentableTimestamp` if the issuance instant cannot round-trip
    ///   through the station-local path timestamp
    /// * `Error::StationNotConfigured` if an issuance time is given for a station the
    ///   registry does not know
    pub fn encode(&self, key: &PartialArchiveKey) -> Result<PathBuf> {
        let (issued, summary) = self.components(key)?;
        Ok(REPORT_TEMPLATE.pattern(
            &self.root,
            key.station,
            issued.as_deref(),
            summary.as_deref(),
        ))
    }

    /// Concrete path at which a report with this key is stored
    pub fn path_for(&self, key: &ArchiveKey) -> Result<PathBuf> {
        let partial = PartialArchiveKey::from(*key);
        let (issued, summary) = self.components(&partial)?;
        Ok(self.root.join(REPORT_TEMPLATE.relative_path(
            partial.station,
            issued.as_deref(),
            summary.as_deref(),
        )))
    }

    /// Decode a concrete report path back into its archive key
    ///
    /// # Errors
    /// * `Error::PathFormat` if the path does not follow the report template
    /// * `Error::PathStationMismatch` if the parent directory disagrees with the
    ///   station in the file name
    pub fn decode(&self, path: &Path) -> Result<ArchiveKey> {
        let name = REPORT_TEMPLATE.split(path)?;
        let issuance_time = decode_instant(&self.station_registry, name.station, path, name.first)?;
        let summary_date = decode_date(path, name.second)?;

        debug!("Decoded {} -> {} {}", path.display(), name.station, issuance_time);
        Ok(ArchiveKey {
            station: name.station,
            issuance_time,
            summary_date,
        })
    }

    /// Rendered issuance and summary components
    fn components(&self, key: &PartialArchiveKey) -> Result<(Option<String>, Option<String>)> {
        let issued = match (key.station, key.issuance_time.as_ref()) {
            (Some(station), Some(instant)) => {
                Some(encode_instant(&self.station_registry, station, instant)?)
            }
            (None, Some(instant)) => Some(encode_unzoned_instant(instant)?),
            (_, None) => None,
        };
        let summary = key.summary_date.as_ref().map(encode_date);
        Ok((issued, summary))
    }
}
