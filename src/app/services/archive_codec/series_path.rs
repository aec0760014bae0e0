//! Path codec for archived one-minute observation series
//!
//! `<root>/<station>/one_minute.<station>.start-<YYYY-MM-DDTHH-MM-SS>.end-<YYYY-MM-DDTHH-MM-SS>.csv`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::{ArtifactTemplate, decode_instant, encode_instant, encode_unzoned_instant};
use crate::app::models::{PartialSeriesKey, SeriesKey, StationId};
use crate::app::services::station_registry::StationRegistry;
use crate::constants::series_artifact;
use crate::{Error, Result};

/// File name template for archived one-minute series
pub const SERIES_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    kind: series_artifact::KIND,
    first_label: series_artifact::FIRST_LABEL,
    second_label: series_artifact::SECOND_LABEL,
    extension: series_artifact::EXTENSION,
};

/// Encoder/decoder between series keys and paths under one root
#[derive(Debug, Clone)]
pub struct SeriesPathCodec {
    root: PathBuf,
    station_registry: Arc<StationRegistry>,
}

impl SeriesPathCodec {
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
    pub fn encode(&self, key: &PartialSeriesKey) -> Result<PathBuf> {
        let start = self.instant_component(key.station, key.start.as_ref())?;
        let end = self.instant_component(key.station, key.end.as_ref())?;
        Ok(SERIES_TEMPLATE.pattern(&self.root, key.station, start.as_deref(), end.as_deref()))
    }

    /// Concrete path at which a series with this key is stored
    pub fn path_for(&self, key: &SeriesKey) -> Result<PathBuf> {
        let start = encode_instant(&self.station_registry, key.station, &key.start)?;
        let end = encode_instant(&self.station_registry, key.station, &key.end)?;
        Ok(self.root.join(SERIES_TEMPLATE.relative_path(
            Some(key.station),
            Some(start.as_str()),
            Some(end.as_str()),
        )))
    }

    /// Decode a concrete series path back into its key
    ///
    /// # Errors
    /// * `Error::PathFormat` if the path does not follow the series template or its
    ///   end precedes its start
    /// * `Error::PathStationMismatch` if the parent directory disagrees with the
    ///   station in the file name
    pub fn decode(&self, path: &Path) -> Result<SeriesKey> {
        let name = SERIES_TEMPLATE.split(path)?;
        let start = decode_instant(&self.station_registry, name.station, path, name.first)?;
        let end = decode_instant(&self.station_registry, name.station, path, name.second)?;

        if end < start {
            return Err(Error::path_format(
                path.display().to_string(),
                format!("series ends ({}) before it starts ({})", end, start),
            ));
        }

        debug!("Decoded {} -> {} [{}, {}]", path.display(), name.station, start, end);
        Ok(SeriesKey {
            station: name.station,
            start,
            end,
        })
    }

    fn instant_component(
        &self,
        station: Option<StationId>,
        instant: Option<&chrono::DateTime<chrono_tz::Tz>>,
    ) -> Result<Option<String>> {
        match (station, instant) {
            (Some(station), Some(instant)) => {
                encode_instant(&self.station_registry, station, instant).map(Some)
            }
            (None, Some(instant)) => encode_unzoned_instant(instant).map(Some),
            (_, None) => Ok(None),
        }
    }
}
