//! Shared document model for the three dashboard datasets.
//!
//! This crate owns the shape of the JSON summaries that the collection
//! pipeline drops into the data directory, and is used by both `server`
//! (status probing) and `client` (rendering). Decoding is deliberately
//! lenient below the top level: absent or malformed fields degrade to
//! zero/`None` instead of failing the whole document.

mod enforcement;
mod ercot;
mod lenient;
mod permits;

pub use enforcement::{EnforcementItem, EnforcementSummary};
pub use ercot::{ErcotQueueSummary, FuelInfo};
pub use permits::PermitsSummary;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Error returned when a dataset document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file backing the dataset could not be read.
    #[error("failed to read {name}: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// The bytes are not JSON, or the top-level value is not an object.
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One of the three published dataset documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    ErcotQueue,
    Permits,
    Enforcement,
}

impl DatasetKind {
    /// All datasets in the order the dashboard requests them.
    pub const ALL: [Self; 3] = [Self::ErcotQueue, Self::Permits, Self::Enforcement];

    /// File name inside the data directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::ErcotQueue => "ercot_queue.json",
            Self::Permits => "rrc_permits.json",
            Self::Enforcement => "rrc_enforcement.json",
        }
    }

    /// Relative URL the client fetches the document from.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::ErcotQueue => "/data/ercot_queue.json",
            Self::Permits => "/data/rrc_permits.json",
            Self::Enforcement => "/data/rrc_enforcement.json",
        }
    }

    /// Short machine name used in status reports and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ErcotQueue => "ercot_queue",
            Self::Permits => "rrc_permits",
            Self::Enforcement => "rrc_enforcement",
        }
    }
}

/// Label-keyed values kept in document order.
///
/// Ties in a descending sort keep their input order, so the order entries
/// appeared in the JSON object matters.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown<V>(Vec<(String, V)>);

/// Label → count mapping (basins, counties, statuses).
pub type Tally = Breakdown<f64>;

/// Fuel label → capacity info mapping.
pub type FuelBreakdown = Breakdown<FuelInfo>;

impl<V> Breakdown<V> {
    #[must_use]
    pub fn new(entries: Vec<(String, V)>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(label, value)| (label.as_str(), value))
    }

    /// Look up the value for `label`.
    pub fn get(&self, label: &str) -> Option<&V> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, v)| v)
    }
}

impl<V> Default for Breakdown<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> FromIterator<(String, V)> for Breakdown<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: Serialize> Serialize for Breakdown<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// Fields common to every dataset, used for freshness probes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DatasetStamp {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub updated_at: Option<String>,
}

/// Decode a dataset document from raw bytes.
///
/// # Errors
///
/// Returns [`DatasetError::Decode`] when the bytes are not JSON or the
/// top-level value is not an object. Field-level problems never fail.
pub fn decode<T: DeserializeOwned>(kind: DatasetKind, bytes: &[u8]) -> Result<T, DatasetError> {
    let name = kind.file_name();
    let value: Value = serde_json::from_slice(bytes).map_err(|source| DatasetError::Decode { name, source })?;
    if !value.is_object() {
        return Err(DatasetError::Decode { name, source: serde_json::Error::custom("expected a JSON object") });
    }
    serde_json::from_value(value).map_err(|source| DatasetError::Decode { name, source })
}
