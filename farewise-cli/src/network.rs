//! JSON file backed [`NetworkStore`].
//!
//! The file holds a single object with `locations` and `relations` arrays:
//!
//! ```json
//! {
//!   "locations": [{ "id": 101, "name": "Lisbon" }],
//!   "relations": [{ "id": 1, "source_id": 101, "destination_id": 102,
//!                   "carrier_id": 7, "distance_km": 313, "price": 42.5 }]
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use farewise_core::{NetworkSnapshot, NetworkStore, NetworkValidationError};
use thiserror::Error;

use crate::CliError;

/// Errors raised while loading a network file.
#[derive(Debug, Error)]
pub enum JsonNetworkStoreError {
    /// The file could not be read.
    #[error("failed to read network file {path:?}: {source}")]
    Read {
        /// Network file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid network document.
    #[error("failed to parse network file {path:?}: {source}")]
    Parse {
        /// Network file path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The network violates an entity constraint.
    #[error("network file {path:?} is invalid: {source}")]
    Invalid {
        /// Network file path.
        path: Utf8PathBuf,
        /// First violation found.
        #[source]
        source: NetworkValidationError,
    },
}

/// Loads and validates a network from a JSON file on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileNetworkStore {
    path: Utf8PathBuf,
}

impl JsonFileNetworkStore {
    /// Create a store reading from `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File the store reads from.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl NetworkStore for JsonFileNetworkStore {
    type Error = JsonNetworkStoreError;

    fn load_network(&self) -> Result<NetworkSnapshot, Self::Error> {
        let contents =
            farewise_fs::read_to_string(&self.path).map_err(|source| JsonNetworkStoreError::Read {
                path: self.path.clone(),
                source,
            })?;
        let snapshot: NetworkSnapshot =
            serde_json::from_str(&contents).map_err(|source| JsonNetworkStoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        snapshot
            .validate()
            .map_err(|source| JsonNetworkStoreError::Invalid {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "loaded {} locations and {} relations from {}",
            snapshot.locations.len(),
            snapshot.relations.len(),
            self.path
        );
        Ok(snapshot)
    }
}

/// Check that the path supplied for `field` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match farewise_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
