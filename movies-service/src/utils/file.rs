use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, warn};

pub const DATABASE_DIR: &str = "database";
pub const MOVIES_FILE: &str = "movies.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a JSON object keyed by string into a map.
///
/// A missing file, or one whose top level is not a JSON object, is logged and
/// yields an empty map. Entries that do not deserialize into `T` are skipped
/// with a warning; the rest are kept. Every other I/O failure is returned.
pub fn load_json_map<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<String, T>, LoadError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("Movies database file not found at {}", path.display());
            return Ok(BTreeMap::new());
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let document: Map<String, Value> = match serde_json::from_slice(&bytes) {
        Ok(document) => document,
        Err(e) => {
            error!(
                "Invalid JSON in movies database file {}: {}",
                path.display(),
                e
            );
            return Ok(BTreeMap::new());
        }
    };

    Ok(document
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(entry) => Some((key, entry)),
            Err(e) => {
                warn!("Skipping movie {} in {}: {}", key, path.display(), e);
                None
            }
        })
        .collect())
}

/// Locates the directory holding `database/`.
///
/// Walks up from `start` and returns the first ancestor that contains a
/// `database` directory, or `start` itself when none does.
pub fn discover_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(DATABASE_DIR).is_dir())
        .unwrap_or(start)
        .to_path_buf()
}

pub fn dataset_path(root: &Path) -> PathBuf {
    root.join(DATABASE_DIR).join(MOVIES_FILE)
}
