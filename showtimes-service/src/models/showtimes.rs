use crate::utils::file::{load_json_map, LoadError};
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only snapshot of `database/showtimes.json`.
///
/// Date keys are opaque strings. Each date maps to the movie ids showing
/// that day, duplicates and file order kept as loaded.
#[derive(Debug, Default, Clone)]
pub struct ShowtimeIndex {
    dates: BTreeMap<String, Vec<String>>,
}

impl ShowtimeIndex {
    pub fn new(dates: BTreeMap<String, Vec<String>>) -> Self {
        Self { dates }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::new(load_json_map(path)?))
    }

    pub fn movies_on(&self, date: &str) -> Option<&[String]> {
        self.dates.get(date).map(Vec::as_slice)
    }

    pub fn dates(&self) -> &BTreeMap<String, Vec<String>> {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
