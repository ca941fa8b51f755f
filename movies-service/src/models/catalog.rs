use crate::utils::connection::LocalPort;
use crate::utils::file::{load_json_map, LoadError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Attributes of a single movie. The schema is whatever the dataset holds.
pub type MovieRecord = Map<String, Value>;

/// Read-only snapshot of `database/movies.json`, keyed by movie id.
#[derive(Debug, Default, Clone)]
pub struct MovieCatalog {
    movies: BTreeMap<String, MovieRecord>,
}

impl MovieCatalog {
    pub fn new(movies: BTreeMap<String, MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::new(load_json_map(path)?))
    }

    pub fn get(&self, movie_id: &str) -> Option<&MovieRecord> {
        self.movies.get(movie_id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Copy of one record with `uri` and `port` added.
    pub fn movie_document(&self, movie_id: &str, port: LocalPort) -> Option<Map<String, Value>> {
        let mut document = self.get(movie_id)?.clone();
        document.insert("uri".to_string(), Value::String(movie_uri(movie_id)));
        document.insert("port".to_string(), Value::String(port.to_string()));
        Some(document)
    }

    /// Every record keyed by id, plus `port`.
    pub fn catalog_document(&self, port: LocalPort) -> CatalogDocument<'_> {
        CatalogDocument {
            movies: &self.movies,
            port,
        }
    }
}

/// Borrowed view of the whole catalog, serialized as one flat object.
///
/// `port` is written last and replaces a movie that happens to use `port` as
/// its id, so the key appears once.
#[derive(Debug)]
pub struct CatalogDocument<'a> {
    movies: &'a BTreeMap<String, MovieRecord>,
    port: LocalPort,
}

impl Serialize for CatalogDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.movies.iter().filter(|(id, _)| id.as_str() != "port");
        let mut map = serializer.serialize_map(None)?;
        for (id, record) in entries {
            map.serialize_entry(id, record)?;
        }
        map.serialize_entry("port", &self.port.to_string())?;
        map.end()
    }
}

pub fn movie_uri(movie_id: &str) -> String {
    format!("/movies/{}", movie_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> MovieCatalog {
        let movies = serde_json::from_value(json!({
            "7daf7208-be4d-4944-a3ae-c1c2f516f3e6": {
                "title": "The Martian",
                "director": "Ridley Scott",
                "rating": 8.2
            }
        }))
        .unwrap();
        MovieCatalog::new(movies)
    }

    #[test]
    fn movie_document_adds_uri_and_port() {
        let catalog = catalog();
        let id = "7daf7208-be4d-4944-a3ae-c1c2f516f3e6";
        let document = catalog.movie_document(id, LocalPort(Some(5001))).unwrap();

        assert_eq!(document["uri"], format!("/movies/{}", id));
        assert_eq!(document["port"], "5001");
        assert_eq!(document["title"], "The Martian");
        assert!(!catalog.get(id).unwrap().contains_key("uri"));
    }

    #[test]
    fn ids_are_case_sensitive() {
        let catalog = catalog();
        assert!(catalog
            .movie_document("7DAF7208-BE4D-4944-A3AE-C1C2F516F3E6", LocalPort(Some(5001)))
            .is_none());
    }

    #[test]
    fn empty_catalog_document_only_has_port() {
        let catalog = MovieCatalog::default();
        let document = catalog.catalog_document(LocalPort(Some(5001)));
        assert_eq!(serde_json::to_value(document).unwrap(), json!({ "port": "5001" }));
    }

    #[test]
    fn catalog_document_writes_records_and_port() {
        let catalog = catalog();
        let document = serde_json::to_value(catalog.catalog_document(LocalPort(Some(5001)))).unwrap();
        assert_eq!(
            document["7daf7208-be4d-4944-a3ae-c1c2f516f3e6"]["director"],
            "Ridley Scott"
        );
        assert_eq!(document["port"], "5001");
        assert_eq!(document.as_object().unwrap().len(), 2);
    }

    #[test]
    fn movie_named_port_does_not_duplicate_the_key() {
        let movies = serde_json::from_value(json!({ "port": { "title": "Port" }, "x": {} })).unwrap();
        let catalog = MovieCatalog::new(movies);

        let text = serde_json::to_string(&catalog.catalog_document(LocalPort(Some(5001)))).unwrap();
        assert_eq!(text.matches("\"port\"").count(), 1);
        assert_eq!(text, r#"{"x":{},"port":"5001"}"#);
    }
}
