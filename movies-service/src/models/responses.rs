use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub entries: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub uri: String,
    pub subresource_uris: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub description: String,
}
