use crate::models::responses::DiscoveryResponse;
use axum::response::Json;
use std::collections::BTreeMap;

pub async fn discovery() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse {
        uri: "/".to_string(),
        subresource_uris: BTreeMap::from([
            ("showtimes".to_string(), "/showtimes".to_string()),
            ("showtime".to_string(), "/showtimes/<date>".to_string()),
        ]),
    })
}
