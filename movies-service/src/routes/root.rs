use crate::models::responses::DiscoveryResponse;
use axum::response::Json;
use std::collections::BTreeMap;

pub async fn discovery() -> Json<DiscoveryResponse> {
    let subresource_uris = BTreeMap::from([
        ("movies".to_string(), "/movies".to_string()),
        ("movie".to_string(), "/movies/<id>".to_string()),
    ]);

    Json(DiscoveryResponse {
        uri: "/".to_string(),
        subresource_uris,
    })
}
