use crate::models::responses::HealthResponse;
use crate::Catalog;
use axum::{extract::State, response::Json};

pub async fn health_check(State(catalog): State<Catalog>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "movies-service".to_string(),
        status: "running".to_string(),
        entries: catalog.len(),
    })
}
