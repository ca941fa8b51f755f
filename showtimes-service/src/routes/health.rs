use crate::models::responses::HealthResponse;
use crate::Index;
use axum::{extract::State, response::Json};

pub async fn health_check(State(index): State<Index>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "showtimes-service".to_string(),
        status: "running".to_string(),
        entries: index.len(),
    })
}
