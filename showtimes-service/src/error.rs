use crate::models::responses::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No showtimes found for date {0}")]
    DateNotFound(String),

    #[error("The requested URL {0} was not found on the server")]
    RouteNotFound(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::DateNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            description: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
