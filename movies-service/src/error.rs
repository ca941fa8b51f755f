use crate::models::responses::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Movie {0} not found")]
    MovieNotFound(String),

    #[error("The requested URL {0} was not found on the server")]
    RouteNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MovieNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            description: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
