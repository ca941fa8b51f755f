pub mod health;
pub mod movies;
pub mod root;

use crate::error::AppError;
use axum::http::Uri;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
