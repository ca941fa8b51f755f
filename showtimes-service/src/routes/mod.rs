pub mod health;
pub mod root;
pub mod showtimes;

use crate::error::AppError;
use axum::http::Uri;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
