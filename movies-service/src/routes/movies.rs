use crate::error::AppError;
use crate::utils::connection::LocalPort;
use crate::Catalog;
use axum::{
    extract::{ConnectInfo, Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};
use tracing::warn;

pub async fn movie_info(
    Path(movie_id): Path<String>,
    State(catalog): State<Catalog>,
    ConnectInfo(port): ConnectInfo<LocalPort>,
) -> Result<Json<Map<String, Value>>, AppError> {
    match catalog.movie_document(&movie_id, port) {
        Some(document) => Ok(Json(document)),
        None => {
            warn!("Movie {} not found", movie_id);
            Err(AppError::MovieNotFound(movie_id))
        }
    }
}

pub async fn movie_record(
    State(catalog): State<Catalog>,
    ConnectInfo(port): ConnectInfo<LocalPort>,
) -> Response {
    Json(catalog.catalog_document(port)).into_response()
}
