use crate::error::AppError;
use crate::models::responses::ShowtimesResponse;
use crate::utils::connection::LocalPort;
use crate::Index;
use axum::{
    extract::{ConnectInfo, Path, State},
    response::Json,
};
use std::collections::BTreeMap;
use tracing::warn;

pub async fn showtimes_by_date(
    Path(date): Path<String>,
    State(index): State<Index>,
    ConnectInfo(port): ConnectInfo<LocalPort>,
) -> Result<Json<ShowtimesResponse<Vec<String>>>, AppError> {
    let Some(movie_ids) = index.movies_on(&date) else {
        warn!("No showtimes found for date {}", date);
        return Err(AppError::DateNotFound(date));
    };

    Ok(Json(ShowtimesResponse {
        port: port.to_string(),
        showtimes: movie_ids.to_vec(),
    }))
}

pub async fn showtimes_list(
    State(index): State<Index>,
    ConnectInfo(port): ConnectInfo<LocalPort>,
) -> Json<ShowtimesResponse<BTreeMap<String, Vec<String>>>> {
    Json(ShowtimesResponse {
        port: port.to_string(),
        showtimes: index.dates().clone(),
    })
}
