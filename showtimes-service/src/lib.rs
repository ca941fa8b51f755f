use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod utils;

use models::showtimes::ShowtimeIndex;
use routes::{
    health::health_check,
    not_found,
    root::discovery,
    showtimes::{showtimes_by_date, showtimes_list},
};

pub type Index = Arc<ShowtimeIndex>;

/// Serve with `into_make_service_with_connect_info::<LocalPort>()`; the
/// showtimes handlers extract `ConnectInfo<LocalPort>`.
pub fn app(index: Index) -> Router {
    Router::new()
        .route("/", get(discovery))
        .route("/status", get(health_check))
        .route("/showtimes", get(showtimes_list))
        .route("/showtimes/:date", get(showtimes_by_date))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(index)
}
