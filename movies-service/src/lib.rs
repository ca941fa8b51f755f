use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod utils;

use models::catalog::MovieCatalog;
use routes::{
    health::health_check,
    movies::{movie_info, movie_record},
    not_found,
    root::discovery,
};

pub type Catalog = Arc<MovieCatalog>;

/// Routes of the movies service over an already loaded catalog.
///
/// Handlers read the connection port through `ConnectInfo<LocalPort>`, so the
/// router must be served with `into_make_service_with_connect_info::<LocalPort>()`.
pub fn app(catalog: Catalog) -> Router {
    Router::new()
        .route("/", get(discovery))
        .route("/status", get(health_check))
        .route("/movies", get(movie_record))
        .route("/movies/:movie_id", get(movie_info))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
