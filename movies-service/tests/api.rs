use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Request, StatusCode};
use axum::Router;
use movies_service::models::catalog::MovieCatalog;
use movies_service::utils::connection::LocalPort;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const PORT: u16 = 5001;

fn sample_movies() -> Value {
    json!({
        "267eedb8-0f5d-42d5-8f43-72426b9fb3e6": {
            "title": "Creed",
            "director": "Ryan Coogler",
            "rating": 8.8,
            "id": "267eedb8-0f5d-42d5-8f43-72426b9fb3e6"
        },
        "39ab85e5-5e8e-4dc5-afea-65dc368bd7ab": {
            "title": "The Good Dinosaur",
            "director": "Peter Sohn",
            "rating": 7.4,
            "id": "39ab85e5-5e8e-4dc5-afea-65dc368bd7ab"
        }
    })
}

fn build_test_app(catalog: MovieCatalog) -> Router {
    movies_service::app(Arc::new(catalog)).layer(MockConnectInfo(LocalPort(Some(PORT))))
}

fn sample_app() -> Router {
    build_test_app(MovieCatalog::new(
        serde_json::from_value(sample_movies()).unwrap(),
    ))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_lists_subresources() {
    let (status, body) = get(sample_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "uri": "/",
            "subresource_uris": { "movies": "/movies", "movie": "/movies/<id>" }
        })
    );
}

#[tokio::test]
async fn test_every_known_movie_is_served() {
    let movies = sample_movies();
    for (id, record) in movies.as_object().unwrap() {
        let (status, body) = get(sample_app(), &format!("/movies/{}", id)).await;
        assert_eq!(status, StatusCode::OK);

        let mut body = body.as_object().unwrap().clone();
        assert_eq!(body.remove("uri").unwrap(), format!("/movies/{}", id));
        assert_eq!(body.remove("port").unwrap(), PORT.to_string());
        assert_eq!(Value::Object(body), *record);
    }
}

#[tokio::test]
async fn test_unknown_movie_is_404() {
    let (status, body) = get(sample_app(), "/movies/not-a-movie").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["description"], "Movie not-a-movie not found");
}

#[tokio::test]
async fn test_collection_minus_port_equals_catalog() {
    let (status, body) = get(sample_app(), "/movies").await;
    assert_eq!(status, StatusCode::OK);

    let mut body = body.as_object().unwrap().clone();
    assert_eq!(body.remove("port").unwrap(), "5001");
    assert_eq!(Value::Object(body), sample_movies());
}

#[tokio::test]
async fn test_requests_do_not_mutate_catalog() {
    let app = sample_app();
    let id = "267eedb8-0f5d-42d5-8f43-72426b9fb3e6";
    get(app.clone(), &format!("/movies/{}", id)).await;

    let (_, body) = get(app, "/movies").await;
    assert!(body[id].get("uri").is_none());
    assert!(body[id].get("port").is_none());
}

#[tokio::test]
async fn test_missing_dataset_serves_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = MovieCatalog::load(&dir.path().join("movies.json")).unwrap();
    assert!(catalog.is_empty());

    let app = build_test_app(catalog);
    let (status, body) = get(app.clone(), "/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "port": "5001" }));

    let (status, _) = get(app, "/movies/267eedb8-0f5d-42d5-8f43-72426b9fb3e6").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_dataset_behaves_like_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.json");
    std::fs::write(&path, "not json at all").unwrap();

    let app = build_test_app(MovieCatalog::load(&path).unwrap());
    let (status, body) = get(app.clone(), "/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "port": "5001" }));

    let (status, _) = get(app, "/movies/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_reports_entry_count() {
    let (status, body) = get(sample_app(), "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "movies-service");
    assert_eq!(body["entries"], 2);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get(sample_app(), "/showtimes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_bad_record_does_not_hide_good_ones() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.json");
    std::fs::write(&path, r#"{"a": {"title": "Creed"}, "b": 5}"#).unwrap();

    let app = build_test_app(MovieCatalog::load(&path).unwrap());
    let (status, body) = get(app.clone(), "/movies/a").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Creed");

    let (status, _) = get(app, "/movies/b").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
