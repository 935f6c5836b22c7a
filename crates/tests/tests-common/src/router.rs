//! Build a router over a dataset and issue requests against it.

use axum::http::StatusCode;
use axum_test_helper::TestClient;

use climate_api::{routes, state};
use climate_api_configuration::{Configuration, ServerOptions};

use crate::dataset::Dataset;

/// Creates a router with a fresh state reading the given dataset.
pub fn create_router(dataset: &Dataset) -> axum::Router {
    create_router_for_url(&dataset.url())
}

/// Creates a router with a fresh state reading whatever lives at `database_url`.
pub fn create_router_for_url(database_url: &str) -> axum::Router {
    let _ = env_logger::builder().is_test(true).try_init();

    let options = ServerOptions {
        database_url: database_url.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let configuration = Configuration::from_options(&options).unwrap();
    let state = state::create_state(&configuration).unwrap();

    routes::create_router(state)
}

/// GET `path` and return the status and raw body.
pub async fn get_text(router: axum::Router, path: &str) -> (StatusCode, String) {
    let client = TestClient::new(router);
    let res = client.get(path).send().await;
    let status = res.status();
    (status, res.text().await)
}

/// GET `path` and parse the body as JSON.
pub async fn get_json(router: axum::Router, path: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_text(router, path).await;
    let value = serde_json::from_str(&body)
        .unwrap_or_else(|err| panic!("response to {path} is not JSON ({err}): {body}"));
    (status, value)
}
