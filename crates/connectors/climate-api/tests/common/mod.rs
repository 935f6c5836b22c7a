//! Common functions used across test cases.

use tests_common::dataset::Dataset;
use tests_common::router;

/// A router over the sample dataset. Keep the dataset alive for as long as the router is used.
pub async fn sample_router() -> (Dataset, axum::Router) {
    let dataset = Dataset::hawaii_sample().await;
    let router = router::create_router(&dataset);
    (dataset, router)
}

/// A router whose database file does not exist.
pub fn unavailable_router() -> (Dataset, axum::Router) {
    let dataset = Dataset::missing();
    let router = router::create_router(&dataset);
    (dataset, router)
}
