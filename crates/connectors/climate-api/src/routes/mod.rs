mod get_health;
mod get_home;
mod get_metrics;
mod get_precipitation;
mod get_stations;
mod get_temperature_summary;
mod get_tobs;

use crate::state::ServerState;
use axum::{routing::get, Router};

pub use get_health::get_health;
pub use get_home::{get_home, WELCOME};
pub use get_metrics::get_metrics;
pub use get_precipitation::get_precipitation;
pub use get_stations::get_stations;
pub use get_temperature_summary::{get_temperature_summary_from, get_temperature_summary_range};
pub use get_tobs::get_tobs;

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(get_home))
        .route("/health", get(get_health))
        .route("/metrics", get(get_metrics))
        .route("/api/v1.0/precipitation", get(get_precipitation))
        .route("/api/v1.0/stations", get(get_stations))
        .route("/api/v1.0/tobs", get(get_tobs))
        .route("/api/v1.0/:start", get(get_temperature_summary_from))
        .route("/api/v1.0/:start/:end", get(get_temperature_summary_range))
        .with_state(state)
}
