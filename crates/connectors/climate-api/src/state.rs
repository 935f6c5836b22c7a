//! State shared by the request handlers.
//!
//! Only immutable setup lives here: how to open a connection, and the metrics. Nothing
//! read from the database is kept between requests.

use sqlx::sqlite::SqliteConnectOptions;
use thiserror::Error;

use climate_api_configuration::Configuration;
use query_engine_execution::{database, error, metrics::Metrics};

#[derive(Clone)]
pub struct ServerState {
    pub connect_options: SqliteConnectOptions,
    pub metrics_registry: prometheus::Registry,
    pub metrics: Metrics,
}

pub fn create_state(configuration: &Configuration) -> Result<ServerState, InitializationError> {
    let connect_options = database::connect_options(configuration.connection_uri.as_str())
        .map_err(InitializationError::InvalidDatabaseUrl)?;

    let metrics_registry = prometheus::Registry::new();
    let metrics =
        Metrics::initialize(&metrics_registry).map_err(InitializationError::MetricsError)?;

    Ok(ServerState {
        connect_options,
        metrics_registry,
        metrics,
    })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("invalid database url: {0}")]
    InvalidDatabaseUrl(error::Error),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
