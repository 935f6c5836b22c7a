use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sqlx::sqlite::SqliteConnection;

use query_engine_execution::database;

use crate::{error::ServerError, state::ServerState};

/// A connection opened for the current request.
///
/// Handlers hand it back to `database::close` once their query has run. It is also closed
/// when dropped, so early returns do not leak it.
pub struct Connection(pub SqliteConnection);

#[async_trait]
impl FromRequestParts<ServerState> for Connection {
    type Rejection = ServerError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        match database::connect(&state.connect_options).await {
            Ok(connection) => Ok(Connection(connection)),
            Err(err) => {
                state.metrics.query_error_total.inc();
                Err(err.into())
            }
        }
    }
}
