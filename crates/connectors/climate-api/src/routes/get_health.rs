use axum::http::StatusCode;

use query_engine_execution::database;

#[allow(unused_imports)] // Server state is used by a dev time macro
use crate::{error::ServerError, extract::Connection, state::ServerState};

#[axum::debug_handler(state = ServerState)]
pub async fn get_health(Connection(mut connection): Connection) -> Result<StatusCode, ServerError> {
    let result = database::ping(&mut connection).await;
    database::close(connection).await;
    result?;
    Ok(StatusCode::NO_CONTENT)
}
