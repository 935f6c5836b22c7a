use axum::{extract::State, Json};

use query_engine_execution::{database, query};

use crate::{error::ServerError, extract::Connection, state::ServerState};

#[axum::debug_handler(state = ServerState)]
pub async fn get_stations(
    State(state): State<ServerState>,
    Connection(mut connection): Connection,
) -> Result<Json<Vec<String>>, ServerError> {
    let result = query::list_station_names(&mut connection).await;
    database::close(connection).await;
    state.metrics.record(&result);

    Ok(Json(result?))
}
