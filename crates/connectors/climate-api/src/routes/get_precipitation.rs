use axum::{extract::State, Json};

use query_engine_execution::{
    database,
    query::{self, PrecipitationReading},
};

use crate::{error::ServerError, extract::Connection, state::ServerState};

#[axum::debug_handler(state = ServerState)]
pub async fn get_precipitation(
    State(state): State<ServerState>,
    Connection(mut connection): Connection,
) -> Result<Json<Vec<PrecipitationReading>>, ServerError> {
    let result = query::list_precipitation(&mut connection).await;
    database::close(connection).await;
    state.metrics.record(&result);

    Ok(Json(result?))
}
