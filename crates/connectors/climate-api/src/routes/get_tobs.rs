use axum::{extract::State, Json};

use query_engine_execution::{database, query};
use query_engine_metadata::metadata::TemperatureWindow;

use crate::{error::ServerError, extract::Connection, state::ServerState};

/// Temperatures of the most active station over the last year of data, oldest first.
///
/// Dates are not part of the response.
#[axum::debug_handler(state = ServerState)]
pub async fn get_tobs(
    State(state): State<ServerState>,
    Connection(mut connection): Connection,
) -> Result<Json<Vec<Option<f64>>>, ServerError> {
    let window = TemperatureWindow::most_active_trailing_year();
    let result = query::list_temperatures(&mut connection, &window).await;
    database::close(connection).await;
    state.metrics.record(&result);

    Ok(Json(result?))
}
