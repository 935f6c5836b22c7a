//! Min, average and max temperature from a start date, optionally up to an end date.
//!
//! The response is always a one element list, with null fields when nothing matched.
//!
//! Path segments are taken raw and percent-decoded lossily: bytes that are not UTF-8 end
//! up as replacement characters in the filter instead of rejecting the request.

use axum::{
    extract::{RawPathParams, State},
    Json,
};
use percent_encoding::percent_decode_str;
use sqlx::sqlite::SqliteConnection;

use query_engine_execution::{
    database,
    query::{self, DateRange, TemperatureSummary},
};

use crate::{error::ServerError, extract::Connection, state::ServerState};

#[axum::debug_handler(state = ServerState)]
pub async fn get_temperature_summary_from(
    State(state): State<ServerState>,
    params: RawPathParams,
    Connection(connection): Connection,
) -> Result<Json<Vec<TemperatureSummary>>, ServerError> {
    let start = decoded_param(&params, "start");
    summarize(&state, connection, DateRange::starting(&start)).await
}

#[axum::debug_handler(state = ServerState)]
pub async fn get_temperature_summary_range(
    State(state): State<ServerState>,
    params: RawPathParams,
    Connection(connection): Connection,
) -> Result<Json<Vec<TemperatureSummary>>, ServerError> {
    let start = decoded_param(&params, "start");
    let end = decoded_param(&params, "end");
    summarize(&state, connection, DateRange::between(&start, &end)).await
}

fn decoded_param(params: &RawPathParams, name: &str) -> String {
    params
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .unwrap_or_default()
}

async fn summarize(
    state: &ServerState,
    mut connection: SqliteConnection,
    range: DateRange<'_>,
) -> Result<Json<Vec<TemperatureSummary>>, ServerError> {
    let result = query::summarize_temperatures(&mut connection, range).await;
    database::close(connection).await;
    state.metrics.record(&result);

    Ok(Json(vec![result?]))
}
