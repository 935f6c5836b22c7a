use axum::{extract::State, http::header, response::IntoResponse};
use prometheus::{Encoder, TextEncoder};

use crate::{error::ServerError, state::ServerState};

#[axum::debug_handler(state = ServerState)]
pub async fn get_metrics(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    let encoder = TextEncoder::new();
    let mut buffer = vec![];
    encoder
        .encode(&state.metrics_registry.gather(), &mut buffer)
        .map_err(|err| ServerError::Internal(err.to_string()))?;
    let body = String::from_utf8(buffer).map_err(|err| ServerError::Internal(err.to_string()))?;

    Ok(([(header::CONTENT_TYPE, encoder.format_type().to_string())], body))
}
