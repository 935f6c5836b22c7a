use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use query_engine_execution::error::Error;

#[derive(Debug)]
pub enum ServerError {
    Internal(String),
    DatabaseUnavailable(String),
    DatabaseError(String),
}

#[derive(Serialize)]
struct JsonErrorResponse {
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Internal(msg) | ServerError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServerError::DatabaseUnavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database unavailable: {msg}"),
            ),
        };

        tracing::error!("Returning error: {message} with status code: {status}");
        (status, Json(JsonErrorResponse { message })).into_response()
    }
}

impl From<Error> for ServerError {
    fn from(value: Error) -> Self {
        match value {
            Error::Connect(err) => ServerError::DatabaseUnavailable(err.to_string()),
            Error::Query(err) => ServerError::DatabaseError(err.to_string()),
        }
    }
}
