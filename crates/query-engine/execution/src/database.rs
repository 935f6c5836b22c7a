//! Scoped connections to the dataset.
//!
//! A connection is opened per request and closed before the response is returned, there
//! is no pool and no state shared between requests.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{info_span, Instrument};

use crate::error::Error;

/// Read-only connect options for a `sqlite:` url. A missing database file is an error, it
/// is never created.
pub fn connect_options(url: &str) -> Result<SqliteConnectOptions, Error> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(Error::Connect)?
        .read_only(true)
        .create_if_missing(false);
    Ok(options)
}

pub async fn connect(options: &SqliteConnectOptions) -> Result<SqliteConnection, Error> {
    options
        .connect()
        .instrument(info_span!("Open connection"))
        .await
        .map_err(Error::Connect)
}

/// Close a connection. Failing to close is logged, the response has already been computed.
pub async fn close(connection: SqliteConnection) {
    if let Err(err) = connection.close().await {
        tracing::warn!("error while closing connection: {}", err);
    }
}

/// Check that the data source answers.
pub async fn ping(connection: &mut SqliteConnection) -> Result<(), Error> {
    sqlx::query("SELECT 1")
        .execute(&mut *connection)
        .instrument(info_span!("Ping database"))
        .await?;
    Ok(())
}
