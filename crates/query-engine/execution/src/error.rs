use thiserror::Error;

/// Errors that can arise while talking to the data source.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to open the database: {0}")]
    Connect(sqlx::Error),
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}
