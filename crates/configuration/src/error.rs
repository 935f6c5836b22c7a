//! Errors that can occur while building the runtime configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unsupported database url '{0}', expected a sqlite: url")]
    UnsupportedScheme(String),
    #[error("invalid listen address '{0}'")]
    InvalidListenAddress(String),
}
