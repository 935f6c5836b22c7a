use std::fmt;

use crate::error::ConfigurationError;

/// The only scheme the service knows how to open.
pub const SQLITE_SCHEME: &str = "sqlite:";

/// Location of the observation dataset, e.g. `sqlite://Resources/hawaii.sqlite`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionUri(String);

impl ConnectionUri {
    pub fn parse(uri: &str) -> Result<Self, ConfigurationError> {
        let uri = uri.trim();
        if uri.starts_with(SQLITE_SCHEME) {
            Ok(Self(uri.to_string()))
        } else {
            Err(ConfigurationError::UnsupportedScheme(uri.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
