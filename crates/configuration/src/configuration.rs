//! Configuration for the service.

use std::net::SocketAddr;

use crate::error::ConfigurationError;
use crate::options::ServerOptions;
use crate::values::ConnectionUri;

/// The 'Configuration' type collects all the information necessary to serve requests at runtime.
///
/// Values of this type are produced from the command line and environment by
/// 'Configuration::from_options', so anything wrong with the options is reported before
/// the server binds its socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub connection_uri: ConnectionUri,
    pub listen_address: SocketAddr,
}

impl Configuration {
    pub fn from_options(options: &ServerOptions) -> Result<Self, ConfigurationError> {
        let connection_uri = ConnectionUri::parse(&options.database_url)?;

        let address = format!("{}:{}", options.host, options.port);
        let listen_address = address
            .parse()
            .map_err(|_| ConfigurationError::InvalidListenAddress(address))?;

        tracing::debug!(%connection_uri, %listen_address, "configuration loaded");

        Ok(Configuration {
            connection_uri,
            listen_address,
        })
    }
}
