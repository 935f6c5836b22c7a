pub mod configuration;
pub mod error;
pub mod options;
pub mod values;

pub use configuration::Configuration;
pub use error::ConfigurationError;
pub use options::ServerOptions;
pub use values::ConnectionUri;
