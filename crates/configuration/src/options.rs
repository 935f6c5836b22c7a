//! Command line and environment options for the server.

use clap::Parser;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone, Parser)]
#[command(name = "climate-api", about = "Read-only JSON API over daily weather observations")]
pub struct ServerOptions {
    /// Url of the SQLite database holding the `measurement` and `station` tables.
    #[arg(long, value_name = "DATABASE_URL", env = "CLIMATE_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    #[arg(long, env = "CLIMATE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
