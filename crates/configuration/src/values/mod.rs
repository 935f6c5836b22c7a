pub mod uri;

pub use uri::ConnectionUri;
