//! Metadata information regarding the database and tracked information.

pub mod database;
pub mod temperature_window;

// re-export without modules
pub use database::*;
pub use temperature_window::*;
