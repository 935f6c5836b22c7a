//! A read-only JSON API over daily precipitation and temperature observations.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
