//! Query execution against the SQLite observation dataset.
//!
//! Every operation runs exactly one statement over a connection borrowed from the caller.
//! Opening and closing that connection is the caller's responsibility, see [`database`].

pub mod database;
pub mod error;
pub mod metrics;
pub mod query;
