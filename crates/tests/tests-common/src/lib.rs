//! Helpers shared by the integration tests.

pub mod dataset;
pub mod router;
