//! The two relations of the observation dataset.
//!
//! The tables are fixed and known ahead of time, so their names and columns are declared
//! here rather than discovered from the database at startup.

/// Daily readings, one row per station and day.
pub mod measurement {
    pub const TABLE: &str = "measurement";
    pub const STATION: &str = "station";
    pub const DATE: &str = "date";
    pub const PRECIPITATION: &str = "prcp";
    pub const TEMPERATURE: &str = "tobs";
}

/// Monitoring locations.
pub mod station {
    pub const TABLE: &str = "station";
    pub const NAME: &str = "name";
}

/// One weather reading.
///
/// `date` is an ISO 8601 calendar date (`YYYY-MM-DD`) stored as text, so lexicographic
/// comparison on it is chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station_id: String,
    pub date: String,
    pub precipitation: Option<f64>,
    pub temperature: Option<f64>,
}

/// A physical monitoring location. `station_id` is unique across the relation.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}
