//! The fixed window served by the recent temperatures endpoint.
//!
//! Both the station and the last day are literals taken from the dataset as it was when
//! the service was written. They go stale as soon as newer rows are appended.

use chrono::{Duration, NaiveDate};

/// The station with the most recordings in the dataset.
pub const MOST_ACTIVE_STATION: &str = "USC00519397";

/// Last day covered by the dataset.
pub const LAST_OBSERVATION_DAY: (i32, u32, u32) = (2017, 8, 23);

/// Length of the window, in days, counted back from the last day.
pub const WINDOW_DAYS: i64 = 365;

/// An inclusive range of days for a single station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureWindow {
    pub station: &'static str,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TemperatureWindow {
    /// The trailing year of the most active station.
    pub fn most_active_trailing_year() -> Self {
        let (year, month, day) = LAST_OBSERVATION_DAY;
        let end = NaiveDate::from_ymd_opt(year, month, day)
            .expect("LAST_OBSERVATION_DAY is a valid calendar date");
        Self::ending_on(MOST_ACTIVE_STATION, end)
    }

    pub fn ending_on(station: &'static str, end: NaiveDate) -> Self {
        TemperatureWindow {
            station,
            start: end - Duration::days(WINDOW_DAYS),
            end,
        }
    }

    /// Bounds formatted the way dates are stored, ready to compare as text.
    pub fn bounds(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
        )
    }
}
