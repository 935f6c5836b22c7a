//! The read operations served by the API.
//!
//! Date bounds are compared as text against the stored `YYYY-MM-DD` strings. They are not
//! parsed, so a malformed bound simply narrows or widens the filter.

use serde::Serialize;
use sqlx::sqlite::SqliteConnection;
use tracing::{info_span, Instrument};

use query_engine_metadata::metadata::{measurement, station, TemperatureWindow};

use crate::error::Error;

/// One row of `/api/v1.0/precipitation`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub precipitation: Option<f64>,
}

/// Minimum, average and maximum temperature over a set of observations.
///
/// All three are null when no observation matched.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct TemperatureSummary {
    #[serde(rename = "Tmin")]
    pub tmin: Option<f64>,
    #[serde(rename = "Tavg")]
    pub tavg: Option<f64>,
    #[serde(rename = "Tmax")]
    pub tmax: Option<f64>,
}

/// Inclusive text bounds on the observation date. No upper bound when `end` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange<'a> {
    pub start: &'a str,
    pub end: Option<&'a str>,
}

impl<'a> DateRange<'a> {
    pub fn starting(start: &'a str) -> Self {
        DateRange { start, end: None }
    }

    pub fn between(start: &'a str, end: &'a str) -> Self {
        DateRange {
            start,
            end: Some(end),
        }
    }
}

/// Date and precipitation of every observation, in storage order.
pub async fn list_precipitation(
    connection: &mut SqliteConnection,
) -> Result<Vec<PrecipitationReading>, Error> {
    let statement = format!(
        "SELECT {date} AS date, {precipitation} AS precipitation FROM {table}",
        date = measurement::DATE,
        precipitation = measurement::PRECIPITATION,
        table = measurement::TABLE,
    );

    let readings = sqlx::query_as::<_, PrecipitationReading>(&statement)
        .fetch_all(&mut *connection)
        .instrument(info_span!("Fetch precipitation"))
        .await?;

    tracing::debug!(rows = readings.len(), "fetched precipitation");
    Ok(readings)
}

/// Name of every station, in storage order. Duplicate names are kept.
pub async fn list_station_names(connection: &mut SqliteConnection) -> Result<Vec<String>, Error> {
    let statement = format!(
        "SELECT {name} FROM {table}",
        name = station::NAME,
        table = station::TABLE,
    );

    let names = sqlx::query_scalar::<_, String>(&statement)
        .fetch_all(&mut *connection)
        .instrument(info_span!("Fetch station names"))
        .await?;

    tracing::debug!(rows = names.len(), "fetched station names");
    Ok(names)
}

/// Temperatures recorded by the window's station within the window, oldest first.
pub async fn list_temperatures(
    connection: &mut SqliteConnection,
    window: &TemperatureWindow,
) -> Result<Vec<Option<f64>>, Error> {
    let statement = format!(
        "SELECT {temperature} FROM {table} \
         WHERE {station} = ?1 AND {date} >= ?2 AND {date} <= ?3 \
         ORDER BY {date}",
        temperature = measurement::TEMPERATURE,
        table = measurement::TABLE,
        station = measurement::STATION,
        date = measurement::DATE,
    );
    let (start, end) = window.bounds();

    let temperatures = sqlx::query_scalar::<_, Option<f64>>(&statement)
        .bind(window.station)
        .bind(start)
        .bind(end)
        .fetch_all(&mut *connection)
        .instrument(info_span!("Fetch temperatures", station = window.station))
        .await?;

    tracing::debug!(rows = temperatures.len(), "fetched temperatures");
    Ok(temperatures)
}

/// Aggregate temperature over the observations whose date falls in `range`.
pub async fn summarize_temperatures(
    connection: &mut SqliteConnection,
    range: DateRange<'_>,
) -> Result<TemperatureSummary, Error> {
    let mut statement = format!(
        "SELECT MIN({temperature}) AS tmin, AVG({temperature}) AS tavg, MAX({temperature}) AS tmax \
         FROM {table} WHERE {date} >= ?1",
        temperature = measurement::TEMPERATURE,
        table = measurement::TABLE,
        date = measurement::DATE,
    );
    if range.end.is_some() {
        statement.push_str(&format!(" AND {date} <= ?2", date = measurement::DATE));
    }

    let mut query = sqlx::query_as::<_, TemperatureSummary>(&statement).bind(range.start);
    if let Some(end) = range.end {
        query = query.bind(end);
    }

    // an aggregate without GROUP BY always yields exactly one row
    let summary = query
        .fetch_one(&mut *connection)
        .instrument(info_span!("Summarize temperatures", start = range.start, end = ?range.end))
        .await?;

    Ok(summary)
}
