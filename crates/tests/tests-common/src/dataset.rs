//! Throwaway SQLite databases laid out like the observation dataset.

use std::path::PathBuf;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

use query_engine_metadata::metadata::{Observation, Station};

const SCHEMA: &[&str] = &[
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
];

/// A database file living in its own temporary directory, removed on drop.
pub struct Dataset {
    _directory: TempDir,
    pub path: PathBuf,
}

impl Dataset {
    /// Create the two tables and insert the given rows, in order.
    pub async fn create(stations: &[Station], observations: &[Observation]) -> Dataset {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("climate.sqlite");

        let mut connection = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&mut connection)
                .await
                .unwrap();
        }

        for station in stations {
            sqlx::query(
                "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(&station.station_id)
            .bind(&station.name)
            .bind(station.latitude)
            .bind(station.longitude)
            .bind(station.elevation)
            .execute(&mut connection)
            .await
            .unwrap();
        }

        for observation in observations {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
                .bind(&observation.station_id)
                .bind(&observation.date)
                .bind(observation.precipitation)
                .bind(observation.temperature)
                .execute(&mut connection)
                .await
                .unwrap();
        }

        connection.close().await.unwrap();

        Dataset {
            _directory: directory,
            path,
        }
    }

    /// A location inside a temporary directory where no database exists.
    pub fn missing() -> Dataset {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.sqlite");
        Dataset {
            _directory: directory,
            path,
        }
    }

    /// A handful of stations and readings around the end of the Hawaii dataset.
    ///
    /// Temperatures overall: min 62, average 73.125, max 87.
    pub async fn hawaii_sample() -> Dataset {
        let stations = vec![
            station("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
            station("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
            station("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
            // same name as the first row, under another identifier
            station("USC00517948", "WAIKIKI 717.2, HI US", 21.3152, -157.9992, 0.9),
        ];
        let observations = vec![
            observation("USC00519397", "2010-01-01", Some(0.08), Some(65.0)),
            observation("USC00513117", "2010-01-01", Some(0.28), Some(67.0)),
            observation("USC00519397", "2016-08-22", Some(0.0), Some(73.0)),
            observation("USC00519397", "2016-08-23", Some(0.0), Some(81.0)),
            observation("USC00519281", "2017-01-15", None, Some(62.0)),
            observation("USC00519397", "2017-08-23", Some(0.0), Some(76.0)),
            observation("USC00519397", "2017-08-22", Some(0.5), Some(74.0)),
            observation("USC00513117", "2017-08-23", Some(0.0), Some(87.0)),
        ];
        Dataset::create(&stations, &observations).await
    }

    /// Url the service would be configured with to read this dataset.
    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }
}

pub fn station(
    station_id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Station {
    Station {
        station_id: station_id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        elevation,
    }
}

pub fn observation(
    station_id: &str,
    date: &str,
    precipitation: Option<f64>,
    temperature: Option<f64>,
) -> Observation {
    Observation {
        station_id: station_id.to_string(),
        date: date.to_string(),
        precipitation,
        temperature,
    }
}
