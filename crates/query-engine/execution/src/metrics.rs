//! Metrics setup and update for the service.

use prometheus::IntCounter;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: IntCounter,
    pub query_error_total: IntCounter,
}

impl Metrics {
    /// Create the counters and register them with the provided Prometheus Registry.
    pub fn initialize(metrics_registry: &prometheus::Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "climate_api_query_total",
            "Total successful queries.",
        )?;

        let query_error_total = add_int_counter_metric(
            metrics_registry,
            "climate_api_query_error_total",
            "Total queries that failed against the data source.",
        )?;

        Ok(Metrics {
            query_total,
            query_error_total,
        })
    }

    /// Count the outcome of one query.
    pub fn record<T>(&self, result: &Result<T, Error>) {
        match result {
            Ok(_) => self.query_total.inc(),
            Err(_) => self.query_error_total.inc(),
        }
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter =
        IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
