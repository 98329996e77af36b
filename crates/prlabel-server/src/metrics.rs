use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

use crate::{Result, ServerError};

lazy_static! {
    pub static ref GITHUB_API_CALLS: IntCounter =
        IntCounter::new("github_api_calls", "GitHub API calls").expect("valid metric definition");
}

pub(crate) fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsHandlerError {
            message: e.to_string(),
        })?;

    setup_process_metrics(&prometheus)?;
    prometheus
        .registry
        .register(Box::new(GITHUB_API_CALLS.clone()))?;

    Ok(prometheus)
}

#[cfg(unix)]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))?;
    Ok(())
}

#[cfg(not(unix))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    tracing::warn!("Process metrics are only supported on Unix.");
    Ok(())
}
