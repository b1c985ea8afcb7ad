//! Logging and metrics setup

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wastesort_core::{ClassificationResult, Error};

const VERBOSE_FILTER: &str =
    "wastesort=debug,wastesort_web=debug,wastesort_classifier=debug,tower_http=debug";

const DEFAULT_FILTER: &str =
    "wastesort=info,wastesort_web=info,wastesort_classifier=info,tower_http=warn";

/// Initialize tracing/logging
///
/// `--verbose` takes precedence over `RUST_LOG`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Install the Prometheus recorder and return the handle for rendering
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "wastesort_classifications_total",
        "Total number of classified images by label"
    );
    metrics::describe_counter!(
        "wastesort_low_confidence_total",
        "Classifications below the confidence threshold"
    );
    metrics::describe_histogram!(
        "wastesort_inference_latency_us",
        metrics::Unit::Microseconds,
        "Preprocessing plus inference latency in microseconds"
    );
    metrics::describe_counter!("wastesort_errors_total", "Total number of errors by kind");

    tracing::info!("Metrics exporter initialized");
    Ok(handle)
}

pub fn record_classification(result: &ClassificationResult) {
    metrics::counter!("wastesort_classifications_total", "label" => result.label.as_str())
        .increment(1);
    if result.is_low_confidence() {
        metrics::counter!("wastesort_low_confidence_total").increment(1);
    }
    metrics::histogram!("wastesort_inference_latency_us").record(result.latency_us as f64);
}

pub fn record_error(error: &Error) {
    metrics::counter!("wastesort_errors_total", "kind" => error.kind()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filters_parse() {
        assert!(EnvFilter::try_new(VERBOSE_FILTER).is_ok());
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_verbose_filter_enables_debug_for_every_crate() {
        for target in ["wastesort", "wastesort_web", "wastesort_classifier"] {
            assert!(VERBOSE_FILTER.contains(&format!("{target}=debug")));
            assert!(DEFAULT_FILTER.contains(&format!("{target}=info")));
        }
    }
}
