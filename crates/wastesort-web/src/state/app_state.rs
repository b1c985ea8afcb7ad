use crate::config::AppConfig;
use crate::dataset::DatasetSummary;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use wastesort_classifier::ModelLoader;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Cached classifier, loaded once per process
    pub model: Arc<ModelLoader>,

    /// Static dataset statistics
    pub dataset: Arc<DatasetSummary>,

    /// Prometheus handle, absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: AppConfig, model: ModelLoader) -> Self {
        Self {
            config: Arc::new(config),
            model: Arc::new(model),
            dataset: Arc::new(DatasetSummary::new()),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle used by `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
