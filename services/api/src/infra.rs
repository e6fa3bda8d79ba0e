use feedback_advisor::recommendations::RecommendationEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine over the standard tables, shared by every handler and CLI command.
pub(crate) fn standard_engine() -> RecommendationEngine {
    RecommendationEngine::standard()
}
