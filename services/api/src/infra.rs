use loan_ai::config::AppConfig;
use loan_ai::lending::applications::{EligibilityPolicy, LoanDecisionService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn decision_service(config: &AppConfig) -> LoanDecisionService {
    LoanDecisionService::new(EligibilityPolicy::canonical(), config.presentation.clone())
}
