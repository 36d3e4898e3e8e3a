use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::LoanApplicationForm;
use super::service::{LoanDecisionService, LoanServiceError};

/// Router builder exposing the decision endpoint and the policy in effect.
pub fn decision_router(service: Arc<LoanDecisionService>) -> Router {
    Router::new()
        .route("/api/v1/loans/decisions", post(decide_handler))
        .route("/api/v1/loans/policy", get(policy_handler))
        .with_state(service)
}

pub(crate) async fn decide_handler(
    State(service): State<Arc<LoanDecisionService>>,
    Json(form): Json<LoanApplicationForm>,
) -> Response {
    match service.decide(form) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(LoanServiceError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn policy_handler(
    State(service): State<Arc<LoanDecisionService>>,
) -> Response {
    (StatusCode::OK, Json(service.policy().clone())).into_response()
}
