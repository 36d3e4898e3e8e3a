use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::LoanApplicationForm;
use super::evaluation::{Decision, EligibilityEngine, EligibilityPolicy};
use super::intake::{IntakeGuard, IntakeViolation};
use crate::config::PresentationConfig;

/// Service composing the intake guard and the eligibility engine.
#[derive(Debug, Clone)]
pub struct LoanDecisionService {
    guard: Arc<IntakeGuard>,
    engine: Arc<EligibilityEngine>,
    presentation: PresentationConfig,
}

impl LoanDecisionService {
    pub fn new(policy: EligibilityPolicy, presentation: PresentationConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), policy, presentation)
    }

    pub fn with_guard(
        guard: IntakeGuard,
        policy: EligibilityPolicy,
        presentation: PresentationConfig,
    ) -> Self {
        Self {
            guard: Arc::new(guard),
            engine: Arc::new(EligibilityEngine::new(policy)),
            presentation,
        }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        self.engine.policy()
    }

    pub fn currency(&self) -> &str {
        &self.presentation.currency
    }

    /// Validate a submission, evaluate it, and render the outcome.
    pub fn decide(&self, form: LoanApplicationForm) -> Result<DecisionView, LoanServiceError> {
        let application = self.guard.applicant_from_form(form)?;
        let decision = self.engine.decide(&application.applicant);

        info!(
            approved = decision.approved,
            amount = %decision.amount,
            "loan application evaluated"
        );

        Ok(DecisionView::render(
            application.applicant_name,
            decision,
            self.currency(),
        ))
    }
}

/// Rendered decision returned to the HTTP and CLI surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    pub approved: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub decision_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_amount: Option<String>,
}

impl DecisionView {
    pub fn render(applicant_name: Option<String>, decision: Decision, currency: &str) -> Self {
        Self {
            applicant_name,
            approved: decision.approved,
            amount: decision.amount,
            decision_label: decision.label().to_string(),
            formatted_amount: decision.formatted_amount(currency),
        }
    }

    pub fn decision(&self) -> Decision {
        Decision {
            approved: self.approved,
            amount: self.amount,
        }
    }
}

/// Error raised by the loan decision service.
#[derive(Debug, thiserror::Error)]
pub enum LoanServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}
