use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::PresentationConfig;
use crate::lending::applications::domain::{
    Applicant, EmploymentStatus, LoanApplicationForm, LoanPurpose, MaritalStatus,
};
use crate::lending::applications::evaluation::{EligibilityEngine, EligibilityPolicy};
use crate::lending::applications::intake::IntakeGuard;
use crate::lending::applications::{decision_router, LoanDecisionService};

/// Married, employed applicant comfortably inside every threshold.
pub(super) fn standard_applicant() -> Applicant {
    Applicant {
        age: 30,
        marital_status: MaritalStatus::Married,
        employment_status: EmploymentStatus::Employed,
        annual_income: 700_000,
        family_size: 3,
        loan_amount: 200_000,
        existing_debt: 100_000,
        loan_purpose: LoanPurpose::Business,
        loan_term: 36,
        monthly_expenses: 20_000,
        has_collateral: true,
        bankruptcy_history: false,
    }
}

pub(super) fn student_applicant() -> Applicant {
    Applicant {
        age: 22,
        marital_status: MaritalStatus::Single,
        employment_status: EmploymentStatus::Student,
        annual_income: 75_000,
        family_size: 1,
        loan_amount: 50_000,
        existing_debt: 0,
        loan_purpose: LoanPurpose::Education,
        loan_term: 24,
        monthly_expenses: 3_000,
        has_collateral: true,
        bankruptcy_history: false,
    }
}

pub(super) fn form(applicant: Applicant) -> LoanApplicationForm {
    LoanApplicationForm::from_applicant(Some("Wanjiru".to_string()), applicant)
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(EligibilityPolicy::canonical())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn service() -> LoanDecisionService {
    LoanDecisionService::new(EligibilityPolicy::canonical(), PresentationConfig::default())
}

pub(super) fn router() -> axum::Router {
    decision_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
