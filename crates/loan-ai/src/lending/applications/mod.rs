//! Loan application intake and eligibility decisions.
//!
//! A submission passes the intake guard, becomes an [`Applicant`], and is decided by the
//! [`EligibilityEngine`]. Nothing is stored: each evaluation stands alone.

pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, EmploymentStatus, LoanApplicationForm, LoanPurpose, MaritalStatus, UnknownLabel,
    ValidatedApplication,
};
pub use evaluation::{Decision, EligibilityEngine, EligibilityPolicy, APPROVED_LABEL, DENIED_LABEL};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation};
pub use router::decision_router;
pub use service::{DecisionView, LoanDecisionService, LoanServiceError};
