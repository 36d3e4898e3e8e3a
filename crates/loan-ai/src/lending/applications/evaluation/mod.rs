mod config;
mod policy;
pub(crate) mod rules;

pub use config::EligibilityPolicy;
pub use policy::{Decision, APPROVED_LABEL, DENIED_LABEL};

use super::domain::Applicant;
use policy::decide_outcome;
use tracing::debug;

/// Stateless evaluator applying the lending policy to one applicant at a time.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    policy: EligibilityPolicy,
}

impl EligibilityEngine {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Approves only when every eligibility predicate holds; otherwise denies with a zero amount.
    pub fn decide(&self, applicant: &Applicant) -> Decision {
        let failed = rules::first_failed_check(applicant, &self.policy);
        if let Some(check) = failed {
            debug!(check = check.label(), "eligibility check failed");
        }

        decide_outcome(applicant, &self.policy, failed)
    }
}
