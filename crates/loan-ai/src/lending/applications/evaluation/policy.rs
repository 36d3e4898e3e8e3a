use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::super::domain::Applicant;
use super::config::EligibilityPolicy;
use super::rules::EligibilityCheck;

pub const APPROVED_LABEL: &str = "Loan Approved";
pub const DENIED_LABEL: &str = "Loan Denied";

/// Final verdict for one applicant. A denial always carries a zero amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    pub approved: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl Decision {
    pub(crate) fn approve(amount: Decimal) -> Self {
        Self {
            approved: true,
            amount,
        }
    }

    pub fn denied() -> Self {
        Self {
            approved: false,
            amount: Decimal::ZERO,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.approved {
            APPROVED_LABEL
        } else {
            DENIED_LABEL
        }
    }

    /// Amount rendered with two decimal places, only for approvals.
    pub fn formatted_amount(&self, currency: &str) -> Option<String> {
        self.approved
            .then(|| format!("{currency} {:.2}", self.amount))
    }

    pub fn summary(&self, currency: &str) -> String {
        match self.formatted_amount(currency) {
            Some(amount) => format!("{}: {}", self.label(), amount),
            None => self.label().to_string(),
        }
    }
}

/// Largest amount the lender will grant: the request, capped at a share of annual income.
pub(crate) fn approved_amount(applicant: &Applicant, policy: &EligibilityPolicy) -> Decimal {
    let income_cap = Decimal::from(applicant.annual_income) * policy.approval_income_share;
    Decimal::from(applicant.loan_amount).min(income_cap)
}

pub(crate) fn decide_outcome(
    applicant: &Applicant,
    policy: &EligibilityPolicy,
    failed: Option<EligibilityCheck>,
) -> Decision {
    match failed {
        Some(_) => Decision::denied(),
        None => Decision::approve(approved_amount(applicant, policy)),
    }
}
