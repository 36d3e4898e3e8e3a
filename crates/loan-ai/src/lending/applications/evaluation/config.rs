use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::super::domain::LoanPurpose;

/// Thresholds of the lending policy. Exclusive ceilings are named `*_ceiling`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityPolicy {
    pub existing_debt_ceiling: u64,
    pub max_loan_term_months: u32,
    pub expense_ratio_ceiling_percent: u64,
    pub single_max_family_size: u32,
    pub married_max_family_size: u32,
    pub student_max_age: u32,
    pub student_min_annual_income: u64,
    pub standard_min_age: u32,
    pub standard_min_annual_income: u64,
    pub standard_purposes: Vec<LoanPurpose>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub approval_income_share: Decimal,
}

impl EligibilityPolicy {
    /// The single rule set the lender operates: terms in months, student income floor of 72000.
    pub fn canonical() -> Self {
        Self {
            existing_debt_ceiling: 300_000,
            max_loan_term_months: 60,
            expense_ratio_ceiling_percent: 70,
            single_max_family_size: 2,
            married_max_family_size: 4,
            student_max_age: 25,
            student_min_annual_income: 72_000,
            standard_min_age: 25,
            standard_min_annual_income: 600_000,
            standard_purposes: vec![
                LoanPurpose::Business,
                LoanPurpose::Education,
                LoanPurpose::Medical,
            ],
            approval_income_share: dec!(0.4),
        }
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::canonical()
    }
}
