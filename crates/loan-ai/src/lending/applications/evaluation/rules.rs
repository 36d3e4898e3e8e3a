use super::super::domain::{Applicant, EmploymentStatus, LoanPurpose, MaritalStatus};
use super::config::EligibilityPolicy;

/// Individual predicates that must all hold for an approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EligibilityCheck {
    DebtCeiling,
    TermCeiling,
    BankruptcyHistory,
    Collateral,
    ExpenseRatio,
    Dependants,
    IncomeTrack,
}

const CHECKS: [EligibilityCheck; 7] = [
    EligibilityCheck::DebtCeiling,
    EligibilityCheck::TermCeiling,
    EligibilityCheck::BankruptcyHistory,
    EligibilityCheck::Collateral,
    EligibilityCheck::ExpenseRatio,
    EligibilityCheck::Dependants,
    EligibilityCheck::IncomeTrack,
];

impl EligibilityCheck {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            EligibilityCheck::DebtCeiling => "existing_debt_ceiling",
            EligibilityCheck::TermCeiling => "loan_term_ceiling",
            EligibilityCheck::BankruptcyHistory => "bankruptcy_history",
            EligibilityCheck::Collateral => "collateral",
            EligibilityCheck::ExpenseRatio => "expense_ratio",
            EligibilityCheck::Dependants => "dependants",
            EligibilityCheck::IncomeTrack => "income_track",
        }
    }

    pub(crate) fn passes(self, applicant: &Applicant, policy: &EligibilityPolicy) -> bool {
        match self {
            EligibilityCheck::DebtCeiling => applicant.existing_debt < policy.existing_debt_ceiling,
            EligibilityCheck::TermCeiling => applicant.loan_term <= policy.max_loan_term_months,
            EligibilityCheck::BankruptcyHistory => !applicant.bankruptcy_history,
            EligibilityCheck::Collateral => {
                applicant.has_collateral && applicant.annual_income > 0
            }
            EligibilityCheck::ExpenseRatio => within_expense_ratio(applicant, policy),
            EligibilityCheck::Dependants => dependants_within_limit(applicant, policy),
            EligibilityCheck::IncomeTrack => {
                qualifies_as_student(applicant, policy) || qualifies_as_standard(applicant, policy)
            }
        }
    }
}

/// Returns the first predicate the applicant fails, in evaluation order.
pub(crate) fn first_failed_check(
    applicant: &Applicant,
    policy: &EligibilityPolicy,
) -> Option<EligibilityCheck> {
    CHECKS
        .into_iter()
        .find(|check| !check.passes(applicant, policy))
}

// expenses / (income / 12) * 100 < ceiling, cross-multiplied to stay in integers.
fn within_expense_ratio(applicant: &Applicant, policy: &EligibilityPolicy) -> bool {
    if applicant.annual_income == 0 {
        return false;
    }

    let expenses = u128::from(applicant.monthly_expenses) * 12 * 100;
    let allowance =
        u128::from(policy.expense_ratio_ceiling_percent) * u128::from(applicant.annual_income);
    expenses < allowance
}

fn dependants_within_limit(applicant: &Applicant, policy: &EligibilityPolicy) -> bool {
    match applicant.marital_status {
        MaritalStatus::Single => applicant.family_size <= policy.single_max_family_size,
        MaritalStatus::Married => applicant.family_size <= policy.married_max_family_size,
        MaritalStatus::Divorced | MaritalStatus::Other => false,
    }
}

fn qualifies_as_student(applicant: &Applicant, policy: &EligibilityPolicy) -> bool {
    applicant.age <= policy.student_max_age
        && applicant.loan_purpose == LoanPurpose::Education
        && applicant.employment_status == EmploymentStatus::Student
        && applicant.annual_income >= policy.student_min_annual_income
}

fn qualifies_as_standard(applicant: &Applicant, policy: &EligibilityPolicy) -> bool {
    applicant.age >= policy.standard_min_age
        && policy.standard_purposes.contains(&applicant.loan_purpose)
        && applicant.employment_status == EmploymentStatus::Employed
        && applicant.annual_income >= policy.standard_min_annual_income
}
