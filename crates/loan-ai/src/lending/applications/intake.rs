use super::domain::{Applicant, LoanApplicationForm, ValidatedApplication};

/// Validation errors raised while turning a form into an applicant record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("applicant age {found} outside accepted range {min}..={max}")]
    AgeOutOfRange { min: u32, max: u32, found: u32 },
    #[error("loan term of {found} months exceeds the {max} month form limit")]
    LoanTermOutOfRange { max: u32, found: u32 },
}

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 100;
const MAX_LOAN_TERM_MONTHS: u32 = 720;

/// Ranges the collecting layer enforces before any eligibility rule runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakePolicy {
    min_age: u32,
    max_age: u32,
    max_loan_term_months: u32,
}

impl IntakePolicy {
    pub fn new(min_age: u32, max_age: u32, max_loan_term_months: u32) -> Self {
        let (min_age, max_age) = if min_age <= max_age {
            (min_age, max_age)
        } else {
            (MIN_AGE, MAX_AGE)
        };

        Self {
            min_age,
            max_age,
            max_loan_term_months,
        }
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn max_loan_term_months(&self) -> u32 {
        self.max_loan_term_months
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(MIN_AGE, MAX_AGE, MAX_LOAN_TERM_MONTHS)
    }
}

/// Guard responsible for producing `Applicant` records from raw submissions.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    /// Convert an inbound form into a validated applicant record.
    pub fn applicant_from_form(
        &self,
        form: LoanApplicationForm,
    ) -> Result<ValidatedApplication, IntakeViolation> {
        if form.age < self.policy.min_age || form.age > self.policy.max_age {
            return Err(IntakeViolation::AgeOutOfRange {
                min: self.policy.min_age,
                max: self.policy.max_age,
                found: form.age,
            });
        }

        if form.loan_term > self.policy.max_loan_term_months {
            return Err(IntakeViolation::LoanTermOutOfRange {
                max: self.policy.max_loan_term_months,
                found: form.loan_term,
            });
        }

        let applicant_name = form
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(ValidatedApplication {
            applicant_name,
            applicant: Applicant {
                age: form.age,
                marital_status: form.marital_status,
                employment_status: form.employment_status,
                annual_income: form.annual_income,
                family_size: form.family_size,
                loan_amount: form.loan_amount,
                existing_debt: form.existing_debt,
                loan_purpose: form.loan_purpose,
                loan_term: form.loan_term,
                monthly_expenses: form.monthly_expenses,
                has_collateral: form.has_collateral,
                bankruptcy_history: form.bankruptcy_history,
            },
        })
    }
}
