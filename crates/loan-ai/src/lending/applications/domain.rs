use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raised when a free-text label does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} '{value}' (expected one of: {expected})")]
pub struct UnknownLabel {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Case-insensitive label lookup that ignores punctuation (`self_employed` is `Self-Employed`).
fn parse_label<T: Copy>(
    field: &'static str,
    raw: &str,
    options: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, UnknownLabel> {
    let wanted = normalize(raw);
    options
        .iter()
        .copied()
        .find(|option| !wanted.is_empty() && normalize(label(*option)) == wanted)
        .ok_or_else(|| UnknownLabel {
            field,
            value: raw.to_string(),
            expected: options
                .iter()
                .map(|option| label(*option))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Other,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 4] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Divorced,
        MaritalStatus::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Employed,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 5] = [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Retired,
        EmploymentStatus::Student,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "Employed",
            EmploymentStatus::SelfEmployed => "Self-Employed",
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::Retired => "Retired",
            EmploymentStatus::Student => "Student",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanPurpose {
    Business,
    Home,
    Car,
    Education,
    Medical,
    Other,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 6] = [
        LoanPurpose::Business,
        LoanPurpose::Home,
        LoanPurpose::Car,
        LoanPurpose::Education,
        LoanPurpose::Medical,
        LoanPurpose::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            LoanPurpose::Business => "Business",
            LoanPurpose::Home => "Home",
            LoanPurpose::Car => "Car",
            LoanPurpose::Education => "Education",
            LoanPurpose::Medical => "Medical",
            LoanPurpose::Other => "Other",
        }
    }
}

macro_rules! label_conversions {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownLabel;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_label($field, raw, &<$ty>::ALL, <$ty>::label)
            }
        }
    };
}

label_conversions!(MaritalStatus, "marital status");
label_conversions!(EmploymentStatus, "employment status");
label_conversions!(LoanPurpose, "loan purpose");

/// Fully populated applicant record consumed by the eligibility engine.
///
/// Currency amounts are whole units; `loan_term` is expressed in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: u32,
    pub marital_status: MaritalStatus,
    pub employment_status: EmploymentStatus,
    pub annual_income: u64,
    pub family_size: u32,
    pub loan_amount: u64,
    pub existing_debt: u64,
    pub loan_purpose: LoanPurpose,
    pub loan_term: u32,
    pub monthly_expenses: u64,
    pub has_collateral: bool,
    pub bankruptcy_history: bool,
}

/// Raw submission collected by the presentation surfaces before intake checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplicationForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age: u32,
    pub marital_status: MaritalStatus,
    pub employment_status: EmploymentStatus,
    pub annual_income: u64,
    pub family_size: u32,
    pub loan_amount: u64,
    pub existing_debt: u64,
    pub loan_purpose: LoanPurpose,
    pub loan_term: u32,
    pub monthly_expenses: u64,
    pub has_collateral: bool,
    pub bankruptcy_history: bool,
}

impl LoanApplicationForm {
    /// Builds a form carrying the applicant's fields verbatim.
    pub fn from_applicant(name: Option<String>, applicant: Applicant) -> Self {
        Self {
            name,
            age: applicant.age,
            marital_status: applicant.marital_status,
            employment_status: applicant.employment_status,
            annual_income: applicant.annual_income,
            family_size: applicant.family_size,
            loan_amount: applicant.loan_amount,
            existing_debt: applicant.existing_debt,
            loan_purpose: applicant.loan_purpose,
            loan_term: applicant.loan_term,
            monthly_expenses: applicant.monthly_expenses,
            has_collateral: applicant.has_collateral,
            bankruptcy_history: applicant.bankruptcy_history,
        }
    }
}

/// Applicant record that passed intake, with the optional display name kept aside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedApplication {
    pub applicant_name: Option<String>,
    pub applicant: Applicant,
}
