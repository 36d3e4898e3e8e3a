use crate::infra::decision_service;
use clap::Args;
use loan_ai::config::AppConfig;
use loan_ai::error::AppError;
use loan_ai::lending::applications::{
    DecisionView, EmploymentStatus, LoanApplicationForm, LoanPurpose, MaritalStatus,
};

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Applicant name used to greet them in the output
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Applicant age in years (18-100)
    #[arg(long)]
    pub(crate) age: u32,
    /// Single, Married, Divorced or Other
    #[arg(long)]
    pub(crate) marital_status: MaritalStatus,
    /// Employed, Self-Employed, Unemployed, Retired or Student
    #[arg(long)]
    pub(crate) employment_status: EmploymentStatus,
    /// Annual income in whole currency units
    #[arg(long)]
    pub(crate) annual_income: u64,
    /// Number of people in the household
    #[arg(long, default_value_t = 0)]
    pub(crate) family_size: u32,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) loan_amount: u64,
    /// Outstanding debt
    #[arg(long, default_value_t = 0)]
    pub(crate) existing_debt: u64,
    /// Business, Home, Car, Education, Medical or Other
    #[arg(long)]
    pub(crate) loan_purpose: LoanPurpose,
    /// Loan term in months
    #[arg(long)]
    pub(crate) loan_term: u32,
    /// Monthly expenses
    #[arg(long)]
    pub(crate) monthly_expenses: u64,
    /// The applicant can pledge collateral
    #[arg(long)]
    pub(crate) has_collateral: bool,
    /// The applicant has declared bankruptcy before
    #[arg(long)]
    pub(crate) bankruptcy_history: bool,
}

impl From<DecideArgs> for LoanApplicationForm {
    fn from(args: DecideArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            marital_status: args.marital_status,
            employment_status: args.employment_status,
            annual_income: args.annual_income,
            family_size: args.family_size,
            loan_amount: args.loan_amount,
            existing_debt: args.existing_debt,
            loan_purpose: args.loan_purpose,
            loan_term: args.loan_term,
            monthly_expenses: args.monthly_expenses,
            has_collateral: args.has_collateral,
            bankruptcy_history: args.bankruptcy_history,
        }
    }
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = decision_service(&config);

    let view = service.decide(args.into())?;
    for line in decision_lines(&view) {
        println!("{line}");
    }

    Ok(())
}

pub(crate) fn decision_lines(view: &DecisionView) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(name) = &view.applicant_name {
        lines.push(format!("Hello {name}"));
    }

    lines.push(view.decision_label.clone());
    if let Some(amount) = &view.formatted_amount {
        lines.push(format!("Amount : {amount}"));
    }

    lines
}
