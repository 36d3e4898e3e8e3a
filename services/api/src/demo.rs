use crate::infra::decision_service;
use clap::Args;
use loan_ai::config::{AppConfig, ConfigError, PresentationConfig};
use loan_ai::error::AppError;
use loan_ai::lending::applications::{
    Applicant, EmploymentStatus, LoanApplicationForm, LoanDecisionService, LoanPurpose,
    MaritalStatus,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the currency label used when printing approved amounts
    #[arg(long)]
    pub(crate) currency: Option<String>,
}

pub(crate) struct DemoScenario {
    pub(crate) title: &'static str,
    pub(crate) applicant: Applicant,
}

fn standard_track() -> Applicant {
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

pub(crate) fn reference_scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            title: "Salaried business borrower",
            applicant: standard_track(),
        },
        DemoScenario {
            title: "Student education loan",
            applicant: Applicant {
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
            },
        },
        DemoScenario {
            title: "Prior bankruptcy",
            applicant: Applicant {
                bankruptcy_history: true,
                ..standard_track()
            },
        },
        DemoScenario {
            title: "Expenses at 80% of income",
            applicant: Applicant {
                annual_income: 600_000,
                monthly_expenses: 40_000,
                ..standard_track()
            },
        },
        DemoScenario {
            title: "No declared income",
            applicant: Applicant {
                annual_income: 0,
                ..standard_track()
            },
        },
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(currency) = args.currency {
        override_currency(&mut config.presentation, &currency)?;
    }

    let service = decision_service(&config);

    println!("Loan eligibility demo");
    for line in demo_lines(&service)? {
        println!("{line}");
    }

    Ok(())
}

pub(crate) fn override_currency(
    presentation: &mut PresentationConfig,
    currency: &str,
) -> Result<(), ConfigError> {
    let currency = currency.trim();
    if currency.is_empty() {
        return Err(ConfigError::EmptyCurrency);
    }

    presentation.currency = currency.to_string();
    Ok(())
}

pub(crate) fn demo_lines(service: &LoanDecisionService) -> Result<Vec<String>, AppError> {
    let mut lines = Vec::new();
    for scenario in reference_scenarios() {
        let form = LoanApplicationForm::from_applicant(None, scenario.applicant);
        let view = service.decide(form)?;
        let summary = view.decision().summary(service.currency());
        lines.push(format!("- {}: {}", scenario.title, summary));
    }

    Ok(lines)
}
