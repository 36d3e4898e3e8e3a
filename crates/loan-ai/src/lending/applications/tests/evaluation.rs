use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::common::*;
use crate::lending::applications::domain::{EmploymentStatus, LoanPurpose, MaritalStatus};
use crate::lending::applications::evaluation::rules::{first_failed_check, EligibilityCheck};
use crate::lending::applications::evaluation::{Decision, EligibilityPolicy};

fn assert_denied(decision: Decision) {
    assert!(!decision.approved, "expected denial, got {decision:?}");
    assert_eq!(decision.amount, Decimal::ZERO);
}

#[test]
fn approves_standard_track_capped_by_request() {
    let decision = engine().decide(&standard_applicant());

    assert!(decision.approved);
    assert_eq!(decision.amount, dec!(200000));
}

#[test]
fn approves_student_track_capped_by_income_share() {
    let decision = engine().decide(&student_applicant());

    assert!(decision.approved);
    assert_eq!(decision.amount, dec!(30000));
}

#[test]
fn denies_any_bankruptcy_history() {
    let mut applicant = standard_applicant();
    applicant.bankruptcy_history = true;

    assert_denied(engine().decide(&applicant));

    let mut student = student_applicant();
    student.bankruptcy_history = true;
    assert_denied(engine().decide(&student));
}

#[test]
fn denies_when_expense_ratio_reaches_ceiling() {
    let mut applicant = standard_applicant();
    applicant.annual_income = 600_000;
    applicant.monthly_expenses = 40_000;

    assert_denied(engine().decide(&applicant));
    assert_eq!(
        first_failed_check(&applicant, &EligibilityPolicy::canonical()),
        Some(EligibilityCheck::ExpenseRatio)
    );
}

#[test]
fn expense_ratio_of_exactly_seventy_percent_is_denied() {
    let mut applicant = standard_applicant();
    applicant.annual_income = 600_000;
    applicant.monthly_expenses = 35_000;
    assert_denied(engine().decide(&applicant));

    applicant.monthly_expenses = 34_999;
    assert!(engine().decide(&applicant).approved);
}

#[test]
fn zero_income_is_denied_without_fault() {
    let mut applicant = standard_applicant();
    applicant.annual_income = 0;
    applicant.monthly_expenses = 0;

    assert_denied(engine().decide(&applicant));

    applicant.has_collateral = false;
    assert_denied(engine().decide(&applicant));
}

#[test]
fn expense_ratio_guard_holds_for_zero_income_on_its_own() {
    let mut applicant = standard_applicant();
    applicant.annual_income = 0;

    assert!(!EligibilityCheck::ExpenseRatio.passes(&applicant, &EligibilityPolicy::canonical()));
}

#[test]
fn divorced_and_other_statuses_are_never_approved() {
    for status in [MaritalStatus::Divorced, MaritalStatus::Other] {
        for family_size in 0..=4 {
            let mut applicant = standard_applicant();
            applicant.marital_status = status;
            applicant.family_size = family_size;
            assert_denied(engine().decide(&applicant));
        }
    }
}

#[test]
fn dependants_limits_follow_marital_status() {
    let mut applicant = standard_applicant();
    applicant.family_size = 4;
    assert!(engine().decide(&applicant).approved);
    applicant.family_size = 5;
    assert_denied(engine().decide(&applicant));

    let mut single = student_applicant();
    single.family_size = 2;
    assert!(engine().decide(&single).approved);
    single.family_size = 3;
    assert_denied(engine().decide(&single));
}

#[test]
fn debt_ceiling_is_exclusive() {
    let mut applicant = standard_applicant();
    applicant.existing_debt = 299_999;
    assert!(engine().decide(&applicant).approved);

    applicant.existing_debt = 300_000;
    assert_denied(engine().decide(&applicant));
}

#[test]
fn term_ceiling_is_inclusive() {
    let mut applicant = standard_applicant();
    applicant.loan_term = 60;
    assert!(engine().decide(&applicant).approved);

    applicant.loan_term = 61;
    assert_denied(engine().decide(&applicant));
}

#[test]
fn collateral_is_required() {
    let mut applicant = standard_applicant();
    applicant.has_collateral = false;

    assert_denied(engine().decide(&applicant));
}

#[test]
fn standard_track_requires_listed_purpose_and_employment() {
    for purpose in [LoanPurpose::Home, LoanPurpose::Car, LoanPurpose::Other] {
        let mut applicant = standard_applicant();
        applicant.loan_purpose = purpose;
        assert_denied(engine().decide(&applicant));
    }

    for purpose in [LoanPurpose::Education, LoanPurpose::Medical] {
        let mut applicant = standard_applicant();
        applicant.loan_purpose = purpose;
        assert!(engine().decide(&applicant).approved);
    }

    for status in [
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Retired,
    ] {
        let mut applicant = standard_applicant();
        applicant.employment_status = status;
        assert_denied(engine().decide(&applicant));
    }
}

#[test]
fn standard_track_income_floor() {
    let mut applicant = standard_applicant();
    applicant.annual_income = 599_999;
    applicant.monthly_expenses = 10_000;
    assert_denied(engine().decide(&applicant));

    applicant.annual_income = 600_000;
    assert!(engine().decide(&applicant).approved);
}

#[test]
fn age_twenty_five_may_use_either_track() {
    let mut student = student_applicant();
    student.age = 25;
    assert!(engine().decide(&student).approved);
    student.age = 26;
    assert_denied(engine().decide(&student));

    let mut standard = standard_applicant();
    standard.age = 25;
    assert!(engine().decide(&standard).approved);
    standard.age = 24;
    assert_denied(engine().decide(&standard));
}

#[test]
fn student_track_income_floor() {
    let mut student = student_applicant();
    student.annual_income = 71_999;
    student.monthly_expenses = 1_000;
    assert_denied(engine().decide(&student));

    student.annual_income = 72_000;
    assert!(engine().decide(&student).approved);
}

#[test]
fn approved_amount_keeps_fractional_income_share() {
    let mut student = student_applicant();
    student.annual_income = 75_001;

    let decision = engine().decide(&student);

    assert!(decision.approved);
    assert_eq!(decision.amount, dec!(30000.4));
}

#[test]
fn approved_amount_never_exceeds_request_or_income_share() {
    let mut applicant = standard_applicant();
    for loan_amount in [0, 1, 199_999, 280_000, 280_001, 5_000_000] {
        applicant.loan_amount = loan_amount;
        let decision = engine().decide(&applicant);

        assert!(decision.approved);
        assert!(decision.amount <= Decimal::from(loan_amount));
        assert!(decision.amount <= dec!(280000));
        assert_eq!(decision.amount, Decimal::from(loan_amount).min(dec!(280000)));
    }
}

#[test]
fn decide_is_deterministic() {
    let engine = engine();
    let applicant = student_applicant();

    let first = engine.decide(&applicant);
    let second = engine.decide(&applicant);

    assert_eq!(first, second);
}

#[test]
fn first_failure_follows_evaluation_order() {
    let mut applicant = standard_applicant();
    applicant.existing_debt = 400_000;
    applicant.bankruptcy_history = true;
    applicant.marital_status = MaritalStatus::Divorced;

    assert_eq!(
        first_failed_check(&applicant, &EligibilityPolicy::canonical()),
        Some(EligibilityCheck::DebtCeiling)
    );
    assert_eq!(
        first_failed_check(&standard_applicant(), &EligibilityPolicy::canonical()),
        None
    );
}

#[test]
fn decision_renders_labels_and_amounts() {
    let approved = engine().decide(&student_applicant());
    assert_eq!(approved.label(), "Loan Approved");
    assert_eq!(
        approved.formatted_amount("Kshs").as_deref(),
        Some("Kshs 30000.00")
    );
    assert_eq!(approved.summary("Kshs"), "Loan Approved: Kshs 30000.00");

    let denied = Decision::denied();
    assert_eq!(denied.label(), "Loan Denied");
    assert!(denied.formatted_amount("Kshs").is_none());
    assert_eq!(denied.summary("Kshs"), "Loan Denied");
}
