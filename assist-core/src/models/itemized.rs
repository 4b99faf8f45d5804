use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Medical expenses are deductible only for the portion exceeding
/// `income × income_threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalExpenseRule {
    /// Fraction of income, not an absolute amount (e.g. `0.075`).
    pub income_threshold: Decimal,
}

/// Charitable donations are deductible up to `income × income_limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharityRule {
    /// Fraction of income, not an absolute amount (e.g. `0.60`).
    pub income_limit: Decimal,
}

/// Student loan interest is deductible up to a flat cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentLoanInterestRule {
    pub limit: Decimal,
}

/// Home office expenses are deductible at `rate`, up to a flat cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeOfficeRule {
    pub rate: Decimal,
    pub limit: Decimal,
}

/// Retirement contributions are deductible up to a flat cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementContributionRule {
    pub limit: Decimal,
}

/// Per-category deduction rules for one tax year.
///
/// Every category is optional: a rule set may simply not cover a category.
/// Resolving a record that reports a non-zero amount for an uncovered
/// category is an error, never a silent zero contribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemizedDeductionRules {
    pub medical_expenses: Option<MedicalExpenseRule>,
    pub charity: Option<CharityRule>,
    pub student_loan_interest: Option<StudentLoanInterestRule>,
    pub home_office: Option<HomeOfficeRule>,
    pub retirement_contributions: Option<RetirementContributionRule>,
}
