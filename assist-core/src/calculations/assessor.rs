//! End-to-end assessment of a financial record.
//!
//! Data flow: raw financial inputs → deduction resolution →
//! `taxable income = max(0, income − total deductions)` → bracket tax.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{floor_at_zero, round_half_up};
use crate::calculations::deductions::{DeductionError, DeductionResolver, DeductionSummary};
use crate::calculations::schedule::{BracketTaxCalculator, ScheduleError};
use crate::models::{FinancialRecord, TaxRules};

/// Errors from either stage of an assessment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("deduction error: {0}")]
    Deduction(#[from] DeductionError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Per-category deduction breakdown.
    pub deductions: DeductionSummary,

    /// Income remaining after total deductions, floored at zero.
    pub taxable_income: Decimal,

    /// Tax owed on the taxable income, rounded to two decimal places.
    pub tax_owed: Decimal,
}

/// Runs the two calculation stages in sequence for a single record.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use assist_core::calculations::TaxAssessor;
/// use assist_core::{FinancialRecord, ItemizedDeductionRules, TaxBracket, TaxRules};
///
/// let rules = TaxRules {
///     standard_deduction: dec!(12000),
///     tax_brackets: vec![
///         TaxBracket { min_income: dec!(0), max_income: Some(dec!(10000)), rate: dec!(0.10) },
///         TaxBracket { min_income: dec!(10000), max_income: Some(dec!(40000)), rate: dec!(0.12) },
///         TaxBracket { min_income: dec!(40000), max_income: None, rate: dec!(0.22) },
///     ],
///     itemized_deductions: ItemizedDeductionRules::default(),
/// };
///
/// let record = FinancialRecord {
///     income: dec!(50000),
///     medical_expenses: dec!(0),
///     charity: dec!(0),
///     student_loan_interest: None,
///     home_office_expense: None,
///     retirement_contributions: None,
/// };
///
/// let assessment = TaxAssessor::new(&rules).assess(&record).unwrap();
/// assert_eq!(assessment.taxable_income, dec!(38000.00));
/// assert_eq!(assessment.tax_owed, dec!(4360.00));
/// ```
#[derive(Debug, Clone)]
pub struct TaxAssessor<'a> {
    rules: &'a TaxRules,
}

impl<'a> TaxAssessor<'a> {
    pub fn new(rules: &'a TaxRules) -> Self {
        Self { rules }
    }

    /// Resolves deductions, derives taxable income, and computes the tax.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError`] when the record carries negative amounts,
    /// a reported category has no rule, or the bracket schedule is malformed.
    pub fn assess(
        &self,
        record: &FinancialRecord,
    ) -> Result<TaxAssessment, AssessmentError> {
        let deductions = DeductionResolver::new(self.rules).resolve(record)?;

        let taxable_income = floor_at_zero(round_half_up(record.income - deductions.total()));

        let tax_owed =
            BracketTaxCalculator::new(&self.rules.tax_brackets).calculate(taxable_income)?;

        debug!(%taxable_income, %tax_owed, "assessment complete");
        Ok(TaxAssessment {
            deductions,
            taxable_income,
            tax_owed,
        })
    }
}
