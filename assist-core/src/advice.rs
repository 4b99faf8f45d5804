//! Savings tips derived from unused deduction headroom.
//!
//! This is deliberately a tiny rule-of-thumb lookup over the configured
//! category caps, kept behind [`DeductionAdvisor`] so callers can swap in
//! something richer. It is not a statistical model and makes no optimality
//! claim; it only reports where a capped category still has room. Medical
//! expenses are threshold-based rather than capped, so they produce no tip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{floor_at_zero, round_half_up};
use crate::models::{DeductionCategory, FinancialRecord, TaxRules};

/// One actionable observation about unused deduction room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTip {
    pub category: DeductionCategory,

    /// How much more this category could contribute to total deductions.
    pub additional_deduction: Decimal,

    pub message: String,
}

/// Produces savings tips for a record under a rule set.
pub trait DeductionAdvisor {
    /// Advice is best-effort: categories without a configured rule are
    /// skipped rather than failing the call.
    fn advise(
        &self,
        record: &FinancialRecord,
        rules: &TaxRules,
    ) -> Vec<SavingsTip>;
}

/// Reports the remaining headroom under each capped category.
///
/// A category the record does not report counts as fully unused, so its tip
/// shows the whole cap.
#[derive(Debug, Clone, Default)]
pub struct HeadroomAdvisor;

impl HeadroomAdvisor {
    fn capped_tip(
        category: DeductionCategory,
        cap: Decimal,
        used: Decimal,
    ) -> Option<SavingsTip> {
        let headroom = round_half_up(floor_at_zero(cap - used));
        if headroom.is_zero() {
            return None;
        }
        Some(SavingsTip {
            category,
            additional_deduction: headroom,
            message: format!("{category} has {headroom} of unused deduction headroom"),
        })
    }

    fn skipped(category: DeductionCategory) {
        warn!(category = %category, "no rule configured, skipping tip");
    }
}

impl DeductionAdvisor for HeadroomAdvisor {
    fn advise(
        &self,
        record: &FinancialRecord,
        rules: &TaxRules,
    ) -> Vec<SavingsTip> {
        let itemized = &rules.itemized_deductions;
        let mut tips = Vec::new();

        match &itemized.charity {
            Some(rule) => {
                let cap = record.income * rule.income_limit;
                tips.extend(Self::capped_tip(
                    DeductionCategory::Charity,
                    cap,
                    record.charity,
                ));
            }
            None if record.charity > Decimal::ZERO => {
                Self::skipped(DeductionCategory::Charity);
            }
            None => {}
        }

        match &itemized.student_loan_interest {
            Some(rule) => {
                let used = record.student_loan_interest.unwrap_or(Decimal::ZERO);
                tips.extend(Self::capped_tip(
                    DeductionCategory::StudentLoanInterest,
                    rule.limit,
                    used,
                ));
            }
            None if record.student_loan_interest.unwrap_or(Decimal::ZERO) > Decimal::ZERO => {
                Self::skipped(DeductionCategory::StudentLoanInterest);
            }
            None => {}
        }

        match &itemized.home_office {
            Some(rule) => {
                let expense = record.home_office_expense.unwrap_or(Decimal::ZERO);
                let used = (expense * rule.rate).min(rule.limit);
                tips.extend(Self::capped_tip(
                    DeductionCategory::HomeOffice,
                    rule.limit,
                    used,
                ));
            }
            None if record.home_office_expense.unwrap_or(Decimal::ZERO) > Decimal::ZERO => {
                Self::skipped(DeductionCategory::HomeOffice);
            }
            None => {}
        }

        match &itemized.retirement_contributions {
            Some(rule) => {
                let used = record.retirement_contributions.unwrap_or(Decimal::ZERO);
                tips.extend(Self::capped_tip(
                    DeductionCategory::RetirementContributions,
                    rule.limit,
                    used,
                ));
            }
            None if record.retirement_contributions.unwrap_or(Decimal::ZERO) > Decimal::ZERO => {
                Self::skipped(DeductionCategory::RetirementContributions);
            }
            None => {}
        }

        tips
    }
}
