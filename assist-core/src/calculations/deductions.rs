//! Deduction resolution for an individual financial record.
//!
//! Total deductions are the standard deduction plus one contribution per
//! itemized category. Categories are independent and additive:
//!
//! | Category                 | Contribution                                  |
//! |--------------------------|-----------------------------------------------|
//! | Medical expenses         | Portion exceeding `income × income_threshold` |
//! | Charity                  | `min(charity, income × income_limit)`         |
//! | Student loan interest    | `min(interest, limit)`                        |
//! | Home office              | `min(expense × rate, limit)`                  |
//! | Retirement contributions | `min(contributions, limit)`                   |
//!
//! A category the record does not report (or reports as zero) contributes
//! nothing and needs no rule. A category reported with a non-zero amount
//! requires its rule to be present in [`TaxRules`]; resolution fails rather
//! than treating the missing rule as a zero contribution.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use assist_core::calculations::DeductionResolver;
//! use assist_core::{
//!     FinancialRecord, ItemizedDeductionRules, MedicalExpenseRule, TaxRules,
//! };
//!
//! let rules = TaxRules {
//!     standard_deduction: dec!(12000),
//!     tax_brackets: Vec::new(),
//!     itemized_deductions: ItemizedDeductionRules {
//!         medical_expenses: Some(MedicalExpenseRule { income_threshold: dec!(0.075) }),
//!         ..ItemizedDeductionRules::default()
//!     },
//! };
//!
//! let record = FinancialRecord {
//!     income: dec!(5000),
//!     medical_expenses: dec!(1000),
//!     charity: dec!(0),
//!     student_loan_interest: None,
//!     home_office_expense: None,
//!     retirement_contributions: None,
//! };
//!
//! // Only 1000 − 5000 × 0.075 = 625 falls above the threshold.
//! let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();
//! assert_eq!(summary.medical_expenses, dec!(625.00));
//! assert_eq!(summary.total(), dec!(12625.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::models::{DeductionCategory, FinancialRecord, TaxRules};

/// Errors that can occur while resolving deductions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeductionError {
    /// A monetary input field was negative.
    #[error("{field} must be non-negative, got {amount}")]
    NegativeAmount {
        field: &'static str,
        amount: Decimal,
    },

    /// The record reports a non-zero amount for a category the rule set
    /// does not cover.
    #[error("no {0} rule configured in the rule set")]
    MissingRule(DeductionCategory),
}

/// Per-category breakdown of resolved deductions.
///
/// Each field holds the amount that category actually contributes, after
/// thresholds and caps. Categories the record did not report are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    pub standard_deduction: Decimal,
    pub medical_expenses: Decimal,
    pub charity: Decimal,
    pub student_loan_interest: Decimal,
    pub home_office: Decimal,
    pub retirement_contributions: Decimal,
}

impl DeductionSummary {
    /// Total deductions. Never less than the standard deduction, because no
    /// category contributes a negative amount.
    pub fn total(&self) -> Decimal {
        self.standard_deduction
            + self.medical_expenses
            + self.charity
            + self.student_loan_interest
            + self.home_office
            + self.retirement_contributions
    }

    /// The contribution for a single category.
    pub fn contribution(&self, category: DeductionCategory) -> Decimal {
        match category {
            DeductionCategory::MedicalExpenses => self.medical_expenses,
            DeductionCategory::Charity => self.charity,
            DeductionCategory::StudentLoanInterest => self.student_loan_interest,
            DeductionCategory::HomeOffice => self.home_office,
            DeductionCategory::RetirementContributions => self.retirement_contributions,
        }
    }
}

/// Resolves the deduction total for a financial record under a rule set.
#[derive(Debug, Clone)]
pub struct DeductionResolver<'a> {
    rules: &'a TaxRules,
}

impl<'a> DeductionResolver<'a> {
    pub fn new(rules: &'a TaxRules) -> Self {
        Self { rules }
    }

    /// Resolves every category and returns the per-category breakdown.
    ///
    /// Each contribution is rounded half-up to two decimal places; the total
    /// is the exact sum of the rounded contributions.
    ///
    /// # Errors
    ///
    /// Returns [`DeductionError`] if any monetary field is negative, or if a
    /// category with a non-zero reported amount has no configured rule.
    pub fn resolve(
        &self,
        record: &FinancialRecord,
    ) -> Result<DeductionSummary, DeductionError> {
        Self::validate_record(record)?;

        let summary = DeductionSummary {
            standard_deduction: self.rules.standard_deduction,
            medical_expenses: self.medical_contribution(record)?,
            charity: self.charity_contribution(record)?,
            student_loan_interest: self.student_loan_contribution(record)?,
            home_office: self.home_office_contribution(record)?,
            retirement_contributions: self.retirement_contribution(record)?,
        };

        debug!(total = %summary.total(), "deductions resolved");
        Ok(summary)
    }

    /// Rejects any negative monetary field up front.
    fn validate_record(record: &FinancialRecord) -> Result<(), DeductionError> {
        let reported = [
            ("income", Some(record.income)),
            ("medical expenses", Some(record.medical_expenses)),
            ("charity", Some(record.charity)),
            ("student loan interest", record.student_loan_interest),
            ("home office expense", record.home_office_expense),
            ("retirement contributions", record.retirement_contributions),
        ];

        for (field, amount) in reported {
            if let Some(amount) = amount {
                if amount < Decimal::ZERO {
                    return Err(DeductionError::NegativeAmount { field, amount });
                }
            }
        }

        Ok(())
    }

    /// Only the portion above `income × income_threshold` is deductible.
    /// Crossing the threshold does not make the full expense deductible.
    fn medical_contribution(
        &self,
        record: &FinancialRecord,
    ) -> Result<Decimal, DeductionError> {
        if record.medical_expenses.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let rule = self
            .rules
            .itemized_deductions
            .medical_expenses
            .as_ref()
            .ok_or(DeductionError::MissingRule(
                DeductionCategory::MedicalExpenses,
            ))?;

        let threshold = record.income * rule.income_threshold;
        if record.medical_expenses > threshold {
            Ok(round_half_up(record.medical_expenses - threshold))
        } else {
            Ok(Decimal::ZERO)
        }
    }

    fn charity_contribution(
        &self,
        record: &FinancialRecord,
    ) -> Result<Decimal, DeductionError> {
        if record.charity.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let rule = self
            .rules
            .itemized_deductions
            .charity
            .as_ref()
            .ok_or(DeductionError::MissingRule(DeductionCategory::Charity))?;

        let cap = record.income * rule.income_limit;
        Ok(round_half_up(record.charity.min(cap)))
    }

    fn student_loan_contribution(
        &self,
        record: &FinancialRecord,
    ) -> Result<Decimal, DeductionError> {
        let Some(interest) = record.student_loan_interest else {
            return Ok(Decimal::ZERO);
        };
        if interest.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let rule = self
            .rules
            .itemized_deductions
            .student_loan_interest
            .as_ref()
            .ok_or(DeductionError::MissingRule(
                DeductionCategory::StudentLoanInterest,
            ))?;

        Ok(round_half_up(interest.min(rule.limit)))
    }

    fn home_office_contribution(
        &self,
        record: &FinancialRecord,
    ) -> Result<Decimal, DeductionError> {
        let Some(expense) = record.home_office_expense else {
            return Ok(Decimal::ZERO);
        };
        if expense.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let rule = self
            .rules
            .itemized_deductions
            .home_office
            .as_ref()
            .ok_or(DeductionError::MissingRule(DeductionCategory::HomeOffice))?;

        Ok(round_half_up((expense * rule.rate).min(rule.limit)))
    }

    fn retirement_contribution(
        &self,
        record: &FinancialRecord,
    ) -> Result<Decimal, DeductionError> {
        let Some(contributions) = record.retirement_contributions else {
            return Ok(Decimal::ZERO);
        };
        if contributions.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let rule = self
            .rules
            .itemized_deductions
            .retirement_contributions
            .as_ref()
            .ok_or(DeductionError::MissingRule(
                DeductionCategory::RetirementContributions,
            ))?;

        Ok(round_half_up(contributions.min(rule.limit)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{
        CharityRule, HomeOfficeRule, ItemizedDeductionRules, MedicalExpenseRule,
        RetirementContributionRule, StudentLoanInterestRule,
    };

    fn test_rules() -> TaxRules {
        TaxRules {
            standard_deduction: dec!(12000),
            tax_brackets: Vec::new(),
            itemized_deductions: ItemizedDeductionRules {
                medical_expenses: Some(MedicalExpenseRule {
                    income_threshold: dec!(0.075),
                }),
                charity: Some(CharityRule {
                    income_limit: dec!(0.50),
                }),
                student_loan_interest: Some(StudentLoanInterestRule {
                    limit: dec!(2500),
                }),
                home_office: Some(HomeOfficeRule {
                    rate: dec!(0.50),
                    limit: dec!(1500),
                }),
                retirement_contributions: Some(RetirementContributionRule {
                    limit: dec!(7000),
                }),
            },
        }
    }

    fn test_record(income: Decimal) -> FinancialRecord {
        FinancialRecord {
            income,
            medical_expenses: dec!(0),
            charity: dec!(0),
            student_loan_interest: None,
            home_office_expense: None,
            retirement_contributions: None,
        }
    }

    // =========================================================================
    // standard deduction tests
    // =========================================================================

    #[test]
    fn resolve_with_no_expenses_yields_standard_deduction() {
        let rules = test_rules();
        let record = test_record(dec!(50000));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.total(), dec!(12000));
        assert_eq!(summary.medical_expenses, dec!(0));
        assert_eq!(summary.charity, dec!(0));
    }

    #[test]
    fn total_is_never_below_standard_deduction() {
        let rules = test_rules();
        let mut record = test_record(dec!(100000));
        record.medical_expenses = dec!(100);
        record.charity = dec!(50);

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert!(summary.total() >= rules.standard_deduction);
    }

    // =========================================================================
    // medical expense tests
    // =========================================================================

    #[test]
    fn medical_below_threshold_contributes_zero() {
        let rules = test_rules();
        let mut record = test_record(dec!(50000));
        record.medical_expenses = dec!(3000); // threshold is 3750

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.medical_expenses, dec!(0));
    }

    #[test]
    fn medical_at_threshold_contributes_zero() {
        let rules = test_rules();
        let mut record = test_record(dec!(50000));
        record.medical_expenses = dec!(3750);

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.medical_expenses, dec!(0));
    }

    #[test]
    fn medical_above_threshold_contributes_excess_only() {
        let rules = test_rules();
        let mut record = test_record(dec!(5000));
        record.medical_expenses = dec!(1000);

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        // Threshold: 5000 × 0.075 = 375; excess: 1000 − 375 = 625.
        assert_eq!(summary.medical_expenses, dec!(625.00));
        assert_eq!(summary.total(), dec!(12625.00));
    }

    #[test]
    fn medical_excess_rounds_half_up() {
        let rules = test_rules();
        let mut record = test_record(dec!(33333));
        record.medical_expenses = dec!(3000);

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        // Threshold: 33333 × 0.075 = 2499.975; excess: 500.025 → 500.03.
        assert_eq!(summary.medical_expenses, dec!(500.03));
    }

    // =========================================================================
    // charity tests
    // =========================================================================

    #[test]
    fn charity_below_cap_is_fully_deductible() {
        let rules = test_rules();
        let mut record = test_record(dec!(20000));
        record.charity = dec!(2000);

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.charity, dec!(2000));
    }

    #[test]
    fn charity_is_capped_at_income_fraction() {
        let rules = test_rules();
        let mut record = test_record(dec!(20000));
        record.charity = dec!(10000);

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        // Cap: 20000 × 0.50 = 10000; min(10000, 10000) = 10000.
        assert_eq!(summary.charity, dec!(10000));
    }

    #[test]
    fn charity_above_cap_is_limited() {
        let rules = test_rules();
        let mut record = test_record(dec!(20000));
        record.charity = dec!(15000);

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.charity, dec!(10000));
    }

    // =========================================================================
    // student loan interest tests
    // =========================================================================

    #[test]
    fn student_loan_below_limit_is_fully_deductible() {
        let rules = test_rules();
        let mut record = test_record(dec!(40000));
        record.student_loan_interest = Some(dec!(1200));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.student_loan_interest, dec!(1200));
    }

    #[test]
    fn student_loan_is_capped_at_limit() {
        let rules = test_rules();
        let mut record = test_record(dec!(40000));
        record.student_loan_interest = Some(dec!(4000));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.student_loan_interest, dec!(2500));
    }

    // =========================================================================
    // home office tests
    // =========================================================================

    #[test]
    fn home_office_applies_rate_below_limit() {
        let rules = test_rules();
        let mut record = test_record(dec!(40000));
        record.home_office_expense = Some(dec!(2000));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        // 2000 × 0.50 = 1000, under the 1500 cap.
        assert_eq!(summary.home_office, dec!(1000.00));
    }

    #[test]
    fn home_office_is_capped_at_limit() {
        let rules = test_rules();
        let mut record = test_record(dec!(40000));
        record.home_office_expense = Some(dec!(5000));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        // 5000 × 0.50 = 2500, capped at 1500.
        assert_eq!(summary.home_office, dec!(1500));
    }

    // =========================================================================
    // retirement contribution tests
    // =========================================================================

    #[test]
    fn retirement_below_limit_is_fully_deductible() {
        let rules = test_rules();
        let mut record = test_record(dec!(80000));
        record.retirement_contributions = Some(dec!(5000));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.retirement_contributions, dec!(5000));
    }

    #[test]
    fn retirement_is_capped_at_limit() {
        let rules = test_rules();
        let mut record = test_record(dec!(80000));
        record.retirement_contributions = Some(dec!(10000));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.retirement_contributions, dec!(7000));
    }

    // =========================================================================
    // combined categories
    // =========================================================================

    #[test]
    fn all_categories_are_additive() {
        let rules = test_rules();
        let record = FinancialRecord {
            income: dec!(100000),
            medical_expenses: dec!(10000),
            charity: dec!(3000),
            student_loan_interest: Some(dec!(4000)),
            home_office_expense: Some(dec!(5000)),
            retirement_contributions: Some(dec!(10000)),
        };

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        // Medical: 10000 − 7500 = 2500. Charity: 3000 (under 50000 cap).
        // Student loan: capped 2500. Home office: capped 1500. Retirement: capped 7000.
        assert_eq!(summary.medical_expenses, dec!(2500.00));
        assert_eq!(summary.charity, dec!(3000));
        assert_eq!(summary.student_loan_interest, dec!(2500));
        assert_eq!(summary.home_office, dec!(1500));
        assert_eq!(summary.retirement_contributions, dec!(7000));
        assert_eq!(summary.total(), dec!(28500.00));
    }

    #[test]
    fn contribution_accessor_matches_fields() {
        let rules = test_rules();
        let mut record = test_record(dec!(40000));
        record.student_loan_interest = Some(dec!(1200));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(
            summary.contribution(DeductionCategory::StudentLoanInterest),
            dec!(1200)
        );
        assert_eq!(summary.contribution(DeductionCategory::Charity), dec!(0));
    }

    // =========================================================================
    // invalid input tests
    // =========================================================================

    #[test]
    fn negative_income_is_rejected() {
        let rules = test_rules();
        let record = test_record(dec!(-100));

        let result = DeductionResolver::new(&rules).resolve(&record);

        assert_eq!(
            result,
            Err(DeductionError::NegativeAmount {
                field: "income",
                amount: dec!(-100),
            })
        );
    }

    #[test]
    fn negative_medical_expense_is_rejected() {
        let rules = test_rules();
        let mut record = test_record(dec!(50000));
        record.medical_expenses = dec!(-1);

        let result = DeductionResolver::new(&rules).resolve(&record);

        assert_eq!(
            result,
            Err(DeductionError::NegativeAmount {
                field: "medical expenses",
                amount: dec!(-1),
            })
        );
    }

    #[test]
    fn negative_optional_field_is_rejected() {
        let rules = test_rules();
        let mut record = test_record(dec!(50000));
        record.retirement_contributions = Some(dec!(-500));

        let result = DeductionResolver::new(&rules).resolve(&record);

        assert_eq!(
            result,
            Err(DeductionError::NegativeAmount {
                field: "retirement contributions",
                amount: dec!(-500),
            })
        );
    }

    // =========================================================================
    // missing rule tests
    // =========================================================================

    #[test]
    fn nonzero_category_without_rule_fails() {
        let rules = TaxRules {
            standard_deduction: dec!(12000),
            tax_brackets: Vec::new(),
            itemized_deductions: ItemizedDeductionRules::default(),
        };
        let mut record = test_record(dec!(50000));
        record.medical_expenses = dec!(1000);

        let result = DeductionResolver::new(&rules).resolve(&record);

        assert_eq!(
            result,
            Err(DeductionError::MissingRule(
                DeductionCategory::MedicalExpenses
            ))
        );
    }

    #[test]
    fn nonzero_optional_category_without_rule_fails() {
        let rules = TaxRules {
            standard_deduction: dec!(12000),
            tax_brackets: Vec::new(),
            itemized_deductions: ItemizedDeductionRules::default(),
        };
        let mut record = test_record(dec!(50000));
        record.retirement_contributions = Some(dec!(5000));

        let result = DeductionResolver::new(&rules).resolve(&record);

        assert_eq!(
            result,
            Err(DeductionError::MissingRule(
                DeductionCategory::RetirementContributions
            ))
        );
    }

    #[test]
    fn zero_category_without_rule_is_fine() {
        let rules = TaxRules {
            standard_deduction: dec!(12000),
            tax_brackets: Vec::new(),
            itemized_deductions: ItemizedDeductionRules::default(),
        };
        let mut record = test_record(dec!(50000));
        record.student_loan_interest = Some(dec!(0));

        let summary = DeductionResolver::new(&rules).resolve(&record).unwrap();

        assert_eq!(summary.total(), dec!(12000));
    }
}
