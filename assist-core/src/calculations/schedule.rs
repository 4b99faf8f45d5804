//! Progressive tax calculation over an ordered bracket schedule.
//!
//! Each bracket taxes only the slice of income that falls inside it, so the
//! total is a sum of `slice × rate` terms. A value sitting exactly on a
//! bracket boundary belongs to the higher bracket (the comparison against the
//! bracket floor is strictly greater-than). Rounding is applied half-up to
//! two decimal places once, to the final sum, never per bracket.
//!
//! The schedule must tile `[0, ∞)`: ascending, gapless, non-overlapping,
//! with exactly one unbounded bracket in last position. [`validate`] checks
//! this before any calculation.
//!
//! [`validate`]: BracketTaxCalculator::validate
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use assist_core::TaxBracket;
//! use assist_core::calculations::BracketTaxCalculator;
//!
//! let brackets = vec![
//!     TaxBracket { min_income: dec!(0), max_income: Some(dec!(10000)), rate: dec!(0.10) },
//!     TaxBracket { min_income: dec!(10000), max_income: Some(dec!(40000)), rate: dec!(0.12) },
//!     TaxBracket { min_income: dec!(40000), max_income: None, rate: dec!(0.22) },
//! ];
//!
//! let calculator = BracketTaxCalculator::new(&brackets);
//!
//! // 10000 × 0.10 + 28000 × 0.12 = 4360
//! assert_eq!(calculator.calculate(dec!(38000)).unwrap(), dec!(4360.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxBracket;
use crate::calculations::common::round_half_up;

/// Ways a bracket schedule can be malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No brackets at all.
    #[error("no tax brackets provided")]
    Empty,

    /// The first bracket's floor is not zero, leaving low incomes uncovered.
    #[error("first bracket must start at 0, got {0}")]
    DoesNotStartAtZero(Decimal),

    /// A bracket's ceiling is not above its floor.
    #[error("bracket starting at {min} has ceiling {max} at or below its floor")]
    EmptyBracket { min: Decimal, max: Decimal },

    /// A bracket rate is negative.
    #[error("bracket rate must be non-negative, got {0}")]
    NegativeRate(Decimal),

    /// An unbounded bracket appears before the last position. Also the
    /// failure mode for a schedule with more than one unbounded bracket.
    #[error("unbounded bracket starting at {0} is not the last bracket")]
    UnboundedNotLast(Decimal),

    /// Adjacent brackets do not meet: a gap, an overlap, or mis-ordering.
    #[error("bracket ending at {prev_max} is followed by bracket starting at {next_min}")]
    NotContiguous {
        prev_max: Decimal,
        next_min: Decimal,
    },

    /// The last bracket has a finite ceiling, leaving high incomes uncovered.
    #[error("last bracket must be unbounded, got ceiling {0}")]
    BoundedTop(Decimal),
}

/// Applies a progressive marginal-rate schedule to a taxable income amount.
#[derive(Debug, Clone)]
pub struct BracketTaxCalculator<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketTaxCalculator<'a> {
    /// Creates a calculator over the given schedule. The schedule is checked
    /// by [`calculate`](Self::calculate), not here.
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Checks that the schedule tiles `[0, ∞)` with no gaps or overlaps and
    /// exactly one unbounded bracket, in last position.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let Some(first) = self.brackets.first() else {
            return Err(ScheduleError::Empty);
        };
        if !first.min_income.is_zero() {
            return Err(ScheduleError::DoesNotStartAtZero(first.min_income));
        }

        for bracket in self.brackets {
            if bracket.rate < Decimal::ZERO {
                return Err(ScheduleError::NegativeRate(bracket.rate));
            }
            if let Some(max) = bracket.max_income {
                if max <= bracket.min_income {
                    return Err(ScheduleError::EmptyBracket {
                        min: bracket.min_income,
                        max,
                    });
                }
            }
        }

        for pair in self.brackets.windows(2) {
            let Some(prev_max) = pair[0].max_income else {
                return Err(ScheduleError::UnboundedNotLast(pair[0].min_income));
            };
            if pair[1].min_income != prev_max {
                return Err(ScheduleError::NotContiguous {
                    prev_max,
                    next_min: pair[1].min_income,
                });
            }
        }

        // first() above proves the slice is non-empty
        let last = self.brackets.last().unwrap();
        if let Some(max) = last.max_income {
            return Err(ScheduleError::BoundedTop(max));
        }

        Ok(())
    }

    /// Calculates the tax owed on `taxable_income`.
    ///
    /// Zero or negative income owes zero tax. The result is rounded half-up
    /// to two decimal places at the final sum only.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when the schedule fails [`validate`](Self::validate).
    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, ScheduleError> {
        self.validate()?;

        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let mut tax = Decimal::ZERO;
        for bracket in self.brackets {
            if taxable_income <= bracket.min_income {
                // Brackets ascend, so nothing further can apply.
                break;
            }
            let ceiling = match bracket.max_income {
                Some(max) => taxable_income.min(max),
                None => taxable_income,
            };
            tax += (ceiling - bracket.min_income) * bracket.rate;
        }

        Ok(round_half_up(tax))
    }
}
