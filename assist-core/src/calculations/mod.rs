//! Deduction and tax calculation engine.
//!
//! The engine is two pure components evaluated in sequence for a single
//! financial record:
//!
//! 1. [`DeductionResolver`] turns declared expenses into a total deduction
//!    amount under the per-category rules.
//! 2. [`BracketTaxCalculator`] applies the progressive marginal-rate schedule
//!    to the remaining taxable income.
//!
//! [`TaxAssessor`] composes the two, clamping taxable income at zero in
//! between. All three are stateless and synchronous; callers own the rule
//! set's lifecycle.

pub mod assessor;
pub mod common;
pub mod deductions;
pub mod schedule;

pub use assessor::{AssessmentError, TaxAssessment, TaxAssessor};
pub use deductions::{DeductionError, DeductionResolver, DeductionSummary};
pub use schedule::{BracketTaxCalculator, ScheduleError};
