use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ItemizedDeductionRules, TaxBracket};

/// The complete rule set for one tax year.
///
/// Loaded once from configuration and immutable for the duration of a
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRules {
    pub standard_deduction: Decimal,
    pub tax_brackets: Vec<TaxBracket>,
    #[serde(default)]
    pub itemized_deductions: ItemizedDeductionRules,
}
