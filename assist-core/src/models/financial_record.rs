use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declared income and expenses for one assessment.
///
/// Constructed fresh per calculation and read-only while it runs. Medical
/// expenses and charity are always reported (zero when the filer has none);
/// the remaining categories are optional fields the filer may omit entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub income: Decimal,
    #[serde(default)]
    pub medical_expenses: Decimal,
    #[serde(default)]
    pub charity: Decimal,
    pub student_loan_interest: Option<Decimal>,
    pub home_office_expense: Option<Decimal>,
    pub retirement_contributions: Option<Decimal>,
}
