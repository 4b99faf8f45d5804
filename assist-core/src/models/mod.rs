mod category;
mod financial_record;
mod itemized;
mod tax_bracket;
mod tax_rules;

pub use category::DeductionCategory;
pub use financial_record::FinancialRecord;
pub use itemized::{
    CharityRule, HomeOfficeRule, ItemizedDeductionRules, MedicalExpenseRule,
    RetirementContributionRule, StudentLoanInterestRule,
};
pub use tax_bracket::TaxBracket;
pub use tax_rules::TaxRules;
