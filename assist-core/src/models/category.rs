use std::fmt;

use serde::{Deserialize, Serialize};

/// The itemizable deduction categories a financial record can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionCategory {
    MedicalExpenses,
    Charity,
    StudentLoanInterest,
    HomeOffice,
    RetirementContributions,
}

impl DeductionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MedicalExpenses => "medical expenses",
            Self::Charity => "charity",
            Self::StudentLoanInterest => "student loan interest",
            Self::HomeOffice => "home office",
            Self::RetirementContributions => "retirement contributions",
        }
    }
}

impl fmt::Display for DeductionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
