//! Tax rule configuration loading.
//!
//! Rules live in a TOML resource keyed by tax year, each year mapping to one
//! full [`TaxRules`] object:
//!
//! ```toml
//! [years.2025]
//! standard_deduction = "15000"
//!
//! [years.2025.itemized_deductions.medical_expenses]
//! income_threshold = "0.075"
//!
//! [[years.2025.tax_brackets]]
//! min_income = "0"
//! max_income = "11925"
//! rate = "0.10"
//! ```
//!
//! Monetary values are written as strings so they parse into `Decimal`
//! exactly, without a detour through floating point. The last bracket of a
//! year omits `max_income`. The loader only shapes data; bracket schedule
//! validation stays with the calculator.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use assist_core::TaxRules;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a rules file.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("cannot read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("tax year {0} not found in the rules file")]
    TaxYearNotFound(i32),
}

impl From<toml::de::Error> for RulesError {
    fn from(err: toml::de::Error) -> Self {
        RulesError::TomlParse(err.to_string())
    }
}

/// A parsed rules resource: one [`TaxRules`] object per tax year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RulesFile {
    years: BTreeMap<String, TaxRules>,
}

impl RulesFile {
    /// Parses a rules resource from any reader.
    pub fn parse<R: Read>(mut reader: R) -> Result<Self, RulesError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Reads and parses a rules file from disk.
    pub fn from_path(path: &Path) -> Result<Self, RulesError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// The rule set for one tax year.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::TaxYearNotFound`] when the file has no entry
    /// for `year`.
    pub fn rules_for_year(&self, year: i32) -> Result<&TaxRules, RulesError> {
        self.years
            .get(&year.to_string())
            .ok_or(RulesError::TaxYearNotFound(year))
    }

    /// Every year the file defines, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .years
            .keys()
            .filter_map(|key| key.parse().ok())
            .collect();
        years.sort_unstable();
        years
    }
}
