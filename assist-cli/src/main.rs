use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use assist_core::advice::{DeductionAdvisor, HeadroomAdvisor, SavingsTip};
use assist_core::calculations::{TaxAssessment, TaxAssessor};
use assist_core::{DeductionCategory, FinancialRecord};
use assist_rules::RulesFile;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal tax assistant.
///
/// Loads the tax rules for the requested year, resolves deductions for the
/// declared income and expenses, and prints taxable income and tax owed.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to the TOML tax rules file.
    #[arg(long, default_value = "rules.toml")]
    rules: PathBuf,

    /// Tax year to assess against.
    #[arg(long, default_value = "2025")]
    year: i32,

    /// Declared annual income.
    #[arg(long)]
    income: Decimal,

    /// Medical expenses for the year.
    #[arg(long, default_value = "0")]
    medical: Decimal,

    /// Charitable donations for the year.
    #[arg(long, default_value = "0")]
    charity: Decimal,

    /// Student loan interest paid.
    #[arg(long)]
    student_loan: Option<Decimal>,

    /// Home office expenses.
    #[arg(long)]
    home_office: Option<Decimal>,

    /// Retirement contributions.
    #[arg(long)]
    retirement: Option<Decimal>,

    /// Also print savings tips for unused deduction headroom.
    #[arg(long)]
    tips: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── output ──────────────────────────────────────────────────────────────────

fn currency(amount: Decimal) -> String {
    format!("${amount:.2}")
}

fn print_line(label: &str, amount: Decimal) {
    println!("{label:<28}{:>14}", currency(amount));
}

fn print_assessment(assessment: &TaxAssessment) {
    let deductions = &assessment.deductions;

    println!("Deductions");
    print_line("  standard deduction", deductions.standard_deduction);
    for category in [
        DeductionCategory::MedicalExpenses,
        DeductionCategory::Charity,
        DeductionCategory::StudentLoanInterest,
        DeductionCategory::HomeOffice,
        DeductionCategory::RetirementContributions,
    ] {
        let amount = deductions.contribution(category);
        if !amount.is_zero() {
            print_line(&format!("  {category}"), amount);
        }
    }
    print_line("  total", deductions.total());
    println!();
    print_line("Taxable income", assessment.taxable_income);
    print_line("Tax owed", assessment.tax_owed);
}

fn print_tips(tips: &[SavingsTip]) {
    println!();
    if tips.is_empty() {
        println!("No savings tips for this record.");
        return;
    }
    println!("Savings tips");
    for tip in tips {
        println!("  - {}", tip.message);
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let rules_file = RulesFile::from_path(&cli.rules)?;
    debug!(years = ?rules_file.available_years(), "rules file loaded");
    let rules = rules_file.rules_for_year(cli.year)?;

    let record = FinancialRecord {
        income: cli.income,
        medical_expenses: cli.medical,
        charity: cli.charity,
        student_loan_interest: cli.student_loan,
        home_office_expense: cli.home_office,
        retirement_contributions: cli.retirement,
    };

    let assessment = TaxAssessor::new(rules).assess(&record)?;
    print_assessment(&assessment);

    if cli.tips {
        print_tips(&HeadroomAdvisor.advise(&record, rules));
    }

    Ok(())
}
