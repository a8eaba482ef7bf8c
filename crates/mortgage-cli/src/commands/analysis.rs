use clap::Args;
use serde_json::Value;

use mortgage_core::analysis::{self, MortgageInput};

use crate::input;

/// Arguments for a full mortgage analysis
///
/// Every flag has the same default as an empty scenario file, so `mca analyze`
/// with no arguments runs the reference starter-home scenario.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AnalyzeArgs {
    /// Purchase price of the home (e.g. 300000)
    #[arg(long)]
    pub home_price: Option<f64>,

    /// Cash paid up front (e.g. 60000)
    #[arg(long)]
    pub down_payment: Option<f64>,

    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<f64>,

    /// Loan term in years
    #[arg(long)]
    pub loan_term_years: Option<u32>,

    /// Annual property tax bill
    #[arg(long)]
    pub property_tax: Option<f64>,

    /// Annual homeowner's insurance premium
    #[arg(long)]
    pub home_insurance: Option<f64>,

    /// Private mortgage insurance per month
    #[arg(long)]
    pub pmi: Option<f64>,

    /// Additional principal paid each month
    #[arg(long)]
    pub extra_payment: Option<f64>,

    /// Gross annual household income
    #[arg(long)]
    pub annual_income: Option<f64>,

    /// Other monthly debt service (car loans, student loans, cards)
    #[arg(long)]
    pub monthly_debts: Option<f64>,

    /// Keep all schedule years even when extra payments retire the loan early
    #[arg(long)]
    pub full_standard_schedule: bool,

    /// Path to a JSON or YAML scenario file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mortgage_input: MortgageInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        let defaults = MortgageInput::default();
        MortgageInput {
            home_price: args.home_price.unwrap_or(defaults.home_price),
            down_payment: args.down_payment.unwrap_or(defaults.down_payment),
            interest_rate: args.interest_rate.unwrap_or(defaults.interest_rate),
            loan_term_years: args.loan_term_years.unwrap_or(defaults.loan_term_years),
            property_tax_annual: args.property_tax.unwrap_or(defaults.property_tax_annual),
            home_insurance_annual: args
                .home_insurance
                .unwrap_or(defaults.home_insurance_annual),
            pmi_monthly: args.pmi.unwrap_or(0.0),
            extra_payment_monthly: args.extra_payment.unwrap_or(0.0),
            annual_income: args.annual_income.unwrap_or(defaults.annual_income),
            monthly_debts: args.monthly_debts.unwrap_or(defaults.monthly_debts),
            full_standard_schedule: args.full_standard_schedule,
        }
    };

    analysis::validate(&mortgage_input)?;
    let output = analysis::analyze_mortgage(&mortgage_input)?;
    Ok(serde_json::to_value(output)?)
}
