use clap::Args;
use serde_json::{json, Value};

use mortgage_core::affordability::{self, DEBT_TO_INCOME_GUIDELINE, HOUSING_RATIO_GUIDELINE};

/// Arguments for an affordability check
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AffordabilityArgs {
    /// All-in monthly housing payment (e.g. 1916.96)
    #[arg(long)]
    pub monthly_payment: Option<f64>,

    /// Other monthly debt service
    #[arg(long, default_value_t = 0.0)]
    pub monthly_debts: f64,

    /// Gross annual household income (e.g. 100000)
    #[arg(long)]
    pub annual_income: Option<f64>,
}

pub fn run_affordability(args: AffordabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let monthly_payment = args.monthly_payment.ok_or("--monthly-payment is required")?;
    let annual_income = args.annual_income.ok_or("--annual-income is required")?;

    let housing_ratio = affordability::housing_ratio(monthly_payment, annual_income);
    let debt_to_income_ratio =
        affordability::debt_to_income_ratio(monthly_payment, args.monthly_debts, annual_income);

    Ok(json!({
        "monthly_payment": monthly_payment,
        "housing_ratio": housing_ratio,
        "debt_to_income_ratio": debt_to_income_ratio,
        "housing_guideline": HOUSING_RATIO_GUIDELINE,
        "debt_to_income_guideline": DEBT_TO_INCOME_GUIDELINE,
        "within_housing_guideline": housing_ratio <= HOUSING_RATIO_GUIDELINE,
        "within_debt_to_income_guideline": debt_to_income_ratio <= DEBT_TO_INCOME_GUIDELINE,
    }))
}
