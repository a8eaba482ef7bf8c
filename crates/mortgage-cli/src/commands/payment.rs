use clap::Args;
use serde_json::{json, Value};

use mortgage_core::payment;

/// Arguments for a monthly payment breakdown
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PaymentArgs {
    /// Amount financed (e.g. 240000)
    #[arg(long)]
    pub loan_amount: Option<f64>,

    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<f64>,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    pub loan_term_years: u32,

    /// Annual property tax bill
    #[arg(long, default_value_t = 0.0)]
    pub property_tax: f64,

    /// Annual homeowner's insurance premium
    #[arg(long, default_value_t = 0.0)]
    pub home_insurance: f64,

    /// Private mortgage insurance per month
    #[arg(long, default_value_t = 0.0)]
    pub pmi: f64,

    /// Additional principal paid each month
    #[arg(long, default_value_t = 0.0)]
    pub extra_payment: f64,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_amount = args.loan_amount.ok_or("--loan-amount is required")?;
    let interest_rate = args.interest_rate.ok_or("--interest-rate is required")?;

    let monthly_rate = payment::monthly_rate(interest_rate);
    let number_of_payments = args.loan_term_years.saturating_mul(12);
    let monthly_principal_interest =
        payment::monthly_payment(loan_amount, monthly_rate, number_of_payments);
    let monthly_interest = loan_amount * monthly_rate;
    let total_monthly_payment = payment::total_monthly_payment(
        monthly_principal_interest,
        args.property_tax,
        args.home_insurance,
        args.pmi,
        args.extra_payment,
    );

    Ok(json!({
        "loan_amount": loan_amount,
        "monthly_principal_interest": monthly_principal_interest,
        "monthly_principal": monthly_principal_interest - monthly_interest,
        "monthly_interest": monthly_interest,
        "monthly_property_tax": args.property_tax / 12.0,
        "monthly_home_insurance": args.home_insurance / 12.0,
        "pmi_monthly": args.pmi,
        "extra_payment_monthly": args.extra_payment,
        "total_monthly_payment": total_monthly_payment,
    }))
}
