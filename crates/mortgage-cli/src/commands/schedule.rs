use clap::Args;
use serde_json::Value;

use mortgage_core::payment;
use mortgage_core::schedule;

/// Arguments for an amortization schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Amount financed (e.g. 240000)
    #[arg(long)]
    pub loan_amount: Option<f64>,

    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<f64>,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    pub loan_term_years: u32,

    /// Additional principal paid each month
    #[arg(long, default_value_t = 0.0)]
    pub extra_payment: f64,

    /// Keep all schedule years even when extra payments retire the loan early
    #[arg(long)]
    pub full_standard_schedule: bool,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_amount = args.loan_amount.ok_or("--loan-amount is required")?;
    let interest_rate = args.interest_rate.ok_or("--interest-rate is required")?;

    let monthly_rate = payment::monthly_rate(interest_rate);
    let number_of_payments = args.loan_term_years.saturating_mul(12);
    let monthly_payment = payment::monthly_payment(loan_amount, monthly_rate, number_of_payments);

    let schedule = schedule::build_schedule(
        loan_amount,
        monthly_rate,
        number_of_payments,
        monthly_payment,
        args.extra_payment,
        args.full_standard_schedule,
    );

    // Emit the rows as a bare array so the table and CSV formatters render
    // one line per year.
    Ok(serde_json::to_value(schedule.years)?)
}
