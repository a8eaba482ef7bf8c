use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_core::analysis::{self, MortgageInput};
use mortgage_core::{payment, schedule};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Full mortgage analysis. Takes the scenario as a JSON string (missing
/// fields fall back to their defaults) and returns the computation envelope
/// as JSON.
#[napi]
pub fn analyze_mortgage(input_json: String) -> NapiResult<String> {
    let input: MortgageInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = analysis::analyze_mortgage(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Scalar helpers
// ---------------------------------------------------------------------------

/// Level monthly principal-and-interest payment for a fixed-rate loan.
#[napi]
pub fn monthly_payment(loan_amount: f64, interest_rate: f64, loan_term_years: u32) -> f64 {
    payment::monthly_payment(
        loan_amount,
        payment::monthly_rate(interest_rate),
        loan_term_years.saturating_mul(12),
    )
}

/// Yearly amortization schedule rows as a JSON array.
#[napi]
pub fn amortization_schedule(
    loan_amount: f64,
    interest_rate: f64,
    loan_term_years: u32,
    extra_payment_monthly: f64,
    full_standard_schedule: bool,
) -> NapiResult<String> {
    let monthly_rate = payment::monthly_rate(interest_rate);
    let number_of_payments = loan_term_years.saturating_mul(12);
    let monthly_payment = payment::monthly_payment(loan_amount, monthly_rate, number_of_payments);

    let schedule = schedule::build_schedule(
        loan_amount,
        monthly_rate,
        number_of_payments,
        monthly_payment,
        extra_payment_monthly,
        full_standard_schedule,
    );
    serde_json::to_string(&schedule.years).map_err(to_napi_error)
}
