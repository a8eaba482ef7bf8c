//! Fixed-rate loan payment arithmetic.
//!
//! Pure functions over `f64`. Degenerate inputs (zero payment count, zero
//! loan) produce degenerate IEEE-754 values rather than errors; callers decide
//! how to surface them.

// ---------------------------------------------------------------------------
// Rate conversion
// ---------------------------------------------------------------------------

/// Convert a nominal annual percentage rate to a monthly rate.
/// An input of 6.5 means 6.5% per year.
pub fn monthly_rate(annual_percentage_rate: f64) -> f64 {
    annual_percentage_rate / 100.0 / 12.0
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

/// Level monthly payment for a fully amortising fixed-rate loan.
///
/// Uses the closed-form annuity formula. A zero monthly rate degenerates to
/// straight-line repayment (`loan_amount / number_of_payments`); a zero
/// payment count yields a non-finite value.
pub fn monthly_payment(loan_amount: f64, monthly_rate: f64, number_of_payments: u32) -> f64 {
    if monthly_rate == 0.0 {
        return loan_amount / f64::from(number_of_payments);
    }
    let growth = (1.0 + monthly_rate).powf(f64::from(number_of_payments));
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}

/// Full monthly housing cost: base payment plus monthly escrow portions of the
/// annual tax and insurance bills, PMI, and any extra principal payment.
pub fn total_monthly_payment(
    monthly_principal_interest: f64,
    property_tax_annual: f64,
    home_insurance_annual: f64,
    pmi_monthly: f64,
    extra_payment_monthly: f64,
) -> f64 {
    monthly_principal_interest
        + property_tax_annual / 12.0
        + home_insurance_annual / 12.0
        + pmi_monthly
        + extra_payment_monthly
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
