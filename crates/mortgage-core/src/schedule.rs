//! Amortization schedule construction.
//!
//! Walks the loan month by month and aggregates into yearly rows. Two balance
//! tracks run side by side: the standard track pays the level payment only,
//! the extra track adds `extra_payment_monthly` of principal each month and is
//! floored at zero once the loan is overpaid.
//!
//! By default the walk stops as soon as the extra track reaches zero, so the
//! last row may cover a partial year. With `full_standard_schedule` set, the
//! walk always covers the full term: the extra track is frozen at payoff and
//! the standard columns come out identical to a run without any extra payment.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One calendar year of the amortization schedule.
///
/// The final row of a truncated schedule may aggregate fewer than twelve
/// months, either because the term is not a whole number of years or because
/// extra payments retired the loan mid-year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmortizationYear {
    /// 1-based year index within the loan term
    pub year: u32,
    /// Principal retired this year on the standard track
    pub principal_paid: f64,
    /// Interest charged this year on the standard track
    pub interest_paid: f64,
    /// Sum of principal and interest paid this year
    pub total_payment: f64,
    /// Standard-track balance at year end, floored at zero
    pub remaining_balance: f64,
    /// Total paid this year on the extra-payment track
    pub total_with_extra: f64,
    /// Extra-payment-track balance at year end, floored at zero
    pub remaining_balance_with_extra: f64,
}

/// Complete output of the schedule walk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmortizationSchedule {
    /// Yearly rows in ascending year order
    pub years: Vec<AmortizationYear>,
    /// Interest accrued on the standard track over the months walked
    pub total_interest_paid: f64,
    /// Month (1-based) in which the extra-payment track reached zero
    pub extra_payoff_month: Option<u32>,
}

// ---------------------------------------------------------------------------
// Schedule walk
// ---------------------------------------------------------------------------

/// Build the yearly amortization schedule for a fixed-rate loan.
///
/// `monthly_principal_interest` is the level payment from
/// [`crate::payment::monthly_payment`]; it is taken as given rather than
/// recomputed so callers can build schedules for hypothetical payments.
///
/// The function is total: non-finite inputs flow through the IEEE-754
/// arithmetic unchanged, and a loan that is already non-positive retires on
/// the extra track in the first month.
pub fn build_schedule(
    loan_amount: f64,
    monthly_rate: f64,
    number_of_payments: u32,
    monthly_principal_interest: f64,
    extra_payment_monthly: f64,
    full_standard_schedule: bool,
) -> AmortizationSchedule {
    let mut years = Vec::with_capacity((number_of_payments / 12 + 1) as usize);

    let mut balance = loan_amount;
    let mut balance_with_extra = loan_amount;
    let mut total_interest_paid = 0.0;
    let mut extra_payoff_month: Option<u32> = None;

    let mut yearly_principal = 0.0;
    let mut yearly_interest = 0.0;
    let mut yearly_extra = 0.0;
    let mut yearly_with_extra = 0.0;

    for month in 1..=number_of_payments {
        // Standard track: the running balance is never floored, only the
        // emitted row value is. A NaN comparison is false, so NaN balances
        // pass through the floor untouched.
        let interest = balance * monthly_rate;
        let principal = monthly_principal_interest - interest;
        balance -= principal;
        total_interest_paid += interest;
        yearly_principal += principal;
        yearly_interest += interest;

        // Extra track: frozen once the payoff month is latched.
        if extra_payoff_month.is_none() {
            let interest_with_extra = balance_with_extra * monthly_rate;
            let principal_with_extra =
                monthly_principal_interest - interest_with_extra + extra_payment_monthly;
            balance_with_extra = floor_at_zero(balance_with_extra - principal_with_extra);
            yearly_extra += extra_payment_monthly;
            yearly_with_extra += monthly_principal_interest + extra_payment_monthly;
            if balance_with_extra == 0.0 {
                extra_payoff_month = Some(month);
            }
        }

        let at_year_end = month.is_multiple_of(12);
        let at_term_end = month == number_of_payments;
        let at_early_payoff = !full_standard_schedule && balance_with_extra == 0.0;

        if at_year_end || at_term_end || at_early_payoff {
            years.push(AmortizationYear {
                year: month.div_ceil(12),
                principal_paid: yearly_principal,
                interest_paid: yearly_interest,
                total_payment: yearly_principal + yearly_interest,
                remaining_balance: floor_at_zero(balance),
                total_with_extra: if full_standard_schedule {
                    yearly_with_extra
                } else {
                    yearly_principal + yearly_interest + yearly_extra
                },
                remaining_balance_with_extra: balance_with_extra,
            });
            yearly_principal = 0.0;
            yearly_interest = 0.0;
            yearly_extra = 0.0;
            yearly_with_extra = 0.0;
        }

        if !full_standard_schedule && balance_with_extra == 0.0 && !years.is_empty() {
            break;
        }
    }

    AmortizationSchedule {
        years,
        total_interest_paid,
        extra_payoff_month,
    }
}

/// Clamp a balance at zero without disturbing NaN.
///
/// `f64::max(0.0, NaN)` would return 0.0 and silently repair a poisoned
/// balance; the comparison form keeps NaN flowing through the schedule.
fn floor_at_zero(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
