//! Whole-loan mortgage analysis.
//!
//! Ties the payment, schedule, and affordability pieces together into a single
//! entry point. [`analyze_mortgage`] is a total function: it never rejects an
//! input, and degenerate values (zero term, zero income, non-finite prices)
//! flow through the IEEE-754 arithmetic and surface as non-finite outputs plus
//! human-readable warnings. Callers that want form-style input checking run
//! [`validate`] first.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::affordability::{
    self, DEBT_TO_INCOME_GUIDELINE, HOUSING_RATIO_GUIDELINE, PMI_DOWN_PAYMENT_THRESHOLD,
};
use crate::payment;
use crate::schedule::{self, AmortizationYear};
use crate::types::{with_metadata, ComputationOutput};
use crate::{MortgageError, MortgageResult};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Parameters of the loan and household under analysis.
///
/// Every field carries a serde default describing a typical starter-home
/// purchase, so `{}` deserializes to a complete, meaningful scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MortgageInput {
    /// Purchase price of the home
    #[serde(default = "default_home_price")]
    pub home_price: f64,
    /// Cash paid up front
    #[serde(default = "default_down_payment")]
    pub down_payment: f64,
    /// Nominal annual interest rate in percent (6.5 means 6.5%)
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,
    /// Loan term in years
    #[serde(default = "default_loan_term_years")]
    pub loan_term_years: u32,
    /// Annual property tax bill
    #[serde(default = "default_property_tax")]
    pub property_tax_annual: f64,
    /// Annual homeowner's insurance premium
    #[serde(default = "default_home_insurance")]
    pub home_insurance_annual: f64,
    /// Private mortgage insurance per month
    #[serde(default)]
    pub pmi_monthly: f64,
    /// Additional principal paid each month
    #[serde(default)]
    pub extra_payment_monthly: f64,
    /// Gross annual household income
    #[serde(default = "default_annual_income")]
    pub annual_income: f64,
    /// Other monthly debt service (car loans, student loans, cards)
    #[serde(default = "default_monthly_debts")]
    pub monthly_debts: f64,
    /// Emit the full standard schedule even when extra payments retire the
    /// loan early, instead of truncating at the payoff year
    #[serde(default)]
    pub full_standard_schedule: bool,
}

fn default_home_price() -> f64 {
    300_000.0
}

fn default_down_payment() -> f64 {
    60_000.0
}

fn default_interest_rate() -> f64 {
    6.5
}

fn default_loan_term_years() -> u32 {
    30
}

fn default_property_tax() -> f64 {
    3600.0
}

fn default_home_insurance() -> f64 {
    1200.0
}

fn default_annual_income() -> f64 {
    100_000.0
}

fn default_monthly_debts() -> f64 {
    500.0
}

impl Default for MortgageInput {
    fn default() -> Self {
        MortgageInput {
            home_price: default_home_price(),
            down_payment: default_down_payment(),
            interest_rate: default_interest_rate(),
            loan_term_years: default_loan_term_years(),
            property_tax_annual: default_property_tax(),
            home_insurance_annual: default_home_insurance(),
            pmi_monthly: 0.0,
            extra_payment_monthly: 0.0,
            annual_income: default_annual_income(),
            monthly_debts: default_monthly_debts(),
            full_standard_schedule: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Complete analysis of one mortgage scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MortgageOutput {
    /// Amount financed: home price minus down payment
    pub loan_amount: f64,
    /// Down payment as a percentage of the purchase price
    pub down_payment_percent: f64,
    /// Level monthly principal-and-interest payment
    pub monthly_principal_interest: f64,
    /// Principal portion of the first month's payment
    pub monthly_principal: f64,
    /// Interest portion of the first month's payment
    pub monthly_interest: f64,
    /// Monthly escrow portion of the property tax bill
    pub monthly_property_tax: f64,
    /// Monthly escrow portion of the insurance premium
    pub monthly_home_insurance: f64,
    /// All-in monthly housing cost including PMI and extra principal
    pub total_monthly_payment: f64,
    /// Interest accrued over the months covered by the schedule
    pub total_interest_paid: f64,
    /// Front-end affordability ratio in percent
    pub housing_ratio: f64,
    /// Back-end affordability ratio in percent
    pub debt_to_income_ratio: f64,
    /// Early-payoff comparison, present when extra payments retire the loan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payoff: Option<PayoffComparison>,
    /// Yearly amortization rows
    pub amortization_schedule: Vec<AmortizationYear>,
}

/// How much sooner extra monthly payments retire the loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoffComparison {
    /// 1-based month in which the balance reaches zero
    pub payoff_month: u32,
    /// Calendar year of payoff within the loan term
    pub payoff_year: u32,
    /// Whole years shaved off the original term
    pub years_saved: u32,
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Analyze a fixed-rate mortgage scenario end to end.
///
/// Computes the level payment, the first-month principal/interest split, the
/// all-in monthly cost, the yearly amortization schedule with its
/// extra-payment track, the front-end and back-end affordability ratios, and
/// an early-payoff comparison when extra payments retire the loan ahead of
/// term.
///
/// Underwriting guideline breaches and degenerate inputs are reported through
/// the envelope's `warnings`, never as errors.
pub fn analyze_mortgage(
    input: &MortgageInput,
) -> MortgageResult<ComputationOutput<MortgageOutput>> {
    let start = Instant::now();

    let loan_amount = input.home_price - input.down_payment;
    let monthly_rate = payment::monthly_rate(input.interest_rate);
    let number_of_payments = input.loan_term_years.saturating_mul(12);

    let monthly_principal_interest =
        payment::monthly_payment(loan_amount, monthly_rate, number_of_payments);
    let monthly_interest = loan_amount * monthly_rate;
    let monthly_principal = monthly_principal_interest - monthly_interest;

    let total_monthly_payment = payment::total_monthly_payment(
        monthly_principal_interest,
        input.property_tax_annual,
        input.home_insurance_annual,
        input.pmi_monthly,
        input.extra_payment_monthly,
    );

    let schedule = schedule::build_schedule(
        loan_amount,
        monthly_rate,
        number_of_payments,
        monthly_principal_interest,
        input.extra_payment_monthly,
        input.full_standard_schedule,
    );

    let down_payment_percent =
        affordability::down_payment_percent(input.down_payment, input.home_price);
    let housing_ratio = affordability::housing_ratio(total_monthly_payment, input.annual_income);
    let debt_to_income_ratio = affordability::debt_to_income_ratio(
        total_monthly_payment,
        input.monthly_debts,
        input.annual_income,
    );

    // The comparison only makes sense when extra payments actually beat the
    // standard track. A payoff latched at the final month with no extra
    // payment is just the loan ending on time.
    let payoff = match schedule.extra_payoff_month {
        Some(month) if input.extra_payment_monthly > 0.0 => {
            let payoff_year = month.div_ceil(12);
            Some(PayoffComparison {
                payoff_month: month,
                payoff_year,
                years_saved: input.loan_term_years.saturating_sub(payoff_year),
            })
        }
        _ => None,
    };

    let mut warnings = Vec::new();
    if input.loan_term_years == 0 {
        warnings.push("Loan term is zero; payment and payoff figures are not finite".to_string());
    }
    if input.interest_rate < 0.0 {
        warnings.push(format!(
            "Interest rate is negative ({}%)",
            input.interest_rate
        ));
    }
    if input.down_payment > input.home_price {
        warnings.push(format!(
            "Down payment exceeds home price; loan amount is {:.2}",
            loan_amount
        ));
    } else if down_payment_percent < PMI_DOWN_PAYMENT_THRESHOLD {
        warnings.push(format!(
            "Down payment is {:.1}% of the purchase price; below {}% lenders typically require PMI",
            down_payment_percent, PMI_DOWN_PAYMENT_THRESHOLD
        ));
    }
    if input.annual_income == 0.0 {
        warnings.push("Annual income is zero; affordability ratios are not finite".to_string());
    } else {
        if housing_ratio > HOUSING_RATIO_GUIDELINE {
            warnings.push(format!(
                "Housing ratio {:.1}% exceeds the {}% guideline",
                housing_ratio, HOUSING_RATIO_GUIDELINE
            ));
        }
        if debt_to_income_ratio > DEBT_TO_INCOME_GUIDELINE {
            warnings.push(format!(
                "Debt-to-income ratio {:.1}% exceeds the {}% guideline",
                debt_to_income_ratio, DEBT_TO_INCOME_GUIDELINE
            ));
        }
    }

    let result = MortgageOutput {
        loan_amount,
        down_payment_percent,
        monthly_principal_interest,
        monthly_principal,
        monthly_interest,
        monthly_property_tax: input.property_tax_annual / 12.0,
        monthly_home_insurance: input.home_insurance_annual / 12.0,
        total_monthly_payment,
        total_interest_paid: schedule.total_interest_paid,
        housing_ratio,
        debt_to_income_ratio,
        payoff,
        amortization_schedule: schedule.years,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Mortgage Amortization (level-payment annuity)",
        input,
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject inputs that a loan application form would refuse.
///
/// [`analyze_mortgage`] itself accepts anything; this check is for callers
/// that take untrusted input and would rather fail fast than interpret
/// non-finite or negative figures.
pub fn validate(input: &MortgageInput) -> MortgageResult<()> {
    check_finite_non_negative("home_price", input.home_price)?;
    check_finite_non_negative("down_payment", input.down_payment)?;
    check_finite_non_negative("interest_rate", input.interest_rate)?;
    check_finite_non_negative("property_tax_annual", input.property_tax_annual)?;
    check_finite_non_negative("home_insurance_annual", input.home_insurance_annual)?;
    check_finite_non_negative("pmi_monthly", input.pmi_monthly)?;
    check_finite_non_negative("extra_payment_monthly", input.extra_payment_monthly)?;
    check_finite_non_negative("annual_income", input.annual_income)?;
    check_finite_non_negative("monthly_debts", input.monthly_debts)?;

    if input.loan_term_years == 0 {
        return Err(MortgageError::InvalidInput {
            field: "loan_term_years".to_string(),
            reason: "must be at least 1 year".to_string(),
        });
    }
    if input.down_payment > input.home_price {
        return Err(MortgageError::InvalidInput {
            field: "down_payment".to_string(),
            reason: format!(
                "cannot exceed home price ({} > {})",
                input.down_payment, input.home_price
            ),
        });
    }
    Ok(())
}

fn check_finite_non_negative(field: &'static str, value: f64) -> MortgageResult<()> {
    if !value.is_finite() {
        return Err(MortgageError::InvalidInput {
            field: field.to_string(),
            reason: format!("must be finite, got {}", value),
        });
    }
    if value < 0.0 {
        return Err(MortgageError::InvalidInput {
            field: field.to_string(),
            reason: format!("must be non-negative, got {}", value),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 0.01;

    fn assert_close(actual: f64, expected: f64, tol: f64, msg: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tol,
            "{}: expected ~{}, got {} (diff = {})",
            msg,
            expected,
            actual,
            diff
        );
    }

    fn run(input: &MortgageInput) -> ComputationOutput<MortgageOutput> {
        analyze_mortgage(input).unwrap()
    }

    // -----------------------------------------------------------------------
    // 1. Default scenario reference values
    // -----------------------------------------------------------------------
    #[test]
    fn test_default_scenario() {
        let output = run(&MortgageInput::default());
        let r = &output.result;
        assert_eq!(r.loan_amount, 240_000.0);
        assert_eq!(r.down_payment_percent, 20.0);
        assert_close(r.monthly_principal_interest, 1516.96, TOL, "P&I");
        assert_close(r.total_monthly_payment, 1916.96, TOL, "all-in");
        assert_close(r.monthly_interest, 1300.0, TOL, "first-month interest");
        assert_close(r.monthly_principal, 216.96, TOL, "first-month principal");
        assert_eq!(r.monthly_property_tax, 300.0);
        assert_eq!(r.monthly_home_insurance, 100.0);
        assert_close(r.housing_ratio, 23.0, TOL, "front-end ratio");
        assert_close(r.debt_to_income_ratio, 29.0, TOL, "back-end ratio");
        assert_eq!(r.amortization_schedule.len(), 30);
        assert!(r.payoff.is_none());
        assert!(output.warnings.is_empty(), "unexpected: {:?}", output.warnings);
    }

    // -----------------------------------------------------------------------
    // 2. First-month split reconciles with the level payment
    // -----------------------------------------------------------------------
    #[test]
    fn test_first_month_split() {
        let r = run(&MortgageInput::default()).result;
        assert_close(
            r.monthly_principal + r.monthly_interest,
            r.monthly_principal_interest,
            1e-9,
            "split reconciles",
        );
        assert_close(r.monthly_interest, 1300.0, 1e-9, "first-month interest");
    }

    // -----------------------------------------------------------------------
    // 3. Extra payments: payoff comparison and truncated schedule
    // -----------------------------------------------------------------------
    #[test]
    fn test_extra_payment_payoff() {
        let input = MortgageInput {
            extra_payment_monthly: 500.0,
            ..MortgageInput::default()
        };
        let r = run(&input).result;
        assert_eq!(
            r.payoff,
            Some(PayoffComparison {
                payoff_month: 192,
                payoff_year: 16,
                years_saved: 14,
            })
        );
        assert_eq!(r.amortization_schedule.len(), 16);
        assert_close(r.total_monthly_payment, 2416.96, TOL, "all-in with extra");
    }

    // -----------------------------------------------------------------------
    // 4. Full-schedule mode keeps all thirty rows alongside the payoff
    // -----------------------------------------------------------------------
    #[test]
    fn test_full_schedule_mode() {
        let input = MortgageInput {
            extra_payment_monthly: 500.0,
            full_standard_schedule: true,
            ..MortgageInput::default()
        };
        let r = run(&input).result;
        assert_eq!(r.amortization_schedule.len(), 30);
        assert_eq!(r.payoff.as_ref().map(|p| p.payoff_month), Some(192));

        let baseline = run(&MortgageInput::default()).result;
        assert_eq!(r.total_interest_paid, baseline.total_interest_paid);
        for (a, b) in r
            .amortization_schedule
            .iter()
            .zip(baseline.amortization_schedule.iter())
        {
            assert_eq!(a.remaining_balance, b.remaining_balance);
        }
    }

    // -----------------------------------------------------------------------
    // 5. No payoff comparison without extra payments
    // -----------------------------------------------------------------------
    #[test]
    fn test_no_payoff_without_extra() {
        let r = run(&MortgageInput::default()).result;
        assert!(r.payoff.is_none());

        let input = MortgageInput {
            full_standard_schedule: true,
            ..MortgageInput::default()
        };
        assert!(run(&input).result.payoff.is_none());
    }

    // -----------------------------------------------------------------------
    // 6. Low down payment triggers the PMI warning
    // -----------------------------------------------------------------------
    #[test]
    fn test_pmi_warning() {
        let input = MortgageInput {
            down_payment: 30_000.0,
            ..MortgageInput::default()
        };
        let output = run(&input);
        assert_eq!(output.result.down_payment_percent, 10.0);
        assert!(
            output.warnings.iter().any(|w| w.contains("PMI")),
            "missing PMI warning in {:?}",
            output.warnings
        );
    }

    // -----------------------------------------------------------------------
    // 7. Stretched budget breaches both guidelines
    // -----------------------------------------------------------------------
    #[test]
    fn test_guideline_warnings() {
        let input = MortgageInput {
            annual_income: 40_000.0,
            ..MortgageInput::default()
        };
        let output = run(&input);
        assert!(output.result.housing_ratio > HOUSING_RATIO_GUIDELINE);
        assert!(output.result.debt_to_income_ratio > DEBT_TO_INCOME_GUIDELINE);
        assert_eq!(output.warnings.len(), 2);
        assert!(output.warnings[0].contains("Housing ratio"));
        assert!(output.warnings[1].contains("Debt-to-income"));
    }

    // -----------------------------------------------------------------------
    // 8. Zero income: infinite ratios, one warning, no panic
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_income() {
        let input = MortgageInput {
            annual_income: 0.0,
            ..MortgageInput::default()
        };
        let output = run(&input);
        assert!(output.result.housing_ratio.is_infinite());
        assert!(output.result.debt_to_income_ratio.is_infinite());
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].contains("income is zero"));
    }

    // -----------------------------------------------------------------------
    // 9. Zero term: empty schedule, non-finite payment, warning
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_term() {
        let input = MortgageInput {
            loan_term_years: 0,
            ..MortgageInput::default()
        };
        let output = run(&input);
        assert!(!output.result.monthly_principal_interest.is_finite());
        assert!(output.result.amortization_schedule.is_empty());
        assert!(output.result.payoff.is_none());
        assert!(output.warnings.iter().any(|w| w.contains("term is zero")));
    }

    // -----------------------------------------------------------------------
    // 10. Down payment above the home price: negative loan, warning
    // -----------------------------------------------------------------------
    #[test]
    fn test_down_payment_exceeds_price() {
        let input = MortgageInput {
            home_price: 300_000.0,
            down_payment: 350_000.0,
            ..MortgageInput::default()
        };
        let output = run(&input);
        assert_eq!(output.result.loan_amount, -50_000.0);
        assert_eq!(output.result.amortization_schedule.len(), 1);
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("exceeds home price")));
    }

    // -----------------------------------------------------------------------
    // 11. Negative rate warns but still computes
    // -----------------------------------------------------------------------
    #[test]
    fn test_negative_rate_warning() {
        let input = MortgageInput {
            interest_rate: -1.0,
            ..MortgageInput::default()
        };
        let output = run(&input);
        assert!(output.result.monthly_principal_interest.is_finite());
        assert!(output.warnings.iter().any(|w| w.contains("negative")));
    }

    // -----------------------------------------------------------------------
    // 12. NaN input poisons the outputs instead of erroring
    // -----------------------------------------------------------------------
    #[test]
    fn test_nan_input_flows_through() {
        let input = MortgageInput {
            home_price: f64::NAN,
            ..MortgageInput::default()
        };
        let output = run(&input);
        assert!(output.result.loan_amount.is_nan());
        assert!(output.result.monthly_principal_interest.is_nan());
        assert_eq!(output.result.amortization_schedule.len(), 30);
        assert!(output.result.payoff.is_none());
    }

    // -----------------------------------------------------------------------
    // 13. Same input, same output, bit for bit
    // -----------------------------------------------------------------------
    #[test]
    fn test_idempotent() {
        let input = MortgageInput {
            extra_payment_monthly: 250.0,
            ..MortgageInput::default()
        };
        let a = run(&input);
        let b = run(&input);
        assert_eq!(a.result, b.result);
    }

    // -----------------------------------------------------------------------
    // 14. An empty JSON object deserializes to the default scenario
    // -----------------------------------------------------------------------
    #[test]
    fn test_empty_object_is_default() {
        let parsed: MortgageInput = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, MortgageInput::default());
    }

    // -----------------------------------------------------------------------
    // 15. Envelope carries methodology, assumptions, and precision
    // -----------------------------------------------------------------------
    #[test]
    fn test_envelope_metadata() {
        let output = run(&MortgageInput::default());
        assert!(output.methodology.contains("Amortization"));
        assert_eq!(output.metadata.precision, "ieee754_f64");
        assert_eq!(output.metadata.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(
            output.assumptions.get("home_price").and_then(|v| v.as_f64()),
            Some(300_000.0)
        );
    }

    // -----------------------------------------------------------------------
    // 16. Absent payoff is omitted from JSON; infinite ratios become null
    // -----------------------------------------------------------------------
    #[test]
    fn test_json_shape() {
        let output = run(&MortgageInput::default());
        let json = serde_json::to_string(&output.result).unwrap();
        assert!(!json.contains("payoff"), "payoff should be omitted when None");

        let broke = MortgageInput {
            annual_income: 0.0,
            ..MortgageInput::default()
        };
        let value = serde_json::to_value(&run(&broke).result).unwrap();
        assert_eq!(value.get("housing_ratio"), Some(&serde_json::Value::Null));
    }

    // -----------------------------------------------------------------------
    // 17. Validation accepts the defaults and rejects form violations
    // -----------------------------------------------------------------------
    #[test]
    fn test_validate_default_ok() {
        assert!(validate(&MortgageInput::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let input = MortgageInput {
            home_price: -1.0,
            ..MortgageInput::default()
        };
        let err = validate(&input).unwrap_err();
        assert!(err.to_string().contains("home_price"));
    }

    #[test]
    fn test_validate_rejects_non_finite_rate() {
        let input = MortgageInput {
            interest_rate: f64::NAN,
            ..MortgageInput::default()
        };
        let err = validate(&input).unwrap_err();
        assert!(err.to_string().contains("interest_rate"));
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_validate_rejects_zero_term() {
        let input = MortgageInput {
            loan_term_years: 0,
            ..MortgageInput::default()
        };
        let err = validate(&input).unwrap_err();
        assert!(err.to_string().contains("loan_term_years"));
    }

    #[test]
    fn test_validate_rejects_oversized_down_payment() {
        let input = MortgageInput {
            down_payment: 400_000.0,
            ..MortgageInput::default()
        };
        let err = validate(&input).unwrap_err();
        assert!(err.to_string().contains("down_payment"));
    }
}
