//! Affordability ratios and underwriting guideline thresholds.
//!
//! The ratios follow the conventional front-end / back-end definitions used in
//! residential underwriting: housing cost against gross monthly income, and
//! housing cost plus other debt service against gross monthly income. Both are
//! expressed in percent.
//!
//! All functions are total over `f64`; a zero income yields an infinite ratio
//! rather than an error.

/// Front-end ratio guideline: housing costs at or below 28% of gross income.
pub const HOUSING_RATIO_GUIDELINE: f64 = 28.0;

/// Back-end ratio guideline: total debt service at or below 36% of gross income.
pub const DEBT_TO_INCOME_GUIDELINE: f64 = 36.0;

/// Down payments below 20% of the purchase price typically require PMI.
pub const PMI_DOWN_PAYMENT_THRESHOLD: f64 = 20.0;

/// Housing cost as a percentage of gross monthly income (front-end ratio).
pub fn housing_ratio(total_monthly_payment: f64, annual_income: f64) -> f64 {
    total_monthly_payment / (annual_income / 12.0) * 100.0
}

/// Housing cost plus other monthly debt service as a percentage of gross
/// monthly income (back-end ratio).
pub fn debt_to_income_ratio(
    total_monthly_payment: f64,
    monthly_debts: f64,
    annual_income: f64,
) -> f64 {
    (total_monthly_payment + monthly_debts) / (annual_income / 12.0) * 100.0
}

/// Down payment as a percentage of the purchase price.
pub fn down_payment_percent(down_payment: f64, home_price: f64) -> f64 {
    down_payment / home_price * 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
