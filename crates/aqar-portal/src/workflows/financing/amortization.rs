//! Standard amortizing-loan arithmetic.

use serde::{Deserialize, Serialize};

/// Calculator inputs as entered in the loan form.
///
/// Fields are plain floats so an absent form value can travel as `NaN`; the
/// calculator treats zero, `NaN`, and absent identically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_months: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }
}

/// Derived repayment figures. All three fields are `NaN` when any input is
/// missing; the presentation layer renders that as the placeholder.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaymentBreakdown {
    pub monthly: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

impl PaymentBreakdown {
    const UNDEFINED: Self = Self {
        monthly: f64::NAN,
        total_interest: f64::NAN,
        total_cost: f64::NAN,
    };

    pub fn is_defined(&self) -> bool {
        self.monthly.is_finite()
    }
}

fn missing(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// Fixed monthly payment for an amortizing loan, with derived totals.
///
/// `monthly = P * r * (1+r)^n / ((1+r)^n - 1)` where `r` is the monthly rate.
/// Any zero/missing input yields the undefined breakdown rather than an
/// error; the calculator form never rejects input.
pub fn monthly_payment(terms: LoanTerms) -> PaymentBreakdown {
    let principal = terms.principal;
    let annual_rate = terms.annual_rate_percent;
    let months = terms.term_months;

    if missing(principal) || missing(annual_rate) || missing(months) {
        return PaymentBreakdown::UNDEFINED;
    }

    let monthly_rate = (annual_rate / 100.0) / 12.0;
    let factor = (1.0 + monthly_rate).powf(months);
    let monthly = principal * monthly_rate * factor / (factor - 1.0);
    let total_cost = monthly * months;
    let total_interest = total_cost - principal;

    PaymentBreakdown {
        monthly,
        total_interest,
        total_cost,
    }
}

/// Clamp `value` into the given bounds.
///
/// A bound participates only when present and non-zero, matching the way
/// financing offers publish optional brackets. The operation is idempotent
/// and never moves a value outside the provided bounds.
pub fn clip(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut clipped = value;
    if let Some(lo) = min {
        if lo != 0.0 && clipped < lo {
            clipped = lo;
        }
    }
    if let Some(hi) = max {
        if hi != 0.0 && clipped > hi {
            clipped = hi;
        }
    }
    clipped
}
