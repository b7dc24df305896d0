use serde::{Deserialize, Serialize};

use crate::format::{whole_percent, UNAVAILABLE};

/// Affordability policy record for a (bank, loan type) pair, owned by the
/// backend. The engine only reads it: the ratio is informational and the
/// defaults pre-fill empty inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPolicy {
    #[serde(default)]
    pub max_ratio: Option<f64>,
    #[serde(default)]
    pub default_years: Option<f64>,
    #[serde(default)]
    pub default_annual_rate: Option<f64>,
}

impl LoanPolicy {
    /// One-line informational summary shown next to the inputs.
    pub fn summary(&self) -> String {
        let ratio = match self.max_ratio {
            Some(ratio) if ratio != 0.0 => whole_percent(ratio),
            _ => UNAVAILABLE.to_string(),
        };
        let mut summary = format!("payment-to-income cap: {ratio}");
        if let Some(rate) = self.default_annual_rate.filter(|r| *r != 0.0) {
            summary.push_str(&format!(" \u{2022} default rate: {rate}%"));
        }
        if let Some(years) = self.default_years.filter(|y| *y != 0.0) {
            summary.push_str(&format!(" \u{2022} default term: {years} years"));
        }
        summary
    }
}

/// Payload for the server-side max-loan computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxLoanRequest {
    pub bank_slug: String,
    pub loan_type: String,
    pub income: f64,
    pub years: f64,
    pub annual_rate: f64,
}

/// The server's answer, including the effective values it actually used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxLoanEstimate {
    pub max_principal: f64,
    pub max_monthly_payment: f64,
    pub used: EffectiveInputs,
}

/// Effective numeric inputs echoed back by the server so the panel can show
/// what the figure was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveInputs {
    pub annual_rate: f64,
    pub years: f64,
    #[serde(default)]
    pub max_ratio: Option<f64>,
}

impl EffectiveInputs {
    /// Formula line mirroring the server's inputs: monthly rate to six
    /// decimals, term in months, ratio as a whole percent.
    pub fn formula_line(&self) -> String {
        let monthly_rate = self.annual_rate / 100.0 / 12.0;
        let months = (self.years * 12.0).round() as i64;
        let ratio = whole_percent(self.max_ratio.unwrap_or(0.0));
        format!("r = {monthly_rate:.6}, n = {months}, cap = {ratio}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_ratio_and_defaults() {
        let policy = LoanPolicy {
            max_ratio: Some(0.4),
            default_years: Some(25.0),
            default_annual_rate: Some(6.0),
        };
        assert_eq!(
            policy.summary(),
            "payment-to-income cap: 40% \u{2022} default rate: 6% \u{2022} default term: 25 years"
        );
    }

    #[test]
    fn summary_uses_placeholder_for_missing_ratio() {
        let policy = LoanPolicy {
            max_ratio: None,
            default_years: None,
            default_annual_rate: None,
        };
        assert_eq!(policy.summary(), format!("payment-to-income cap: {UNAVAILABLE}"));
    }

    #[test]
    fn formula_line_shows_server_side_inputs() {
        let used = EffectiveInputs {
            annual_rate: 6.0,
            years: 25.0,
            max_ratio: Some(0.4),
        };
        assert_eq!(used.formula_line(), "r = 0.005000, n = 300, cap = 40%");
    }
}
