use serde::{Deserialize, Serialize};

use super::amortization::{clip, LoanTerms};

/// A bank-published financing offer the borrower can select to pre-fill the
/// calculator. Bounds are optional brackets; a zero bound means unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancingOffer {
    pub annual_rate_percent: f64,
    #[serde(default)]
    pub min_term_months: Option<f64>,
    #[serde(default)]
    pub max_term_months: Option<f64>,
    #[serde(default)]
    pub min_amount: Option<f64>,
    #[serde(default)]
    pub max_amount: Option<f64>,
}

impl FinancingOffer {
    /// Apply the offer to current calculator terms: the offer's rate
    /// replaces the rate when it carries one, and amount/term are clamped
    /// into the offer's brackets. User-entered values inside the brackets
    /// pass through untouched.
    pub fn apply(&self, terms: LoanTerms) -> LoanTerms {
        let annual_rate_percent = if self.annual_rate_percent != 0.0 {
            self.annual_rate_percent
        } else {
            terms.annual_rate_percent
        };

        LoanTerms {
            principal: clip(terms.principal, self.min_amount, self.max_amount),
            annual_rate_percent,
            term_months: clip(terms.term_months, self.min_term_months, self.max_term_months),
        }
    }

    /// Human-readable summary of the term bracket, if the offer has one.
    pub fn term_hint(&self) -> Option<String> {
        let min = self.min_term_months.filter(|m| *m != 0.0);
        let max = self.max_term_months.filter(|m| *m != 0.0);
        match (min, max) {
            (Some(lo), Some(hi)) => Some(format!("{lo:.0}-{hi:.0} months")),
            (Some(lo), None) => Some(format!("at least {lo:.0} months")),
            (None, Some(hi)) => Some(format!("up to {hi:.0} months")),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracketed_offer() -> FinancingOffer {
        FinancingOffer {
            annual_rate_percent: 6.25,
            min_term_months: Some(12.0),
            max_term_months: Some(300.0),
            min_amount: None,
            max_amount: Some(200_000.0),
        }
    }

    #[test]
    fn offer_rate_prefills_the_terms() {
        let applied = bracketed_offer().apply(LoanTerms::new(50_000.0, 4.0, 120.0));
        assert_eq!(applied.annual_rate_percent, 6.25);
        assert_eq!(applied.principal, 50_000.0);
        assert_eq!(applied.term_months, 120.0);
    }

    #[test]
    fn offer_without_rate_keeps_user_rate() {
        let offer = FinancingOffer {
            annual_rate_percent: 0.0,
            ..bracketed_offer()
        };
        let applied = offer.apply(LoanTerms::new(50_000.0, 4.0, 120.0));
        assert_eq!(applied.annual_rate_percent, 4.0);
    }

    #[test]
    fn out_of_bracket_values_clamp_to_the_bracket() {
        let applied = bracketed_offer().apply(LoanTerms::new(500_000.0, 4.0, 600.0));
        assert_eq!(applied.principal, 200_000.0);
        assert_eq!(applied.term_months, 300.0);

        let reapplied = bracketed_offer().apply(applied);
        assert_eq!(reapplied.principal, applied.principal);
        assert_eq!(reapplied.term_months, applied.term_months);
    }

    #[test]
    fn term_hint_describes_the_bracket() {
        assert_eq!(
            bracketed_offer().term_hint().as_deref(),
            Some("12-300 months")
        );
        assert_eq!(FinancingOffer::default().term_hint(), None);
        let capped = FinancingOffer {
            max_term_months: Some(240.0),
            ..FinancingOffer::default()
        };
        assert_eq!(capped.term_hint().as_deref(), Some("up to 240 months"));
    }
}
