//! Certified-valuation company directory: query building and the card model
//! for the "find companies" panel.

use serde::{Deserialize, Serialize};

use crate::format::{currency, FractionDigits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantType {
    Individual,
    Company,
}

impl ApplicantType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }
}

/// Filter criteria for matching valuation companies to a request.
#[derive(Debug, Clone, Default)]
pub struct CompanyQuery {
    pub bank_slug: String,
    pub amount: f64,
    pub applicant_type: Option<ApplicantType>,
    pub purpose: Option<String>,
}

impl CompanyQuery {
    /// A query needs a bank and a positive finite amount before it is worth
    /// sending; anything else short-circuits to the empty results state.
    pub fn is_searchable(&self) -> bool {
        !self.bank_slug.trim().is_empty() && self.amount.is_finite() && self.amount > 0.0
    }

    /// Key/value pairs for the filter endpoint's query string.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("bank_slug", self.bank_slug.clone()),
            ("amount", self.amount.to_string()),
        ];
        if let Some(applicant) = self.applicant_type {
            pairs.push(("applicant_type", applicant.as_str().to_string()));
        }
        if let Some(purpose) = &self.purpose {
            pairs.push(("purpose", purpose.clone()));
        }
        pairs
    }
}

/// One matching company as returned by the filter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCard {
    pub company_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub approved_limit: Option<f64>,
    #[serde(default)]
    pub profile_limit: Option<f64>,
    pub apply_url: String,
}

impl CompanyCard {
    /// Label describing the company's lending headroom. A bank-approved
    /// limit takes precedence over the company's own profile limit.
    pub fn limit_label(&self) -> Option<String> {
        if let Some(limit) = self.approved_limit {
            return Some(format!(
                "bank-approved up to {}",
                currency(limit, FractionDigits::Whole)
            ));
        }
        self.profile_limit
            .map(|limit| format!("company limit {}", currency(limit, FractionDigits::Whole)))
    }
}

/// Envelope returned by the filter endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyList {
    #[serde(default)]
    pub items: Vec<CompanyCard>,
}
