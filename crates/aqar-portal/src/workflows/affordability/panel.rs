use std::sync::Arc;

use tracing::debug;

use super::policy::{LoanPolicy, MaxLoanEstimate, MaxLoanRequest};
use super::DEFAULT_LOAN_TYPE;
use crate::backend::PortalBackend;
use crate::format::UNAVAILABLE;

/// Snapshot of everything the max-loan panel displays or submits.
///
/// State transitions are plain methods on this struct so they can be tested
/// without any backend; [`AffordabilityPanel`] adds the fetch orchestration.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub bank_slug: Option<String>,
    pub loan_type: String,
    pub income: Option<f64>,
    pub years: Option<f64>,
    pub annual_rate: Option<f64>,
    pub policy: Option<LoanPolicy>,
    pub estimate: Option<MaxLoanEstimate>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            bank_slug: None,
            loan_type: DEFAULT_LOAN_TYPE.to_string(),
            income: None,
            years: None,
            annual_rate: None,
            policy: None,
            estimate: None,
        }
    }
}

impl PanelState {
    /// Adopt the first policy record, pre-filling term and rate defaults
    /// into fields the user has not touched. A field holding an explicit
    /// value is never overwritten.
    pub fn apply_policies(&mut self, policies: Vec<LoanPolicy>) {
        let policy = policies.into_iter().next();
        if let Some(policy) = &policy {
            if self.years.is_none() {
                if let Some(years) = policy.default_years.filter(|y| *y != 0.0) {
                    self.years = Some(years);
                }
            }
            if self.annual_rate.is_none() {
                if let Some(rate) = policy.default_annual_rate.filter(|r| *r != 0.0) {
                    self.annual_rate = Some(rate);
                }
            }
        }
        self.policy = policy;
    }

    /// Informational summary of the active policy, or the placeholder when
    /// no policy has been resolved yet.
    pub fn policy_summary(&self) -> String {
        match &self.policy {
            Some(policy) => policy.summary(),
            None => UNAVAILABLE.to_string(),
        }
    }

    /// Build the max-loan payload. Requires a bank selection; absent numeric
    /// fields travel as zero, which the server treats as unspecified.
    pub fn max_loan_request(&self) -> Option<MaxLoanRequest> {
        let bank_slug = self.bank_slug.clone()?;
        Some(MaxLoanRequest {
            bank_slug,
            loan_type: self.loan_type.clone(),
            income: self.income.unwrap_or(0.0),
            years: self.years.unwrap_or(0.0),
            annual_rate: self.annual_rate.unwrap_or(0.0),
        })
    }
}

/// Orchestrates the two backend calls around the panel state.
///
/// Every fetch is tagged with an epoch taken when the request is issued;
/// a response whose epoch is no longer current is dropped, so overlapping
/// requests resolve to the most recently issued one rather than whichever
/// response happens to arrive last.
pub struct AffordabilityPanel<B> {
    backend: Arc<B>,
    state: PanelState,
    policy_epoch: u64,
    estimate_epoch: u64,
}

impl<B: PortalBackend> AffordabilityPanel<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: PanelState::default(),
            policy_epoch: 0,
            estimate_epoch: 0,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub async fn select_bank(&mut self, bank_slug: &str) {
        self.state.bank_slug = if bank_slug.trim().is_empty() {
            None
        } else {
            Some(bank_slug.to_string())
        };
        self.reload_policy().await;
    }

    pub async fn select_loan_type(&mut self, loan_type: &str) {
        self.state.loan_type = loan_type.to_string();
        self.reload_policy().await;
    }

    pub async fn set_income(&mut self, income: Option<f64>) {
        self.state.income = income;
        self.recalculate().await;
    }

    pub async fn set_years(&mut self, years: Option<f64>) {
        self.state.years = years;
        self.recalculate().await;
    }

    pub async fn set_annual_rate(&mut self, annual_rate: Option<f64>) {
        self.state.annual_rate = annual_rate;
        self.recalculate().await;
    }

    /// Mark the start of a policy fetch, invalidating any in-flight one.
    pub fn begin_policy_fetch(&mut self) -> u64 {
        self.policy_epoch += 1;
        self.policy_epoch
    }

    /// Deliver a policy response. Returns false when the response is stale.
    pub fn finish_policy_fetch(&mut self, epoch: u64, policies: Vec<LoanPolicy>) -> bool {
        if epoch != self.policy_epoch {
            debug!(epoch, current = self.policy_epoch, "dropping stale policy response");
            return false;
        }
        self.state.apply_policies(policies);
        true
    }

    /// Mark the start of an estimate fetch, invalidating any in-flight one.
    pub fn begin_estimate_fetch(&mut self) -> u64 {
        self.estimate_epoch += 1;
        self.estimate_epoch
    }

    /// Deliver an estimate response. Returns false when the response is stale.
    pub fn finish_estimate_fetch(&mut self, epoch: u64, estimate: MaxLoanEstimate) -> bool {
        if epoch != self.estimate_epoch {
            debug!(epoch, current = self.estimate_epoch, "dropping stale estimate response");
            return false;
        }
        self.state.estimate = Some(estimate);
        true
    }

    async fn reload_policy(&mut self) {
        let Some(bank_slug) = self.state.bank_slug.clone() else {
            return;
        };
        let loan_type = self.state.loan_type.clone();
        let epoch = self.begin_policy_fetch();

        match self.backend.loan_policies(&bank_slug, &loan_type).await {
            Ok(policies) => {
                if self.finish_policy_fetch(epoch, policies) {
                    self.recalculate().await;
                }
            }
            // Failed fetches leave the previous panel state untouched.
            Err(err) => debug!(%bank_slug, %loan_type, error = %err, "policy fetch failed"),
        }
    }

    async fn recalculate(&mut self) {
        let Some(request) = self.state.max_loan_request() else {
            return;
        };
        let epoch = self.begin_estimate_fetch();

        match self.backend.compute_max_loan(&request).await {
            Ok(estimate) => {
                self.finish_estimate_fetch(epoch, estimate);
            }
            Err(err) => debug!(bank_slug = %request.bank_slug, error = %err, "max-loan fetch failed"),
        }
    }
}
