//! Backend access for the portal engine.
//!
//! The trait keeps workflow code independent of the transport so composition
//! logic can be exercised against in-process fakes.

mod http;

pub use http::HttpPortalBackend;

use async_trait::async_trait;

use crate::workflows::affordability::{LoanPolicy, MaxLoanEstimate, MaxLoanRequest};
use crate::workflows::directory::{CompanyList, CompanyQuery};
use crate::workflows::testimonials::{PublishedTestimonial, TestimonialDraft};

/// The four portal endpoints the engine consumes.
#[async_trait]
pub trait PortalBackend: Send + Sync {
    /// `GET /client/loan_policies` for a bank/loan-type pair.
    async fn loan_policies(
        &self,
        bank_slug: &str,
        loan_type: &str,
    ) -> Result<Vec<LoanPolicy>, BackendError>;

    /// `POST /client/compute_max_loan`. The affordability formula lives
    /// server-side; the engine only relays inputs and renders the result.
    async fn compute_max_loan(
        &self,
        request: &MaxLoanRequest,
    ) -> Result<MaxLoanEstimate, BackendError>;

    /// `GET /client/filter_companies` for the directory panel.
    async fn filter_companies(&self, query: &CompanyQuery) -> Result<CompanyList, BackendError>;

    /// `POST /api/testimonials`.
    async fn submit_testimonial(
        &self,
        draft: &TestimonialDraft,
    ) -> Result<PublishedTestimonial, BackendError>;
}

/// Failure modes of a backend call. Composition layers treat all of them the
/// same way: log at debug level and keep the previous state.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("response body did not match the expected shape: {0}")]
    Decode(reqwest::Error),
}
