use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{BackendError, PortalBackend};
use crate::config::BackendConfig;
use crate::workflows::affordability::{LoanPolicy, MaxLoanEstimate, MaxLoanRequest};
use crate::workflows::directory::{CompanyList, CompanyQuery};
use crate::workflows::testimonials::{PublishedTestimonial, TestimonialDraft};

const LOAN_POLICIES_PATH: &str = "/client/loan_policies";
const COMPUTE_MAX_LOAN_PATH: &str = "/client/compute_max_loan";
const FILTER_COMPANIES_PATH: &str = "/client/filter_companies";
const TESTIMONIALS_PATH: &str = "/api/testimonials";

/// `reqwest`-backed implementation of [`PortalBackend`].
#[derive(Debug, Clone)]
pub struct HttpPortalBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPortalBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(BackendError::Transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    response.json::<T>().await.map_err(BackendError::Decode)
}

#[async_trait]
impl PortalBackend for HttpPortalBackend {
    async fn loan_policies(
        &self,
        bank_slug: &str,
        loan_type: &str,
    ) -> Result<Vec<LoanPolicy>, BackendError> {
        let response = self
            .client
            .get(self.url(LOAN_POLICIES_PATH))
            .query(&[("bank_slug", bank_slug), ("loan_type", loan_type)])
            .send()
            .await
            .map_err(BackendError::Transport)?;
        decode(response).await
    }

    async fn compute_max_loan(
        &self,
        request: &MaxLoanRequest,
    ) -> Result<MaxLoanEstimate, BackendError> {
        let response = self
            .client
            .post(self.url(COMPUTE_MAX_LOAN_PATH))
            .json(request)
            .send()
            .await
            .map_err(BackendError::Transport)?;
        decode(response).await
    }

    async fn filter_companies(&self, query: &CompanyQuery) -> Result<CompanyList, BackendError> {
        let response = self
            .client
            .get(self.url(FILTER_COMPANIES_PATH))
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(BackendError::Transport)?;
        decode(response).await
    }

    async fn submit_testimonial(
        &self,
        draft: &TestimonialDraft,
    ) -> Result<PublishedTestimonial, BackendError> {
        let response = self
            .client
            .post(self.url(TESTIMONIALS_PATH))
            .json(draft)
            .send()
            .await
            .map_err(BackendError::Transport)?;
        decode(response).await
    }
}
