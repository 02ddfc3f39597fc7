//! HTTP client for the sentiment API
//!
//! Thin typed wrapper over the three external endpoints. No vocabulary
//! validation happens here: whatever domains or companies the caller puts in
//! a request are sent as-is, and the API answers unknown values with an
//! empty result set.

use std::time::Duration;

use crate::core::constants::ERROR_BODY_MAX_LENGTH;
use crate::filters::AnalyticsRequest;
use crate::utils::string::truncate_description;

use super::error::ApiClientError;
use super::types::{AnalyticsResponse, CompaniesResponse, Domain, DomainsResponse, SentimentPoint};

const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiClientError::Config("base URL is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("Prevently/{}", CRATE_VERSION))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// `POST /news/sentiment-analytics`
    pub async fn sentiment_analytics(
        &self,
        request: &AnalyticsRequest,
    ) -> Result<Vec<SentimentPoint>, ApiClientError> {
        let url = format!("{}/news/sentiment-analytics", self.base_url);
        tracing::debug!(url = %url, "Running sentiment analytics query");

        let response = self.http.post(&url).json(request).send().await?;
        let response = Self::check_status(response).await?;
        let body: AnalyticsResponse = response.json().await?;
        Ok(body.analytics)
    }

    /// `GET /news/domains`
    pub async fn domains(&self) -> Result<Vec<Domain>, ApiClientError> {
        let url = format!("{}/news/domains", self.base_url);
        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let body: DomainsResponse = response.json().await?;
        Ok(body.domains)
    }

    /// `GET /news/companies`
    pub async fn companies(&self) -> Result<Vec<String>, ApiClientError> {
        let url = format!("{}/news/companies", self.base_url);
        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let body: CompaniesResponse = response.json().await?;
        Ok(body.companies)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiClientError::Status {
            status: status.as_u16(),
            message: truncate_description(&body, ERROR_BODY_MAX_LENGTH),
        })
    }
}
