//! Wire types for the sentiment API
//!
//! Request and response shapes of the external HTTP endpoints. The request
//! body lives in [`crate::filters::AnalyticsRequest`]; everything here is
//! response-side.

use serde::{Deserialize, Serialize};

/// Market domain as listed by `GET /news/domains`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One day of aggregated sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub date: String,
    pub sentiment: f64,
    pub article_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsResponse {
    pub analytics: Vec<SentimentPoint>,
}

#[derive(Debug, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<Domain>,
}

#[derive(Debug, Deserialize)]
pub struct CompaniesResponse {
    pub companies: Vec<String>,
}
