//! Filter type definitions
//!
//! A [`FilterSet`] is the structured combination of domain, company,
//! sentiment, and date constraints used to narrow the news dataset. Every
//! dimension is independently optional; an empty list, `Sentiment::All`, or
//! `None` means "unfiltered" for that dimension. Filter sets are built
//! transiently per user interaction and discarded once serialized into an
//! API request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::sentiment::Sentiment;

/// Inclusive calendar date range.
///
/// `start <= end` is intentionally not enforced. Out-of-order ranges are
/// passed through to the API, which answers them with an empty result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Structured filter over the news/sentiment dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub domains: Vec<String>,
    pub companies: Vec<String>,
    pub sentiment: Sentiment,
    pub date_range: Option<DateRange>,
}

impl FilterSet {
    /// True when no dimension constrains anything
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
            && self.companies.is_empty()
            && self.sentiment == Sentiment::All
            && self.date_range.is_none()
    }
}
