//! Filter-to-API request mapping
//!
//! Serializes a [`FilterSet`] into the request shape the analytics endpoint
//! expects, and builds filter sets from discrete form controls (multi-select
//! domains, comma-separated company text, date pair, sentiment select).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::sentiment::Sentiment;
use crate::filters::types::{DateRange, FilterSet};
use crate::utils::string::split_comma_list;
use crate::utils::time::date_to_epoch_millis;

/// Body of `POST /news/sentiment-analytics`.
///
/// Dates are epoch milliseconds at local midnight. Absent dates are omitted
/// from the serialized JSON entirely, never sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    pub domains: Vec<String>,
    pub companies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<i64>,
    pub sentiment_filter: Sentiment,
}

impl FilterSet {
    /// Serialize into the analytics request shape. Total: cannot fail.
    pub fn to_request(&self) -> AnalyticsRequest {
        AnalyticsRequest {
            domains: self.domains.clone(),
            companies: self.companies.clone(),
            date_from: self.date_range.map(|r| date_to_epoch_millis(r.start)),
            date_to: self.date_range.map(|r| date_to_epoch_millis(r.end)),
            sentiment_filter: self.sentiment,
        }
    }
}

/// Raw state of the discrete filter controls
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    pub domains: Vec<String>,
    pub companies_text: String,
    pub sentiment: Sentiment,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterForm {
    /// Build the equivalent [`FilterSet`].
    ///
    /// The company text field is split on commas, trimmed, and cleared of
    /// empty entries, keeping order and case. A date range is produced only
    /// when both ends are set.
    pub fn into_filter_set(self) -> FilterSet {
        let date_range = match (self.date_from, self.date_to) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        };
        FilterSet {
            domains: self.domains,
            companies: split_comma_list(&self.companies_text),
            sentiment: self.sentiment,
            date_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_date;

    #[test]
    fn empty_filter_set_omits_dates() {
        let request = FilterSet::default().to_request();
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("date_from").is_none());
        assert!(json.get("date_to").is_none());
        assert_eq!(json["sentiment_filter"], "all");
        assert_eq!(json["domains"], serde_json::json!([]));
    }

    #[test]
    fn date_range_serializes_as_epoch_millis() {
        let filters = FilterSet {
            date_range: Some(DateRange {
                start: parse_date("2024-01-01").unwrap(),
                end: parse_date("2024-01-31").unwrap(),
            }),
            ..Default::default()
        };
        let request = filters.to_request();

        let from = request.date_from.unwrap();
        let to = request.date_to.unwrap();
        assert_eq!(to - from, 30 * 24 * 60 * 60 * 1000);
        // 2024-01-01 local midnight is within 14h of the UTC epoch value
        assert!((from - 1_704_067_200_000_i64).abs() <= 14 * 60 * 60 * 1000);
    }

    #[test]
    fn form_splits_company_text() {
        let form = FilterForm {
            companies_text: "Meta, iFixit ,, ##F ".to_string(),
            ..Default::default()
        };
        let filters = form.into_filter_set();
        assert_eq!(filters.companies, vec!["Meta", "iFixit", "##F"]);
    }

    #[test]
    fn form_requires_both_dates_for_a_range() {
        let form = FilterForm {
            date_from: parse_date("2024-01-01"),
            ..Default::default()
        };
        assert!(form.into_filter_set().date_range.is_none());
    }

    #[test]
    fn form_carries_domains_and_sentiment() {
        let form = FilterForm {
            domains: vec!["finance".to_string()],
            sentiment: Sentiment::Negative,
            ..Default::default()
        };
        let filters = form.into_filter_set();
        assert_eq!(filters.domains, vec!["finance"]);
        assert_eq!(filters.sentiment, Sentiment::Negative);
    }

    #[test]
    fn parsed_query_serializes_like_equivalent_form() {
        let parsed = crate::filters::parser::parse_query("domain:finance AND company:Meta");
        let form = FilterForm {
            domains: vec!["finance".to_string()],
            companies_text: "Meta".to_string(),
            ..Default::default()
        };
        assert_eq!(parsed.to_request(), form.into_filter_set().to_request());
    }
}
