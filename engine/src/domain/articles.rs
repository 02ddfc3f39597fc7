//! News article model and client-side filtering
//!
//! Articles arrive from the news endpoints already scored; this module holds
//! their shape, the predicate that applies a [`FilterSet`] to a loaded batch
//! without another round trip, and the "news pulse" aggregate shown above
//! filtered lists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::types::Domain;
use crate::core::constants::DESCRIPTION_MAX_LENGTH;
use crate::domain::sentiment::Sentiment;
use crate::filters::FilterSet;
use crate::utils::string::{parse_companies, truncate_description};
use crate::utils::time::date_to_epoch_millis;

/// A scored news article as returned by the news endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub domain: Domain,
    /// May be a JSON array or a Python-repr-like string; see
    /// [`parse_companies`]
    #[serde(default)]
    pub companies: Value,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_url: String,
    pub sentiment_numeric: f64,
    #[serde(default)]
    pub sentiment_sublabel: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl Article {
    /// Company names, decoded through the compatibility adapter
    pub fn company_names(&self) -> Vec<String> {
        parse_companies(&self.companies)
    }

    /// Sentiment bucket of this article's score
    pub fn sentiment_bucket(&self) -> Sentiment {
        Sentiment::from_score(self.sentiment_numeric)
    }

    /// Description shortened for list rendering
    pub fn description_preview(&self) -> String {
        truncate_description(&self.description, DESCRIPTION_MAX_LENGTH)
    }
}

impl FilterSet {
    /// Does this article pass every dimension of the filter?
    ///
    /// Unset dimensions match everything. Domains match on id or display
    /// name, companies on exact name, dates against local-midnight bounds
    /// with the end day included.
    pub fn matches(&self, article: &Article) -> bool {
        let domain_match = self.domains.is_empty()
            || self.domains.contains(&article.domain.id)
            || self.domains.contains(&article.domain.name);

        let company_match = self.companies.is_empty() || {
            let names = article.company_names();
            self.companies.iter().any(|c| names.contains(c))
        };

        let sentiment_match =
            self.sentiment == Sentiment::All || self.sentiment == article.sentiment_bucket();

        let date_match = match &self.date_range {
            None => true,
            Some(range) => {
                let from = date_to_epoch_millis(range.start);
                let to = range
                    .end
                    .succ_opt()
                    .map(date_to_epoch_millis)
                    .unwrap_or(i64::MAX);
                article.timestamp >= from && article.timestamp < to
            }
        };

        domain_match && company_match && sentiment_match && date_match
    }
}

/// Aggregate sentiment over a batch of articles
#[derive(Debug, Clone, PartialEq)]
pub struct NewsPulse {
    pub average: f64,
    pub trend: Sentiment,
}

/// Average score and bucket trend for the given articles.
///
/// An empty batch is reported as neutral with a zero average.
pub fn news_pulse(articles: &[Article]) -> NewsPulse {
    if articles.is_empty() {
        return NewsPulse {
            average: 0.0,
            trend: Sentiment::Neutral,
        };
    }
    let average =
        articles.iter().map(|a| a.sentiment_numeric).sum::<f64>() / articles.len() as f64;
    NewsPulse {
        average,
        trend: Sentiment::from_score(average),
    }
}
