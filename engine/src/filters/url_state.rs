//! Address-bar state mirror
//!
//! Filter state is mirrored into the URL query string so a filtered view can
//! be shared or bookmarked. Only non-default dimensions are written, and
//! reading back is fail-open: unknown keys and garbage values are skipped.

use crate::domain::sentiment::Sentiment;
use crate::filters::types::{DateRange, FilterSet};
use crate::utils::string::split_comma_list;
use crate::utils::time::parse_date;

const KEY_DOMAIN: &str = "domain";
const KEY_COMPANIES: &str = "companies";
const KEY_SENTIMENT: &str = "sentiment_filter";
const KEY_DATE_FROM: &str = "date_from";
const KEY_DATE_TO: &str = "date_to";

impl FilterSet {
    /// Emit the query pairs for this filter set, defaults omitted.
    ///
    /// List dimensions are comma-joined; dates are ISO `YYYY-MM-DD`.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.domains.is_empty() {
            pairs.push((KEY_DOMAIN.to_string(), self.domains.join(",")));
        }
        if !self.companies.is_empty() {
            pairs.push((KEY_COMPANIES.to_string(), self.companies.join(",")));
        }
        if self.sentiment != Sentiment::All {
            pairs.push((KEY_SENTIMENT.to_string(), self.sentiment.to_string()));
        }
        if let Some(range) = &self.date_range {
            pairs.push((KEY_DATE_FROM.to_string(), range.start.to_string()));
            pairs.push((KEY_DATE_TO.to_string(), range.end.to_string()));
        }
        pairs
    }

    /// Rebuild a filter set from query pairs.
    ///
    /// The inverse of [`to_query_pairs`](Self::to_query_pairs). A date range
    /// needs both ends to parse; anything unparseable leaves that dimension
    /// at its default.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filters = FilterSet::default();
        let mut date_from = None;
        let mut date_to = None;

        for (key, value) in pairs {
            match key {
                KEY_DOMAIN => filters.domains = split_comma_list(value),
                KEY_COMPANIES => filters.companies = split_comma_list(value),
                KEY_SENTIMENT => {
                    if let Ok(sentiment) = value.parse() {
                        filters.sentiment = sentiment;
                    }
                }
                KEY_DATE_FROM => date_from = parse_date(value),
                KEY_DATE_TO => date_to = parse_date(value),
                _ => {}
            }
        }

        if let (Some(start), Some(end)) = (date_from, date_to) {
            filters.date_range = Some(DateRange { start, end });
        }
        filters
    }
}
