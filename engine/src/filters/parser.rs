//! Filter query parsing
//!
//! Parses the free-text filter language into a [`FilterSet`]. A query is
//! zero or more `key:value` clauses joined by `AND`/`OR` connectives:
//!
//! ```text
//! domain:finance AND company:"Acme Corp" AND sentiment:positive AND date:2024-01-01..2024-01-31
//! ```
//!
//! Both connectives reduce to conjunction; `OR` is recognized but not given
//! distinct meaning (known limitation of the query language, not of this
//! parser). Parsing is fail-open: a clause that matches nothing is silently
//! ignored, and the worst possible outcome for any input is the all-default
//! filter set, which callers treat as "apply no filter change".

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::sentiment::Sentiment;
use crate::filters::types::{DateRange, FilterSet};
use crate::utils::time::parse_date;

/// Clause connectives, case-insensitive, surrounded by whitespace
static CONNECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:AND|OR)\s+").expect("Invalid regex"));

static DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"domain:(\w+)").expect("Invalid regex"));

/// Quoted value first so `company:"Multi Word"` keeps its spaces
static COMPANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"company:(?:"([^"]*)"|(\S+))"#).expect("Invalid regex"));

static SENTIMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sentiment:(\w+)").expect("Invalid regex"));

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"date:(\d{4}-\d{2}-\d{2})\.\.(\d{4}-\d{2}-\d{2})").expect("Invalid regex")
});

/// Parse one line of filter query text into a [`FilterSet`].
///
/// Total function: never panics, never errors. Clause tests are independent
/// and non-exclusive, so a single clause may set several fields if several
/// patterns match. `domain:`/`company:` accumulate; `sentiment:`/`date:`
/// overwrite, last match wins.
pub fn parse_query(input: &str) -> FilterSet {
    let mut filters = FilterSet::default();

    for clause in CONNECTIVE.split(input) {
        if clause.contains("domain:") {
            if let Some(c) = DOMAIN.captures(clause) {
                filters.domains.push(c[1].to_string());
            }
        }
        if clause.contains("company:") {
            if let Some(c) = COMPANY.captures(clause) {
                if let Some(name) = c.get(1).or_else(|| c.get(2)) {
                    filters.companies.push(name.as_str().to_string());
                }
            }
        }
        if clause.contains("sentiment:") {
            if let Some(c) = SENTIMENT.captures(clause) {
                // Unknown bucket names are ignored like any unrecognized clause
                if let Ok(sentiment) = Sentiment::from_str(&c[1]) {
                    filters.sentiment = sentiment;
                }
            }
        }
        if clause.contains("date:") {
            if let Some(c) = DATE.captures(clause) {
                if let (Some(start), Some(end)) = (parse_date(&c[1]), parse_date(&c[2])) {
                    filters.date_range = Some(DateRange { start, end });
                }
            }
        }
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_domain_clause() {
        let filters = parse_query("domain:finance");
        assert_eq!(filters.domains, vec!["finance"]);
        assert!(filters.companies.is_empty());
        assert_eq!(filters.sentiment, Sentiment::All);
        assert!(filters.date_range.is_none());
    }

    #[test]
    fn parse_quoted_company_keeps_spaces() {
        let filters = parse_query(r#"company:"Multi Word""#);
        assert_eq!(filters.companies, vec!["Multi Word"]);
    }

    #[test]
    fn parse_bare_company() {
        let filters = parse_query("company:Meta");
        assert_eq!(filters.companies, vec!["Meta"]);
    }

    #[test]
    fn parse_date_range() {
        let filters = parse_query("date:2024-01-01..2024-01-31");
        let range = filters.date_range.unwrap();
        assert_eq!(range.start.to_string(), "2024-01-01");
        assert_eq!(range.end.to_string(), "2024-01-31");
    }

    #[test]
    fn parse_full_query() {
        let filters = parse_query(
            r#"domain:technology AND company:"Acme Corp" AND sentiment:positive AND date:2024-01-01..2024-01-31"#,
        );
        assert_eq!(filters.domains, vec!["technology"]);
        assert_eq!(filters.companies, vec!["Acme Corp"]);
        assert_eq!(filters.sentiment, Sentiment::Positive);
        assert!(filters.date_range.is_some());
    }

    #[test]
    fn connectives_are_case_insensitive_and_conjunctive() {
        let filters = parse_query("domain:finance or domain:healthcare And sentiment:negative");
        assert_eq!(filters.domains, vec!["finance", "healthcare"]);
        assert_eq!(filters.sentiment, Sentiment::Negative);
    }

    #[test]
    fn repeated_domains_accumulate() {
        let filters = parse_query("domain:finance AND domain:technology");
        assert_eq!(filters.domains, vec!["finance", "technology"]);
    }

    #[test]
    fn repeated_sentiment_last_wins() {
        let filters = parse_query("sentiment:positive AND sentiment:negative");
        assert_eq!(filters.sentiment, Sentiment::Negative);
    }

    #[test]
    fn unknown_sentiment_word_is_ignored() {
        let filters = parse_query("sentiment:bullish");
        assert_eq!(filters.sentiment, Sentiment::All);
    }

    #[test]
    fn garbage_clause_is_ignored() {
        let filters = parse_query("frobnicate:yes AND domain:finance");
        assert_eq!(filters.domains, vec!["finance"]);
        assert!(filters.companies.is_empty());
    }

    #[test]
    fn empty_input_yields_defaults() {
        assert_eq!(parse_query(""), FilterSet::default());
    }

    #[test]
    fn malformed_input_never_panics() {
        for input in [
            "AND AND AND",
            r#"company:"unterminated"#,
            "date:2024-13-99..2024-00-00",
            "domain: AND company:",
            ":::",
        ] {
            let filters = parse_query(input);
            // Worst case is an empty filter set, never a crash
            assert!(
                filters.date_range.is_none(),
                "no range expected for {:?}",
                input
            );
        }
    }

    #[test]
    fn invalid_calendar_dates_ignore_the_clause() {
        let filters = parse_query("date:2024-02-30..2024-03-01");
        assert!(filters.date_range.is_none());
    }

    #[test]
    fn reparse_of_own_clauses_is_idempotent() {
        let first = parse_query("domain:a AND sentiment:positive");
        let reparsed = parse_query(&format!(
            "domain:{} AND sentiment:{}",
            first.domains[0], first.sentiment
        ));
        assert_eq!(first, reparsed);
    }

    #[test]
    fn unterminated_quote_falls_back_to_bare_token() {
        // The quoted alternative cannot match, the bare one grabs up to whitespace
        let filters = parse_query(r#"company:"Acme Corp"#);
        assert_eq!(filters.companies, vec![r#""Acme"#]);
    }
}
