//! Sentiment buckets
//!
//! Numeric sentiment scores are bucketed with fixed thresholds: at or above
//! 0.1 is positive, at or below -0.1 is negative, everything between is
//! neutral. Every surface that colors or groups by sentiment goes through
//! this module so the thresholds cannot drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::constants::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

/// Sentiment filter value, `All` meaning "unfiltered"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[default]
    All,
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Bucket a numeric score. Never returns `All`.
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(format!("Unknown sentiment: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_score_positive_threshold_inclusive() {
        assert_eq!(Sentiment::from_score(0.1), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.9), Sentiment::Positive);
    }

    #[test]
    fn from_score_negative_threshold_inclusive() {
        assert_eq!(Sentiment::from_score(-0.1), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(-1.0), Sentiment::Negative);
    }

    #[test]
    fn from_score_neutral_band() {
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.099), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.099), Sentiment::Neutral);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("POSITIVE".parse::<Sentiment>(), Ok(Sentiment::Positive));
        assert_eq!("Neutral".parse::<Sentiment>(), Ok(Sentiment::Neutral));
        assert_eq!("negative".parse::<Sentiment>(), Ok(Sentiment::Negative));
        assert_eq!("all".parse::<Sentiment>(), Ok(Sentiment::All));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("bullish".parse::<Sentiment>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for s in [
            Sentiment::All,
            Sentiment::Positive,
            Sentiment::Neutral,
            Sentiment::Negative,
        ] {
            assert_eq!(s.to_string().parse::<Sentiment>(), Ok(s));
        }
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            r#""positive""#
        );
        let parsed: Sentiment = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(parsed, Sentiment::All);
    }
}
