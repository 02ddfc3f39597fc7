//! Application constants
//!
//! Environment variable names, defaults, and shared numeric constants.
//! Keeping thresholds here prevents UI surfaces from re-deriving them
//! with drifting values.

/// Lowercase app name used in log filters
pub const APP_NAME_LOWER: &str = "prevently";

// Environment variables
pub const ENV_LOG: &str = "PREVENTLY_LOG";
pub const ENV_API_URL: &str = "PREVENTLY_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "PREVENTLY_TIMEOUT_SECS";

/// Default base URL of the sentiment API
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Scores at or above this are bucketed as positive sentiment
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores at or below this are bucketed as negative sentiment
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Default maximum length for article description previews (in characters)
pub const DESCRIPTION_MAX_LENGTH: usize = 150;

/// Market domains used when the domains endpoint is unreachable
pub const FALLBACK_DOMAINS: &[&str] = &["technology", "finance", "healthcare", "consumer goods"];

/// Maximum length of an error body echoed back in error messages
pub const ERROR_BODY_MAX_LENGTH: usize = 200;
