//! Query filter engine
//!
//! Parses the free-text filter language into structured [`FilterSet`]s,
//! serializes them into analytics API requests, and mirrors them in URL
//! query state.
//!
//! ## Usage
//!
//! ```
//! use prevently_engine::filters::parse_query;
//!
//! let filters = parse_query(r#"domain:finance AND company:"Acme Corp""#);
//! assert_eq!(filters.domains, vec!["finance"]);
//! assert_eq!(filters.companies, vec!["Acme Corp"]);
//!
//! let request = filters.to_request();
//! assert_eq!(request.domains, vec!["finance"]);
//! ```

mod parser;
mod request;
mod types;
mod url_state;

pub use parser::parse_query;
pub use request::{AnalyticsRequest, FilterForm};
pub use types::{DateRange, FilterSet};
