//! # Prevently Engine
//!
//! Query filter engine for the Prevently market-sentiment product. News
//! articles are scored for sentiment and grouped by market domain and
//! company; all data lives behind an external HTTP API. This crate parses
//! the free-text filter language, serializes structured filters into
//! analytics requests, mirrors filter state in URL query pairs, and ships a
//! small CLI for exercising the whole path.
//!
//! ```
//! use prevently_engine::filters::parse_query;
//!
//! let request = parse_query("domain:finance AND sentiment:positive").to_request();
//! assert_eq!(request.domains, vec!["finance"]);
//! ```

pub mod api;
pub mod app;
pub mod core;
pub mod domain;
pub mod filters;
pub mod utils;

pub use app::CoreApp;
