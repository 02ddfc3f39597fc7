//! External sentiment API
//!
//! The engine produces filter requests and hands them to an external HTTP
//! API; this module is that seam. Network and HTTP failures surface as
//! [`ApiClientError`] and are the caller's concern.

mod client;
mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiClientError;
