//! API client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Client configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}
