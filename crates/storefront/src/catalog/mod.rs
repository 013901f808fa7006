//! Product API client.
//!
//! # Architecture
//!
//! - Plain JSON over HTTP with `reqwest`
//! - The product API is the source of truth - NO local sync, direct calls
//! - Optional in-memory caching via `moka` for the catalog snapshot and
//!   single-product lookups (`CATALOG_CACHE_TTL_SECS`)
//!
//! # Endpoints
//!
//! ```text
//! GET /api/product/products           full catalog snapshot
//! GET /api/product/search?brand=<q>   brand search
//! GET /api/product/{id}               single product (404 = not found)
//! ```

mod cache;
mod client;
mod conversions;
pub mod types;

pub use client::HttpProductRepository;

use thiserror::Error;

/// Errors that can occur when talking to the product API.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Product API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = RepositoryError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product API returned HTTP 503: maintenance"
        );
    }
}
