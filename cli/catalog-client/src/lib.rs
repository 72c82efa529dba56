//! Typed HTTP client for the catalog service.
//!
//! This crate provides:
//! - HTTP client construction with default headers and timeouts
//! - The catalog domain types and their wire shapes, including the
//!   envelope-or-bare response forms older backend versions emit
//! - Common error handling for catalog API operations
//! - A mock client with canned responses for consumer tests
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_client::{CatalogClient, CatalogClientConfig, ClientTrait};
//!
//! let config = CatalogClientConfig {
//!     base_url: "http://127.0.0.1:5000".to_string(),
//!     extra_headers: BTreeMap::new(),
//!     user_agent: None,
//! };
//!
//! let client = CatalogClient::new(config)?;
//! let records = client.list_catalogs(None).await?;
//! ```

mod client;
mod config;
mod error;
mod mock;
mod types;

// Re-exported so consumers can match on error statuses without
// depending on reqwest directly.
pub use reqwest::StatusCode;

pub use client::{CatalogClient, Client, ClientTrait};
pub use config::CatalogClientConfig;
pub use error::{CatalogClientError, ErrorEnvelope};
pub use mock::{MockClient, RecordedCall, Response};
pub use types::{
    CatalogId,
    CatalogRecord,
    CatalogStatus,
    CatalogSubmission,
    MaybeEnveloped,
    ParseCatalogIdError,
    ParseCatalogStatusError,
    SaveReceipt,
};
