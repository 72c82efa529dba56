//! Configuration types for catalog client construction.

use std::collections::BTreeMap;

/// Configuration for catalog client construction.
#[derive(Debug, Clone, Default)]
pub struct CatalogClientConfig {
    /// Base URL for the catalog API.
    pub base_url: String,
    /// Additional headers to include in requests.
    pub extra_headers: BTreeMap<String, String>,
    /// Optional User-Agent header value.
    pub user_agent: Option<String>,
}
