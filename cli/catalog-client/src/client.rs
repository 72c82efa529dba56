//! HTTP client for the catalog service.

use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{self, HeaderMap};
use tracing::debug;
use url::Url;

use crate::config::CatalogClientConfig;
use crate::error::{error_for_response, CatalogClientError};
use crate::mock::MockClient;
use crate::types::{CatalogId, CatalogRecord, CatalogSubmission, MaybeEnveloped, SaveReceipt};

/// The complete catalog API interface.
///
/// This trait enables alternate implementations:
/// - **HTTP**: REST calls to the catalog service via [`CatalogClient`]
/// - **Mock**: canned responses without HTTP, for consumer tests
#[allow(async_fn_in_trait)]
pub trait ClientTrait {
    /// Fetch all records, optionally filtered by a search term.
    async fn list_catalogs(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<CatalogRecord>, CatalogClientError>;

    /// Fetch a single record by id.
    async fn get_catalog(&self, id: CatalogId) -> Result<CatalogRecord, CatalogClientError>;

    /// Create a new record.
    async fn create_catalog(
        &self,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError>;

    /// Update the record with the given id.
    async fn update_catalog(
        &self,
        id: CatalogId,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError>;

    /// Delete the record with the given id.
    async fn delete_catalog(&self, id: CatalogId) -> Result<SaveReceipt, CatalogClientError>;
}

/// A client for the catalog service.
///
/// Wraps a [reqwest::Client] configured with default headers and
/// timeouts, and maps responses onto domain types and
/// [CatalogClientError].
#[derive(Debug)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogClientError> {
        let base_url = Url::parse(&config.base_url).map_err(CatalogClientError::InvalidUrl)?;
        let client = build_http_client(&config)?;
        Ok(Self { client, base_url })
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> Result<Url, CatalogClientError> {
        self.base_url
            .join("api/catalogs")
            .map_err(CatalogClientError::InvalidUrl)
    }

    fn record_url(&self, id: CatalogId) -> Result<Url, CatalogClientError> {
        self.base_url
            .join(&format!("api/catalogs/{id}"))
            .map_err(CatalogClientError::InvalidUrl)
    }
}

impl ClientTrait for CatalogClient {
    async fn list_catalogs(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<CatalogRecord>, CatalogClientError> {
        let mut url = self.collection_url()?;
        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            url.query_pairs_mut().append_pair("search", term);
        }

        debug!(%url, "fetching catalog list");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CatalogClientError::Request)?;

        if !response.status().is_success() {
            return Err(error_for_response(response, None).await);
        }

        let records: MaybeEnveloped<Vec<CatalogRecord>> = response
            .json()
            .await
            .map_err(CatalogClientError::Response)?;
        let records = records.into_inner();
        debug!(n_records = records.len(), "received catalog list");
        Ok(records)
    }

    async fn get_catalog(&self, id: CatalogId) -> Result<CatalogRecord, CatalogClientError> {
        debug!(%id, "fetching catalog");
        let response = self
            .client
            .get(self.record_url(id)?)
            .send()
            .await
            .map_err(CatalogClientError::Request)?;

        if !response.status().is_success() {
            return Err(error_for_response(response, Some(id)).await);
        }

        let record: MaybeEnveloped<CatalogRecord> = response
            .json()
            .await
            .map_err(CatalogClientError::Response)?;
        Ok(record.into_inner())
    }

    async fn create_catalog(
        &self,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError> {
        debug!(name = %submission.name, "creating catalog");
        let response = self
            .client
            .post(self.collection_url()?)
            .json(submission)
            .send()
            .await
            .map_err(CatalogClientError::Request)?;

        if !response.status().is_success() {
            return Err(error_for_response(response, None).await);
        }

        response.json().await.map_err(CatalogClientError::Response)
    }

    async fn update_catalog(
        &self,
        id: CatalogId,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError> {
        debug!(%id, "updating catalog");
        let response = self
            .client
            .put(self.record_url(id)?)
            .json(submission)
            .send()
            .await
            .map_err(CatalogClientError::Request)?;

        if !response.status().is_success() {
            return Err(error_for_response(response, Some(id)).await);
        }

        response.json().await.map_err(CatalogClientError::Response)
    }

    async fn delete_catalog(&self, id: CatalogId) -> Result<SaveReceipt, CatalogClientError> {
        debug!(%id, "deleting catalog");
        let response = self
            .client
            .delete(self.record_url(id)?)
            .send()
            .await
            .map_err(CatalogClientError::Request)?;

        if !response.status().is_success() {
            return Err(error_for_response(response, Some(id)).await);
        }

        response.json().await.map_err(CatalogClientError::Response)
    }
}

// ---------------------------------------------------------------------------
// Client dispatch
// ---------------------------------------------------------------------------

/// Either a real HTTP client or a mock with canned responses.
#[derive(Debug)]
pub enum Client {
    Catalog(CatalogClient),
    Mock(MockClient),
}

impl From<CatalogClient> for Client {
    fn from(client: CatalogClient) -> Self {
        Client::Catalog(client)
    }
}

impl From<MockClient> for Client {
    fn from(client: MockClient) -> Self {
        Client::Mock(client)
    }
}

impl ClientTrait for Client {
    async fn list_catalogs(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<CatalogRecord>, CatalogClientError> {
        match self {
            Client::Catalog(client) => client.list_catalogs(search).await,
            Client::Mock(client) => client.list_catalogs(search).await,
        }
    }

    async fn get_catalog(&self, id: CatalogId) -> Result<CatalogRecord, CatalogClientError> {
        match self {
            Client::Catalog(client) => client.get_catalog(id).await,
            Client::Mock(client) => client.get_catalog(id).await,
        }
    }

    async fn create_catalog(
        &self,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError> {
        match self {
            Client::Catalog(client) => client.create_catalog(submission).await,
            Client::Mock(client) => client.create_catalog(submission).await,
        }
    }

    async fn update_catalog(
        &self,
        id: CatalogId,
        submission: &CatalogSubmission,
    ) -> Result<SaveReceipt, CatalogClientError> {
        match self {
            Client::Catalog(client) => client.update_catalog(id, submission).await,
            Client::Mock(client) => client.update_catalog(id, submission).await,
        }
    }

    async fn delete_catalog(&self, id: CatalogId) -> Result<SaveReceipt, CatalogClientError> {
        match self {
            Client::Catalog(client) => client.delete_catalog(id).await,
            Client::Mock(client) => client.delete_catalog(id).await,
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP client builder
// ---------------------------------------------------------------------------

/// Build the HTTP client with default headers and timeouts.
fn build_http_client(config: &CatalogClientConfig) -> Result<reqwest::Client, CatalogClientError> {
    let mut headers = HeaderMap::new();

    for (key, value) in &config.extra_headers {
        headers.insert(
            header::HeaderName::from_str(key).map_err(
                |e: reqwest::header::InvalidHeaderName| CatalogClientError::Other(e.to_string()),
            )?,
            header::HeaderValue::from_str(value).map_err(
                |e: reqwest::header::InvalidHeaderValue| CatalogClientError::Other(e.to_string()),
            )?,
        );
    }

    debug!(
        base_url = %config.base_url,
        extra_headers = config.extra_headers.len(),
        "building catalog HTTP client"
    );

    let client_builder = reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(60));

    let client_builder = if let Some(ref user_agent) = config.user_agent {
        client_builder.user_agent(user_agent)
    } else {
        client_builder
    };

    client_builder
        .build()
        .map_err(|e| CatalogClientError::Other(e.to_string()))
}
