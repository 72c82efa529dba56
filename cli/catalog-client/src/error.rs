//! Error handling for catalog API operations.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::types::CatalogId;

/// The backend's error envelope: `{"error": ..., "details": ...}`.
///
/// `details` is only present on validation failures, where it carries
/// the field-describing message produced by server-side validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Common error type for catalog API operations.
#[derive(Debug, Error)]
pub enum CatalogClientError {
    /// The backend reported 404 for a by-id operation.
    #[error("{message}")]
    NotFound { id: CatalogId, message: String },

    /// The backend rejected a write with field-describing detail text.
    #[error("{message}")]
    Validation { message: String, details: String },

    /// Any other non-success response.
    #[error("{status}: {message}")]
    ErrorResponse { status: StatusCode, message: String },

    /// Transport failure, the server was never reached or the
    /// connection broke mid-request.
    #[error("could not reach the catalog service")]
    Request(#[source] reqwest::Error),

    /// The server answered but the body was not the expected shape.
    #[error("failed to read response from the catalog service")]
    Response(#[source] reqwest::Error),

    #[error("invalid catalog URL")]
    InvalidUrl(#[source] url::ParseError),

    #[error("{0}")]
    Other(String),
}

/// Map a non-success response onto [CatalogClientError].
///
/// Pass the id for by-id operations so a 404 becomes [`NotFound`]
/// rather than a generic error response.
///
/// [`NotFound`]: CatalogClientError::NotFound
pub(crate) async fn error_for_response(
    response: reqwest::Response,
    id: Option<CatalogId>,
) -> CatalogClientError {
    let status = response.status();

    // The envelope is best-effort: proxies and crashes can hand back
    // HTML or an empty body, in which case only the status is usable.
    let envelope = response.json::<ErrorEnvelope>().await.ok();

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            let message = envelope
                .map(|e| e.error)
                .unwrap_or_else(|| format!("Catalog with ID {id} not found."));
            return CatalogClientError::NotFound { id, message };
        }
    }

    if status == StatusCode::BAD_REQUEST {
        return match envelope {
            Some(ErrorEnvelope {
                error,
                details: Some(details),
            }) => CatalogClientError::Validation {
                message: error,
                details,
            },
            other => CatalogClientError::ErrorResponse {
                status,
                message: fallback_message(other, status),
            },
        };
    }

    CatalogClientError::ErrorResponse {
        status,
        message: fallback_message(envelope, status),
    }
}

fn fallback_message(envelope: Option<ErrorEnvelope>, status: StatusCode) -> String {
    envelope.map(|e| e.error).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string()
    })
}
