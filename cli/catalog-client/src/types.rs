//! Catalog domain types and wire shapes.
//!
//! These types mirror the backend's JSON contract. Responses use the
//! backend's column names (`catalog_id`, `catalog_name`,
//! `catalog_description`) while request bodies use the short keys.

use std::fmt::Display;
use std::num::NonZeroU64;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned to a record by the backend. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(NonZeroU64);

impl CatalogId {
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("catalog id must be a positive integer")]
pub struct ParseCatalogIdError;

impl FromStr for CatalogId {
    type Err = ParseCatalogIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU64>()
            .map(CatalogId)
            .map_err(|_| ParseCatalogIdError)
    }
}

impl TryFrom<u64> for CatalogId {
    type Error = ParseCatalogIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value).map(CatalogId).ok_or(ParseCatalogIdError)
    }
}

impl Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Lifecycle status of a catalog record.
///
/// Input is accepted case-insensitively; the wire form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    Active,
    Inactive,
    Upcoming,
    Expired,
}

impl CatalogStatus {
    pub const ALLOWED: [CatalogStatus; 4] = [
        CatalogStatus::Active,
        CatalogStatus::Inactive,
        CatalogStatus::Upcoming,
        CatalogStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Active => "active",
            CatalogStatus::Inactive => "inactive",
            CatalogStatus::Upcoming => "upcoming",
            CatalogStatus::Expired => "expired",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("status must be one of: active, inactive, upcoming, expired")]
pub struct ParseCatalogStatusError;

impl FromStr for CatalogStatus {
    type Err = ParseCatalogStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(CatalogStatus::Active),
            "inactive" => Ok(CatalogStatus::Inactive),
            "upcoming" => Ok(CatalogStatus::Upcoming),
            "expired" => Ok(CatalogStatus::Expired),
            _ => Err(ParseCatalogStatusError),
        }
    }
}

impl Display for CatalogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "catalog_id")]
    pub id: CatalogId,
    #[serde(rename = "catalog_name")]
    pub name: String,
    #[serde(rename = "catalog_description")]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CatalogStatus,
}

impl CatalogRecord {
    /// Canned record for consumer tests.
    #[cfg(any(test, feature = "tests"))]
    pub fn new_mock(id: u64, name: &str) -> Self {
        CatalogRecord {
            id: CatalogId::try_from(id).expect("mock id must be positive"),
            name: name.to_string(),
            description: format!("{name} description"),
            start_date: NaiveDate::from_ymd_opt(2999, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2999, 12, 31).unwrap(),
            status: CatalogStatus::Upcoming,
        }
    }
}

/// The id-less request body sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSubmission {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CatalogStatus,
}

/// Acknowledgement body returned by write operations.
///
/// Create responses also carry the id assigned to the new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<CatalogId>,
}

/// Response payload that may or may not be wrapped in a `data` envelope.
///
/// Backend versions disagree on whether collections and records come
/// bare or under a `data` key, so the client accepts either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaybeEnveloped<T> {
    Enveloped { data: T },
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub fn into_inner(self) -> T {
        match self {
            MaybeEnveloped::Enveloped { data } => data,
            MaybeEnveloped::Bare(inner) => inner,
        }
    }
}
