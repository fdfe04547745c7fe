//! # Repository Data Model
//!
//! Two families of types live here:
//!
//! - **Raw shapes** (`RawRepository`, `RawOwner`, `RawLicense`,
//!   `RawSearchResponse`) mirror the API's JSON. Every field is optional so
//!   that any partial object deserializes; nothing is defaulted at this stage.
//!   A field of the wrong type reads as absent, and list entries that do not
//!   decode are dropped, so one odd value never fails a whole page.
//! - **Output shapes** (`RepositorySummary`, `RepositoryDetail`) are the
//!   stable schema printed by the tool. Every field is filled; see
//!   [`crate::format`] for the placeholder rules.
//!
//! The report envelopes at the bottom of the module are what the CLI
//! serializes to JSON.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ErrorKind};

/// Owner object nested in a repository payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOwner {
    #[serde(deserialize_with = "lenient")]
    pub login: Option<String>,
}

/// License object nested in a repository payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLicense {
    #[serde(deserialize_with = "lenient")]
    pub spdx_id: Option<String>,
}

/// A repository as returned by `/search/repositories` items and
/// `/repos/{owner}/{repo}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRepository {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub owner: Option<RawOwner>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub html_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stargazers_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub forks_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub open_issues_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub license: Option<RawLicense>,
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub pushed_at: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub topics: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub homepage: Option<String>,

    // Only present on the single-repository endpoint.
    #[serde(deserialize_with = "lenient")]
    pub watchers_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub subscribers_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub network_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub default_branch: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub has_wiki: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub has_pages: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub has_discussions: Option<bool>,
}

/// Body of `/search/repositories`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchResponse {
    #[serde(deserialize_with = "lenient")]
    pub total_count: Option<u64>,
    #[serde(deserialize_with = "lenient_list")]
    pub items: Option<Vec<RawRepository>>,
}

/// Decode an optional field, treating a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode an optional list, dropping entries that fail to decode.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(Some(
            entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value(entry).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// One entry of a search result listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: String,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: String,
    pub license: String,
    pub created_at: String,
    pub updated_at: String,
    pub pushed_at: String,
    pub topics: Vec<String>,
    pub homepage: String,
}

/// Full metadata for a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDetail {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: String,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub language: String,
    pub license: String,
    pub created_at: String,
    pub updated_at: String,
    pub pushed_at: String,
    pub topics: Vec<String>,
    pub homepage: String,
    pub default_branch: String,
    pub size: u64,
    pub subscribers_count: u64,
    pub network_count: u64,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub has_discussions: bool,
}

/// Rate-limit headers of a response, kept as the raw header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    pub remaining: String,
    pub reset: String,
}

/// A formatted page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub total_count: u64,
    pub items: Vec<RepositorySummary>,
    pub rate_limit: RateLimit,
}

/// JSON envelope for a successful search.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub success: bool,
    pub total_count: u64,
    pub items: &'a [RepositorySummary],
    pub rate_limit_remaining: &'a str,
    pub rate_limit_reset: &'a str,
}

impl<'a> From<&'a SearchPage> for SearchReport<'a> {
    fn from(page: &'a SearchPage) -> Self {
        Self {
            success: true,
            total_count: page.total_count,
            items: &page.items,
            rate_limit_remaining: &page.rate_limit.remaining,
            rate_limit_reset: &page.rate_limit.reset,
        }
    }
}

/// JSON envelope for a successful detail lookup.
#[derive(Debug, Serialize)]
pub struct DetailReport<'a> {
    pub success: bool,
    pub data: &'a RepositoryDetail,
}

impl<'a> From<&'a RepositoryDetail> for DetailReport<'a> {
    fn from(data: &'a RepositoryDetail) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// JSON envelope for any failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
    pub error_kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_reset: Option<String>,
}

impl From<&Error> for FailureReport {
    fn from(error: &Error) -> Self {
        let rate_limit_reset = match error {
            Error::RateLimited { reset } => reset.clone(),
            _ => None,
        };
        Self {
            success: false,
            error: error.to_string(),
            error_kind: error.kind(),
            error_code: error.code(),
            rate_limit_reset,
        }
    }
}
