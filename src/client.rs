//! # GitHub API Client
//!
//! A blocking HTTP client for the two endpoints the tool uses:
//!
//! - `GET /search/repositories?q=...` for listings
//! - `GET /repos/{owner}/{repo}` for single-repository metadata
//!
//! Every request carries the v3 `Accept` header and a fixed `User-Agent`, and
//! is bounded by a 30 second timeout. Responses are classified as follows:
//!
//! | Outcome                        | Result                       |
//! |--------------------------------|------------------------------|
//! | 2xx with decodable JSON        | `Ok`                         |
//! | 403                            | [`Error::RateLimited`]       |
//! | 422                            | [`Error::MalformedQuery`]    |
//! | other status                   | [`Error::Http`]              |
//! | DNS / connect / timeout / read | [`Error::Network`]           |
//! | anything else                  | [`Error::Unexpected`]        |
//!
//! Nothing is retried. A failed request is reported once and the caller
//! decides what to do next.
//!
//! ## Design
//!
//! Commands talk to the API through the [`RepositoryApi`] trait, which
//! [`GitHubClient`] implements. Tests can substitute an in-memory
//! implementation and exercise command output without a server.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

use crate::defaults::{
    ACCEPT_HEADER, DEFAULT_API_URL, REQUEST_TIMEOUT, UNKNOWN_HEADER_VALUE, USER_AGENT,
};
use crate::error::{Error, Result};
use crate::format;
use crate::models::{RateLimit, RawRepository, RawSearchResponse, RepositoryDetail, SearchPage};
use crate::query::SearchQuery;
use crate::repo_ref::RepoRef;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Operations the commands need from the repository-hosting API.
pub trait RepositoryApi {
    /// Run a repository search and format the page.
    fn search(&self, query: &SearchQuery) -> Result<SearchPage>;

    /// Fetch and format one repository.
    fn repository(&self, repo: &RepoRef) -> Result<RepositoryDetail>;
}

/// Connection settings for [`GitHubClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub accept: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT_HEADER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default settings pointed at another API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

/// A decoded JSON body together with the response's rate-limit headers.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub body: T,
    pub rate_limit: RateLimit,
}

/// Blocking client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let accept = HeaderValue::from_str(&config.accept)
            .map_err(|e| Error::invalid_input(format!("invalid Accept header: {e}")))?;
        headers.insert(ACCEPT, accept);

        let http = Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected {
                description: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path_and_query` relative to the API root and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<ApiResponse<T>> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().map_err(|e| {
            let error = Error::from(e);
            warn!("Request to {} failed: {}", url, error);
            error
        })?;

        let status = response.status();
        let rate_limit = read_rate_limit(&response);
        debug!(
            "{} -> {} (rate limit remaining: {}, reset: {})",
            url, status, rate_limit.remaining, rate_limit.reset
        );

        if !status.is_success() {
            let reset = header_value(&response, RATE_LIMIT_RESET);
            let error = Error::from_status(status.as_u16(), reset);
            warn!("Request to {} failed: {}", url, error);
            return Err(error);
        }

        let body = response.json::<T>().map_err(Error::from)?;
        Ok(ApiResponse { body, rate_limit })
    }
}

impl RepositoryApi for GitHubClient {
    fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let path = format!("/search/repositories?{}", query.to_query_string());
        let response: ApiResponse<RawSearchResponse> = self.get_json(&path)?;

        Ok(SearchPage {
            total_count: response.body.total_count.unwrap_or(0),
            items: format::summarize_all(response.body.items.unwrap_or_default()),
            rate_limit: response.rate_limit,
        })
    }

    fn repository(&self, repo: &RepoRef) -> Result<RepositoryDetail> {
        let response: ApiResponse<RawRepository> = self.get_json(&repo.api_path())?;
        Ok(format::detail(response.body))
    }
}

fn header_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn read_rate_limit(response: &Response) -> RateLimit {
    RateLimit {
        remaining: header_value(response, RATE_LIMIT_REMAINING)
            .unwrap_or_else(|| UNKNOWN_HEADER_VALUE.to_string()),
        reset: header_value(response, RATE_LIMIT_RESET)
            .unwrap_or_else(|| UNKNOWN_HEADER_VALUE.to_string()),
    }
}
