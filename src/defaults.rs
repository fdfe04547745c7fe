//! Default values for project-finder configuration.
//!
//! This module provides centralized default values used by the client and
//! the commands, ensuring consistency and avoiding duplication.

use std::time::Duration;

/// Base URL of the public GitHub REST API.
///
/// This can be overridden by the `--api-url` CLI flag or the
/// `PROJECT_FINDER_API_URL` environment variable.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type pinning the v3 REST API.
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// User agent sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = "GitHub-Project-Finder/1.0";

/// Upper bound for a single request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Results per page when `--limit` is not given.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page the search endpoint will return.
pub const MAX_LIMIT: u32 = 100;

/// Value reported for a rate-limit header the response did not carry.
pub const UNKNOWN_HEADER_VALUE: &str = "unknown";
