//! Shared test utilities for CLI end-to-end tests.
//!
//! This module provides a mock API server fixture, canned payloads and a
//! command builder wired to the fixture.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let mut api = ApiFixture::new();
//!     let _m = api.search_ok(payloads::SEARCH_TWO_ITEMS);
//!     api.command().args(["search", "-q", "x"]).assert().success();
//! }
//! ```

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use mockito::Matcher;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::payloads;
    pub use super::ApiFixture;
}

/// Canned API response bodies.
#[allow(dead_code)]
pub mod payloads {
    /// A search page with one complete item and one sparse item.
    pub const SEARCH_TWO_ITEMS: &str = r#"{
  "total_count": 1234,
  "incomplete_results": false,
  "items": [
    {
      "name": "fastapi",
      "full_name": "tiangolo/fastapi",
      "owner": {"login": "tiangolo"},
      "description": "FastAPI framework, high performance, easy to learn",
      "html_url": "https://github.com/tiangolo/fastapi",
      "stargazers_count": 71234,
      "forks_count": 6000,
      "open_issues_count": 400,
      "language": "Python",
      "license": {"key": "mit", "spdx_id": "MIT"},
      "created_at": "2018-12-08T08:21:47Z",
      "updated_at": "2024-05-01T00:00:00Z",
      "pushed_at": "2024-05-02T09:00:00Z",
      "topics": ["api", "python"],
      "homepage": "https://fastapi.tiangolo.com"
    },
    {
      "name": "tiny",
      "full_name": "someone/tiny",
      "description": null,
      "language": null,
      "license": null
    }
  ]
}"#;

    /// A search page with no matches.
    pub const SEARCH_EMPTY: &str = r#"{"total_count": 0, "incomplete_results": false, "items": []}"#;

    /// A single-repository payload.
    pub const REPO_DETAIL: &str = r#"{
  "name": "cargo",
  "full_name": "rust-lang/cargo",
  "owner": {"login": "rust-lang"},
  "description": "The Rust package manager",
  "html_url": "https://github.com/rust-lang/cargo",
  "stargazers_count": 12500,
  "forks_count": 2400,
  "watchers_count": 12500,
  "open_issues_count": 1500,
  "language": "Rust",
  "license": {"spdx_id": "Apache-2.0"},
  "created_at": "2014-03-03T20:09:13Z",
  "updated_at": "2024-05-01T00:00:00Z",
  "pushed_at": "2024-05-02T00:00:00Z",
  "topics": ["rust", "package-manager"],
  "homepage": "https://doc.rust-lang.org/cargo",
  "default_branch": "master",
  "size": 70000,
  "subscribers_count": 210,
  "network_count": 2400,
  "has_wiki": false,
  "has_pages": false,
  "has_discussions": true
}"#;
}

/// A mock GitHub API server plus a command pointed at it.
///
/// Colors are disabled and `RUST_LOG` is cleared so output is stable.
pub struct ApiFixture {
    pub server: mockito::ServerGuard,
}

impl ApiFixture {
    /// Start a fresh mock server.
    pub fn new() -> Self {
        Self {
            server: mockito::Server::new(),
        }
    }

    /// Create a command for the binary, pointed at this fixture's server.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("project-finder");
        cmd.env("PROJECT_FINDER_API_URL", self.server.url())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Serve `body` for any search request.
    #[allow(dead_code)]
    pub fn search_ok(&mut self, body: &str) -> mockito::Mock {
        self.server
            .mock("GET", "/search/repositories")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-ratelimit-remaining", "59")
            .with_header("x-ratelimit-reset", "1700000000")
            .with_body(body)
            .create()
    }

    /// Fail every search request with `status`.
    #[allow(dead_code)]
    pub fn search_status(&mut self, status: usize) -> mockito::Mock {
        self.server
            .mock("GET", "/search/repositories")
            .match_query(mockito::Matcher::Any)
            .with_status(status)
            .with_body(r#"{"message": "error"}"#)
            .create()
    }
}

impl Default for ApiFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse stdout of a finished command as JSON.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
