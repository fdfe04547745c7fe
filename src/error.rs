//! # Error Handling
//!
//! This module defines the closed set of failures a search or detail lookup
//! can end in. It uses `thiserror` to derive user-facing messages, and every
//! variant carries the structured context a caller needs to branch on
//! (status code, reset time, reason text) instead of parsing message text.
//!
//! ## Key Components
//!
//! - **`Error`**: The failure taxonomy. Variants map one-to-one onto the
//!   conditions the executor can observe: rate limiting, a rejected query,
//!   any other HTTP status, a transport failure, bad caller input, and a
//!   catch-all for everything else.
//!
//! - **`ErrorKind`**: A fieldless tag for each variant, serialized into the
//!   `error_kind` field of JSON failure reports.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Messages are shown verbatim to the end user and are kept in the same
//! language as the rest of the tool's output.

use serde::Serialize;
use thiserror::Error;

/// Main error type for project-finder operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The API answered 403, which it uses for exhausted anonymous quota.
    ///
    /// `reset` holds the raw `X-RateLimit-Reset` header when the response
    /// carried one.
    #[error("API 限流，请稍后重试")]
    RateLimited { reset: Option<String> },

    /// The API answered 422: the search string is not valid query syntax.
    #[error("查询语法错误")]
    MalformedQuery,

    /// Any other non-success HTTP status.
    #[error("HTTP 错误: {status}")]
    Http { status: u16 },

    /// DNS, connect, timeout, or body-read failure.
    #[error("网络错误: {reason}")]
    Network { reason: String },

    /// The caller supplied arguments that can never form a valid request.
    #[error("{message}")]
    InvalidInput { message: String },

    /// Anything that does not fit the categories above.
    #[error("未知错误: {description}")]
    Unexpected { description: String },
}

/// Machine-readable tag for an [`Error`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RateLimited,
    MalformedQuery,
    Http,
    Network,
    InvalidInput,
    Unexpected,
}

impl Error {
    /// Build an `InvalidInput` error from any message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    /// Classify a non-success HTTP status.
    ///
    /// `reset` is only kept for the rate-limit case.
    pub fn from_status(status: u16, reset: Option<String>) -> Self {
        match status {
            403 => Error::RateLimited { reset },
            422 => Error::MalformedQuery,
            _ => Error::Http { status },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RateLimited { .. } => ErrorKind::RateLimited,
            Error::MalformedQuery => ErrorKind::MalformedQuery,
            Error::Http { .. } => ErrorKind::Http,
            Error::Network { .. } => ErrorKind::Network,
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// The HTTP status behind this error, if it came from a response.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::RateLimited { .. } => Some(403),
            Error::MalformedQuery => Some(422),
            Error::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Error::Unexpected {
                description: error_chain(&err),
            };
        }
        if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            return Error::Network {
                reason: error_chain(&err),
            };
        }
        if let Some(status) = err.status() {
            return Error::from_status(status.as_u16(), None);
        }
        Error::Unexpected {
            description: error_chain(&err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected {
            description: err.to_string(),
        }
    }
}

/// Join an error with its sources, outermost first.
///
/// `reqwest` keeps the useful part (for example "connection refused") in the
/// source chain rather than in its own message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = inner.source();
    }
    out
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_403_is_rate_limited() {
        let error = Error::from_status(403, Some("1700000000".to_string()));
        assert_eq!(error.kind(), ErrorKind::RateLimited);
        assert_eq!(error.code(), Some(403));
        assert_eq!(
            error,
            Error::RateLimited {
                reset: Some("1700000000".to_string())
            }
        );
    }

    #[test]
    fn test_from_status_422_is_malformed_query() {
        let error = Error::from_status(422, Some("ignored".to_string()));
        assert_eq!(error, Error::MalformedQuery);
        assert_eq!(error.code(), Some(422));
    }

    #[test]
    fn test_from_status_other_is_http() {
        let error = Error::from_status(500, None);
        assert_eq!(error, Error::Http { status: 500 });
        assert_eq!(error.kind(), ErrorKind::Http);
        assert_eq!(error.code(), Some(500));
    }

    #[test]
    fn test_error_display_rate_limited() {
        let error = Error::RateLimited { reset: None };
        assert_eq!(format!("{}", error), "API 限流，请稍后重试");
    }

    #[test]
    fn test_error_display_http() {
        let error = Error::Http { status: 404 };
        assert_eq!(format!("{}", error), "HTTP 错误: 404");
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network {
            reason: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("网络错误"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_invalid_input_has_no_code() {
        let error = Error::invalid_input("仓库格式错误，应为 owner/repo");
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
        assert_eq!(error.code(), None);
        assert_eq!(format!("{}", error), "仓库格式错误，应为 owner/repo");
    }

    #[test]
    fn test_error_from_serde_json_is_unexpected() {
        let json_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error: Error = json_error.into();
        assert_eq!(error.kind(), ErrorKind::Unexpected);
        assert!(format!("{}", error).starts_with("未知错误"));
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::MalformedQuery).unwrap();
        assert_eq!(json, "\"malformed_query\"");
    }
}
