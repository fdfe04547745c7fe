//! Parsing of `owner/repo` identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Message shown when an identifier is not exactly `owner/repo`.
pub const MALFORMED_REPO_MESSAGE: &str = "仓库格式错误，应为 owner/repo";

/// A repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse `owner/repo`.
    ///
    /// Exactly one `/` with a non-empty segment on each side is accepted.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::invalid_input(MALFORMED_REPO_MESSAGE)),
        }
    }

    /// Path of the repository endpoint, with both segments escaped.
    pub fn api_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.name)
        )
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
