//! # Response Formatter
//!
//! Pure transforms from raw API payloads into the output schema. Both are
//! total: any combination of missing or null fields produces a complete
//! value, with placeholders substituted as follows.
//!
//! | Field            | Missing / null             |
//! |------------------|----------------------------|
//! | `description`    | [`NO_DESCRIPTION`] (also when empty) |
//! | `language`       | [`UNKNOWN`]                |
//! | `license`        | [`UNKNOWN`]                |
//! | `default_branch` | `main`                     |
//! | other strings    | empty string               |
//! | counts           | `0`                        |
//! | flags            | `false`                    |
//! | `topics`         | empty list                 |

use crate::models::{RawLicense, RawOwner, RawRepository, RepositoryDetail, RepositorySummary};

/// Placeholder for a repository without a description.
pub const NO_DESCRIPTION: &str = "无描述";

/// Placeholder for an unknown language or license.
pub const UNKNOWN: &str = "未知";

/// Branch assumed when the payload does not name one.
pub const DEFAULT_BRANCH: &str = "main";

/// Map one search item into a [`RepositorySummary`].
pub fn summarize(raw: RawRepository) -> RepositorySummary {
    RepositorySummary {
        name: raw.name.unwrap_or_default(),
        full_name: raw.full_name.unwrap_or_default(),
        owner: owner_login(raw.owner),
        description: description_or_placeholder(raw.description),
        url: raw.html_url.unwrap_or_default(),
        stars: raw.stargazers_count.unwrap_or(0),
        forks: raw.forks_count.unwrap_or(0),
        open_issues: raw.open_issues_count.unwrap_or(0),
        language: raw.language.unwrap_or_else(|| UNKNOWN.to_string()),
        license: license_id(raw.license),
        created_at: raw.created_at.unwrap_or_default(),
        updated_at: raw.updated_at.unwrap_or_default(),
        pushed_at: raw.pushed_at.unwrap_or_default(),
        topics: raw.topics.unwrap_or_default(),
        homepage: raw.homepage.unwrap_or_default(),
    }
}

/// Map a list of search items, keeping their order.
pub fn summarize_all(items: Vec<RawRepository>) -> Vec<RepositorySummary> {
    items.into_iter().map(summarize).collect()
}

/// Map a single-repository payload into a [`RepositoryDetail`].
pub fn detail(mut raw: RawRepository) -> RepositoryDetail {
    let watchers = raw.watchers_count.unwrap_or(0);
    let subscribers_count = raw.subscribers_count.unwrap_or(0);
    let network_count = raw.network_count.unwrap_or(0);
    let default_branch = raw
        .default_branch
        .take()
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
    let size = raw.size.unwrap_or(0);
    let has_wiki = raw.has_wiki.unwrap_or(false);
    let has_pages = raw.has_pages.unwrap_or(false);
    let has_discussions = raw.has_discussions.unwrap_or(false);

    let summary = summarize(raw);

    RepositoryDetail {
        name: summary.name,
        full_name: summary.full_name,
        owner: summary.owner,
        description: summary.description,
        url: summary.url,
        stars: summary.stars,
        forks: summary.forks,
        watchers,
        open_issues: summary.open_issues,
        language: summary.language,
        license: summary.license,
        created_at: summary.created_at,
        updated_at: summary.updated_at,
        pushed_at: summary.pushed_at,
        topics: summary.topics,
        homepage: summary.homepage,
        default_branch,
        size,
        subscribers_count,
        network_count,
        has_wiki,
        has_pages,
        has_discussions,
    }
}

fn owner_login(owner: Option<RawOwner>) -> String {
    owner.and_then(|o| o.login).unwrap_or_default()
}

fn description_or_placeholder(description: Option<String>) -> String {
    match description {
        Some(text) if !text.is_empty() => text,
        _ => NO_DESCRIPTION.to_string(),
    }
}

fn license_id(license: Option<RawLicense>) -> String {
    license
        .and_then(|l| l.spdx_id)
        .unwrap_or_else(|| UNKNOWN.to_string())
}
