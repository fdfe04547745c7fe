//! # Project Finder Library
//!
//! This library searches GitHub repositories by keyword, language, star
//! count and topic, and fetches metadata for a single repository. It backs
//! the `project-finder` command-line tool, and its pieces can be used on
//! their own.
//!
//! ## Quick Example
//!
//! ```
//! use project_finder::format;
//! use project_finder::models::RawRepository;
//! use project_finder::query::SearchQuery;
//!
//! let query = SearchQuery::new("")
//!     .topic("cli")
//!     .language("rust")
//!     .min_stars(500);
//! assert_eq!(
//!     query.encoded_terms(),
//!     "language:rust+stars:>=500+topic:cli"
//! );
//!
//! let summary = format::summarize(RawRepository::default());
//! assert_eq!(summary.description, format::NO_DESCRIPTION);
//! ```
//!
//! ## Core Concepts
//!
//! - **Query building (`query`)**: composes the `q` search string with its
//!   qualifiers and the sort/paging parameters.
//! - **API access (`client`)**: one blocking GET per call, with failures
//!   classified into the [`error::Error`] taxonomy.
//! - **Formatting (`format`)**: total transforms from raw payloads
//!   (`models::RawRepository`) into the stable output shapes.
//! - **Rendering (`output`)**: pretty JSON and fixed-width tables.
//!
//! ## Execution Flow
//!
//! 1.  Build a [`query::SearchQuery`] or parse a [`repo_ref::RepoRef`].
//! 2.  Issue the request through [`client::GitHubClient`].
//! 3.  Format the payload with [`format::summarize_all`] or [`format::detail`].
//! 4.  Render with [`output::render_json`] or one of the table renderers.

pub mod client;
pub mod defaults;
pub mod error;
pub mod format;
pub mod models;
pub mod output;
pub mod query;
pub mod repo_ref;

#[cfg(test)]
mod query_proptest;
