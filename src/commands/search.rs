//! # Search Command Implementation
//!
//! This module implements the `search` subcommand, which queries the
//! repository search endpoint and prints the formatted results.
//!
//! ## Functionality
//!
//! - **Filters**: keyword, language, minimum stars and topic, combined into
//!   one qualified search string.
//! - **Ordering and paging**: sort key, sort order and a page size clamped
//!   to 1..=100.
//! - **Output**: the JSON report by default, or a table with `--output table`.
//!
//! At least one of `--query` and `--topic` must be non-empty. A topic alone
//! is a complete search.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, ValueEnum};
use log::debug;

use project_finder::client::RepositoryApi;
use project_finder::defaults::DEFAULT_LIMIT;
use project_finder::error::Error;
use project_finder::models::SearchReport;
use project_finder::output::{render_json, render_search_table};
use project_finder::query::{SearchQuery, SortKey, SortOrder};

use super::{Context, Rendered};
use crate::cli::OutputFormat;

/// Message shown when neither a keyword nor a topic was supplied.
pub const MISSING_FILTER_MESSAGE: &str = "必须提供 --query 或 --topic 参数";

/// Sort key accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Star count
    Stars,
    /// Fork count
    Forks,
    /// Last update time
    Updated,
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Stars => SortKey::Stars,
            SortArg::Forks => SortKey::Forks,
            SortArg::Updated => SortKey::Updated,
        }
    }
}

/// Sort order accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Largest or newest first
    Desc,
    /// Smallest or oldest first
    Asc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Desc => SortOrder::Desc,
            OrderArg::Asc => SortOrder::Asc,
        }
    }
}

/// Search repositories by keyword, language, stars and topic
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keywords
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Only repositories whose primary language matches
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Minimum star count (0 disables the filter)
    #[arg(short = 's', long, value_name = "N", default_value_t = 0)]
    pub min_stars: u64,

    /// Only repositories tagged with this topic
    #[arg(short, long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Sort field
    #[arg(long, value_enum, default_value_t = SortArg::Stars)]
    pub sort: SortArg,

    /// Sort order
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,

    /// Number of results (clamped to 1..=100)
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        default_value_t = DEFAULT_LIMIT,
        allow_negative_numbers = true
    )]
    pub limit: i64,
}

impl SearchArgs {
    /// Turn the arguments into a query, rejecting a search with no keyword
    /// and no topic.
    pub fn to_query(&self) -> Result<SearchQuery, Error> {
        let keyword = self.query.as_deref().unwrap_or_default();
        let topic = self.topic.as_deref().unwrap_or_default();

        if keyword.is_empty() && topic.is_empty() {
            return Err(Error::invalid_input(MISSING_FILTER_MESSAGE));
        }

        Ok(SearchQuery::new(keyword)
            .language(self.language.clone().unwrap_or_default())
            .min_stars(self.min_stars)
            .topic(topic)
            .sort(self.sort.into())
            .order(self.order.into())
            .limit(self.limit))
    }
}

/// Execute the `search` command.
pub fn execute(args: SearchArgs, context: &Context) -> Result<ExitCode> {
    let query = match args.to_query() {
        Ok(query) => query,
        Err(error) => return Ok(Rendered::failure(&error)?.emit()),
    };
    debug!(
        "Search terms: {} (sort: {} {}, per_page: {})",
        query.qualified_terms(),
        query.sort_key(),
        query.sort_order(),
        query.per_page()
    );

    let client = match context.client() {
        Ok(client) => client,
        Err(error) => return Ok(Rendered::failure(&error)?.emit()),
    };

    Ok(run(&client, &query, context)?.emit())
}

/// Run a search against `api` and render the outcome.
///
/// Failures render as JSON even in table mode.
pub fn run(api: &dyn RepositoryApi, query: &SearchQuery, context: &Context) -> Result<Rendered> {
    match api.search(query) {
        Ok(page) => {
            let text = match context.format {
                OutputFormat::Json => render_json(&SearchReport::from(&page))?,
                OutputFormat::Table => render_search_table(&page.items, &context.output),
            };
            Ok(Rendered::success(text))
        }
        Err(error) => Rendered::failure(&error),
    }
}
