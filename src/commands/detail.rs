//! # Detail Command Implementation
//!
//! This module implements the `detail` subcommand, which fetches metadata for
//! one repository given as `owner/repo`.
//!
//! The identifier is validated before any request is made; a malformed one
//! produces an `invalid_input` failure report and exit status 1.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use log::debug;

use project_finder::client::RepositoryApi;
use project_finder::models::DetailReport;
use project_finder::output::{render_detail_table, render_json};
use project_finder::repo_ref::RepoRef;

use super::{Context, Rendered};
use crate::cli::OutputFormat;

/// Show details for a single repository
#[derive(Args, Debug)]
pub struct DetailArgs {
    /// Repository to inspect, as owner/repo
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,
}

/// Execute the `detail` command.
pub fn execute(args: DetailArgs, context: &Context) -> Result<ExitCode> {
    let repo = match RepoRef::parse(&args.repo) {
        Ok(repo) => repo,
        Err(error) => return Ok(Rendered::failure(&error)?.emit()),
    };
    debug!("Fetching details for {}", repo);

    let client = match context.client() {
        Ok(client) => client,
        Err(error) => return Ok(Rendered::failure(&error)?.emit()),
    };

    Ok(run(&client, &repo, context)?.emit())
}

/// Fetch `repo` through `api` and render the outcome.
pub fn run(api: &dyn RepositoryApi, repo: &RepoRef, context: &Context) -> Result<Rendered> {
    match api.repository(repo) {
        Ok(detail) => {
            let text = match context.format {
                OutputFormat::Json => render_json(&DetailReport::from(&detail))?,
                OutputFormat::Table => render_detail_table(&detail, &context.output),
            };
            Ok(Rendered::success(text))
        }
        Err(error) => Rendered::failure(&error),
    }
}
