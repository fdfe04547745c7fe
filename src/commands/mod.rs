//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `project-finder` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! Commands that reach the API render their result into a [`Rendered`] value
//! before printing. A taxonomy error is not a Rust error at this level: it
//! becomes a JSON failure report and exit status 1. Only faults outside the
//! taxonomy (for example a failed write to stdout) travel as `anyhow::Error`.

pub mod completions;
pub mod detail;
pub mod search;

use std::process::ExitCode;

use anyhow::Result;

use project_finder::client::{ClientConfig, GitHubClient};
use project_finder::error::Error;
use project_finder::models::FailureReport;
use project_finder::output::{render_json, OutputConfig};

use crate::cli::OutputFormat;

/// Settings shared by every command that talks to the API.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub output: OutputConfig,
    pub api_url: String,
}

impl Context {
    pub fn client(&self) -> project_finder::error::Result<GitHubClient> {
        GitHubClient::new(ClientConfig::with_base_url(self.api_url.as_str()))
    }
}

/// Text ready for stdout plus whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub success: bool,
}

impl Rendered {
    pub fn success(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    /// JSON failure report for `error`, whatever the selected format.
    pub fn failure(error: &Error) -> Result<Self> {
        Ok(Self {
            text: render_json(&FailureReport::from(error))?,
            success: false,
        })
    }

    /// Print the text and map the outcome onto an exit status.
    pub fn emit(self) -> ExitCode {
        println!("{}", self.text);
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
