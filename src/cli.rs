//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use project_finder::defaults::DEFAULT_API_URL;
use project_finder::output::{ColorChoice, OutputConfig};

use crate::commands;

/// Project Finder - Search GitHub repositories by keyword, language, stars and topic
#[derive(Parser, Debug)]
#[command(name = "project-finder")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  project-finder search --query \"web framework\" --language python --min-stars 1000
  project-finder search --query \"machine learning\" --limit 10
  project-finder search --topic cli --language rust --min-stars 500
  project-finder detail owner/repo")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Root URL of the GitHub REST API
    #[arg(
        long,
        global = true,
        value_name = "URL",
        env = "PROJECT_FINDER_API_URL",
        default_value = DEFAULT_API_URL
    )]
    api_url: String,

    /// Colorize table output
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Fixed-width text table
    Table,
}

/// When to colorize table output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    /// Always, even when stdout is not a terminal
    Always,
    /// Never
    Never,
    /// Follow NO_COLOR, CLICOLOR, CLICOLOR_FORCE, TERM and the terminal
    Auto,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
            ColorArg::Auto => ColorChoice::Auto,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search repositories by keyword, language, stars and topic
    Search(commands::search::SearchArgs),

    /// Show details for a single repository
    Detail(commands::detail::DetailArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(&self.log_level);

        let context = commands::Context {
            format: self.output,
            output: OutputConfig::new(self.color.into()),
            api_url: self.api_url,
        };

        match self.command {
            Commands::Search(args) => commands::search::execute(args, &context),
            Commands::Detail(args) => commands::detail::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr. `RUST_LOG` takes precedence over
/// `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
