//! # Output Rendering
//!
//! This module turns results into the text the CLI prints: pretty JSON or a
//! fixed-width table. It also decides whether that text may use color, based
//! on terminal capabilities and user preferences.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! With color on, table headers are bold, star counts yellow, dates and
//! placeholder values dim, and detail keys cyan. JSON is never colored.
//!
//! ## Table Layout
//!
//! Search results render as four left-aligned columns of 40, 8, 12 and 12
//! characters: full name (cut to 38), stars with thousands separators,
//! language (cut to 10) and the date of the last push. Widths count
//! characters, not bytes, so CJK text pads the same way as ASCII.

use std::env;

use console::{style, StyledObject};
use serde::Serialize;

use crate::format::{NO_DESCRIPTION, UNKNOWN};
use crate::models::{RepositoryDetail, RepositorySummary};

/// Printed in table mode when a search matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "未找到匹配的项目";

const NAME_WIDTH: usize = 40;
const STARS_WIDTH: usize = 8;
const LANGUAGE_WIDTH: usize = 12;
const DATE_WIDTH: usize = 12;
const NAME_MAX_CHARS: usize = 38;
const LANGUAGE_MAX_CHARS: usize = 10;
const DATE_CHARS: usize = 10;
const RULE_WIDTH: usize = 80;

/// The `--color` setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    Always,
    Never,
    #[default]
    Auto,
}

/// Whether rendered text may carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve `choice` against the process environment and stdout.
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => auto_color(
                |name| env::var_os(name).map(|v| v.to_string_lossy().into_owned()),
                || console::Term::stdout().features().colors_supported(),
            ),
        };
        Self { use_color }
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

/// Environment rules for `--color auto`, in priority order. `terminal` is
/// only consulted when no variable decides.
fn auto_color(var: impl Fn(&str) -> Option<String>, terminal: impl FnOnce() -> bool) -> bool {
    // NO_COLOR wins even when empty
    if var("NO_COLOR").is_some() {
        return false;
    }
    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }
    if var("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0") {
        return true;
    }
    if var("TERM").as_deref() == Some("dumb") {
        return false;
    }
    terminal()
}

/// Serialize `value` as two-space indented JSON. Non-ASCII text is written
/// as-is rather than escaped.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Render search results as a table, or the no-results line when empty.
pub fn render_search_table(items: &[RepositorySummary], config: &OutputConfig) -> String {
    if items.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let header = [
        pad("项目名称", NAME_WIDTH),
        pad("Star", STARS_WIDTH),
        pad("语言", LANGUAGE_WIDTH),
        pad("最后更新", DATE_WIDTH),
    ]
    .join(" ");

    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(paint(header, config, |s| s.bold()));
    lines.push("-".repeat(RULE_WIDTH));

    for item in items {
        let name = truncate_chars(&item.full_name, NAME_MAX_CHARS);
        let language = if item.language.is_empty() {
            UNKNOWN
        } else {
            item.language.as_str()
        };
        let language = truncate_chars(language, LANGUAGE_MAX_CHARS);
        let pushed = if item.pushed_at.is_empty() {
            UNKNOWN
        } else {
            truncate_chars(&item.pushed_at, DATE_CHARS)
        };

        // Pad before painting so escape codes do not count toward widths.
        let row = [
            pad(name, NAME_WIDTH),
            paint(pad(&thousands(item.stars), STARS_WIDTH), config, |s| s.yellow()),
            pad(language, LANGUAGE_WIDTH),
            paint(pad(pushed, DATE_WIDTH), config, |s| s.dim()),
        ];
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

/// Render one repository as aligned `key  value` lines.
pub fn render_detail_table(detail: &RepositoryDetail, config: &OutputConfig) -> String {
    let topics = if detail.topics.is_empty() {
        "-".to_string()
    } else {
        detail.topics.join(", ")
    };
    let homepage = if detail.homepage.is_empty() {
        "-"
    } else {
        detail.homepage.as_str()
    };

    let rows: Vec<(&str, String)> = vec![
        ("full_name", detail.full_name.clone()),
        ("description", detail.description.clone()),
        ("url", detail.url.clone()),
        ("homepage", homepage.to_string()),
        ("language", detail.language.clone()),
        ("license", detail.license.clone()),
        ("stars", thousands(detail.stars)),
        ("forks", thousands(detail.forks)),
        ("watchers", thousands(detail.watchers)),
        ("subscribers", thousands(detail.subscribers_count)),
        ("network", thousands(detail.network_count)),
        ("open_issues", thousands(detail.open_issues)),
        ("default_branch", detail.default_branch.clone()),
        ("size_kb", thousands(detail.size)),
        ("topics", topics),
        ("created_at", detail.created_at.clone()),
        ("updated_at", detail.updated_at.clone()),
        ("pushed_at", detail.pushed_at.clone()),
        ("has_wiki", detail.has_wiki.to_string()),
        ("has_pages", detail.has_pages.to_string()),
        ("has_discussions", detail.has_discussions.to_string()),
    ];

    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    rows.into_iter()
        .map(|(key, value)| {
            let key = paint(pad(key, key_width), config, |s| s.cyan());
            let value = if is_placeholder(&value) {
                paint(value, config, |s| s.dim())
            } else {
                value
            };
            format!("{key}  {value}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an integer with `,` between groups of three digits.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Apply `styling` when color is enabled. Styling is forced because the
/// decision was already made by [`OutputConfig`].
fn paint(
    text: String,
    config: &OutputConfig,
    styling: impl FnOnce(StyledObject<String>) -> StyledObject<String>,
) -> String {
    if config.use_color {
        styling(style(text).force_styling(true)).to_string()
    } else {
        text
    }
}

fn is_placeholder(value: &str) -> bool {
    matches!(value, "-" | UNKNOWN | NO_DESCRIPTION)
}
