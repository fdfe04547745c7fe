//! # Search Query Builder
//!
//! Composes the `q` parameter for the repository search endpoint together
//! with its sort and paging parameters.
//!
//! The search API reads qualifiers such as `language:rust` or `stars:>=100`
//! out of the free-text string and treats `+` as the AND separator between
//! tokens. A plain form encoder would turn the qualifier punctuation into
//! `%3A`/`%3E`/`%3D` and spaces into `%20`, so `q` gets its own encoding:
//!
//! 1. Percent-encode everything except unreserved characters and `: < > =`.
//! 2. Rewrite every `%20` to `+`.
//!
//! `sort`, `order` and `per_page` are ordinary form parameters.
//!
//! `encoded_terms` is the value handed to the HTTP client, not necessarily
//! the bytes on the wire: the `url` parser behind `reqwest` escapes `<` and
//! `>` in query strings again, so `stars:>=5` is sent as `stars:%3E=5`. The
//! API decodes both forms to the same qualifier.
//!
//! ```
//! use project_finder::query::SearchQuery;
//!
//! let query = SearchQuery::new("web framework")
//!     .language("python")
//!     .min_stars(1000);
//! assert_eq!(
//!     query.encoded_terms(),
//!     "web+framework+language:python+stars:>=1000"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::defaults::{DEFAULT_LIMIT, MAX_LIMIT};

/// Field the search endpoint sorts by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Stars,
    Forks,
    Updated,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::Updated => "updated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stars" => Ok(SortKey::Stars),
            "forks" => Ok(SortKey::Forks),
            "updated" => Ok(SortKey::Updated),
            other => Err(format!("invalid sort key: {other}")),
        }
    }
}

/// Direction of the sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order: {other}")),
        }
    }
}

/// Clamp a requested page size into `1..=100`.
pub fn clamp_limit(requested: i64) -> u32 {
    // MAX_LIMIT fits in i64, so the cast back is lossless
    requested.clamp(1, i64::from(MAX_LIMIT)) as u32
}

/// A repository search request.
///
/// Built once with the consuming builder methods and then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    language: Option<String>,
    min_stars: u64,
    topic: Option<String>,
    sort: SortKey,
    order: SortOrder,
    limit: u32,
}

impl SearchQuery {
    /// Start a query from free text. The text may be empty when a topic
    /// filter is added later.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            language: None,
            min_stars: 0,
            topic: None,
            sort: SortKey::default(),
            order: SortOrder::default(),
            limit: clamp_limit(DEFAULT_LIMIT),
        }
    }

    /// Restrict to a primary language. An empty string clears the filter.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = non_empty(language.into());
        self
    }

    /// Require at least `stars` stars. Zero disables the filter.
    pub fn min_stars(mut self, stars: u64) -> Self {
        self.min_stars = stars;
        self
    }

    /// Restrict to repositories tagged with `topic`. An empty string clears
    /// the filter.
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = non_empty(topic.into());
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the page size, clamped to `1..=100`.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = clamp_limit(limit);
        self
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    pub fn per_page(&self) -> u32 {
        self.limit
    }

    /// The unencoded search string: keyword, then qualifiers, space-joined.
    ///
    /// An empty keyword contributes no token.
    pub fn qualified_terms(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);

        if !self.term.is_empty() {
            parts.push(self.term.clone());
        }
        if let Some(language) = &self.language {
            parts.push(format!("language:{language}"));
        }
        if self.min_stars > 0 {
            parts.push(format!("stars:>={}", self.min_stars));
        }
        if let Some(topic) = &self.topic {
            parts.push(format!("topic:{topic}"));
        }

        parts.join(" ")
    }

    /// The encoded `q` value, with `+` between tokens.
    pub fn encoded_terms(&self) -> String {
        encode_terms(&self.qualified_terms())
    }

    /// The complete query string for `/search/repositories`.
    pub fn to_query_string(&self) -> String {
        let paging = form_urlencoded::Serializer::new(String::new())
            .append_pair("sort", self.sort.as_str())
            .append_pair("order", self.order.as_str())
            .append_pair("per_page", &self.limit.to_string())
            .finish();

        format!("q={}&{}", self.encoded_terms(), paging)
    }
}

/// Percent-encode a search string, leaving qualifier punctuation intact and
/// using `+` for spaces.
pub fn encode_terms(raw: &str) -> String {
    // Every '%' in the encoder's output starts an escape, so these literal
    // replacements cannot hit the middle of another sequence.
    urlencoding::encode(raw)
        .replace("%3A", ":")
        .replace("%3C", "<")
        .replace("%3E", ">")
        .replace("%3D", "=")
        .replace("%20", "+")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_only() {
        let query = SearchQuery::new("tokio");
        assert_eq!(query.qualified_terms(), "tokio");
        assert_eq!(query.encoded_terms(), "tokio");
    }

    #[test]
    fn test_qualifier_order() {
        let query = SearchQuery::new("cli")
            .topic("terminal")
            .min_stars(500)
            .language("rust");
        assert_eq!(
            query.qualified_terms(),
            "cli language:rust stars:>=500 topic:terminal"
        );
        assert_eq!(
            query.encoded_terms(),
            "cli+language:rust+stars:>=500+topic:terminal"
        );
    }

    #[test]
    fn test_zero_stars_omits_qualifier() {
        let query = SearchQuery::new("http").min_stars(0);
        assert!(!query.encoded_terms().contains("stars"));
    }

    #[test]
    fn test_positive_stars_emitted_verbatim() {
        let query = SearchQuery::new("http").min_stars(1);
        assert_eq!(query.encoded_terms(), "http+stars:>=1");
    }

    #[test]
    fn test_multi_word_keyword_uses_plus() {
        let query = SearchQuery::new("machine learning  toolkit");
        assert_eq!(query.encoded_terms(), "machine+learning++toolkit");
    }

    #[test]
    fn test_topic_only_search() {
        let query = SearchQuery::new("").topic("cli").language("rust");
        assert_eq!(query.qualified_terms(), "language:rust topic:cli");
        assert_eq!(query.encoded_terms(), "language:rust+topic:cli");
    }

    #[test]
    fn test_empty_filters_are_ignored() {
        let query = SearchQuery::new("x").language("").topic("");
        assert_eq!(query.qualified_terms(), "x");
        assert_eq!(query.encoded_terms(), "x");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(encode_terms("c++ a/b"), "c%2B%2B+a%2Fb");
        assert_eq!(encode_terms("a&b#c"), "a%26b%23c");
    }

    #[test]
    fn test_unreserved_and_qualifier_characters_kept() {
        assert_eq!(encode_terms("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_terms("stars:<=10"), "stars:<=10");
    }

    #[test]
    fn test_literal_percent_sequence_not_unescaped() {
        assert_eq!(encode_terms("%3A"), "%253A");
        assert_eq!(encode_terms("%20"), "%2520");
    }

    #[test]
    fn test_non_ascii_keyword_is_percent_encoded() {
        assert_eq!(encode_terms("爬虫"), "%E7%88%AC%E8%99%AB");
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(clamp_limit(500), 100);
        assert_eq!(clamp_limit(100), 100);
        assert_eq!(clamp_limit(20), 20);
        assert_eq!(clamp_limit(1), 1);
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(-7), 1);
        assert_eq!(SearchQuery::new("x").limit(500).per_page(), 100);
    }

    #[test]
    fn test_default_paging() {
        let query = SearchQuery::new("x");
        assert_eq!(query.sort_key(), SortKey::Stars);
        assert_eq!(query.sort_order(), SortOrder::Desc);
        assert_eq!(query.per_page(), 20);
    }

    #[test]
    fn test_full_query_string() {
        let query = SearchQuery::new("web framework")
            .language("python")
            .min_stars(1000)
            .sort(SortKey::Updated)
            .order(SortOrder::Asc)
            .limit(10);
        assert_eq!(
            query.to_query_string(),
            "q=web+framework+language:python+stars:>=1000&sort=updated&order=asc&per_page=10"
        );
    }

    #[test]
    fn test_sort_key_round_trip_through_str() {
        for key in [SortKey::Stars, SortKey::Forks, SortKey::Updated] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("up".parse::<SortOrder>().is_err());
    }
}
