//! Endpoint selectors and the pure URL composition built on them.
//!
//! The Times Newswire and Most Popular APIs expose a handful of fixed paths:
//!
//! | Endpoint | Path |
//! |----------|------|
//! | [`Endpoint::SectionList`] | `/svc/news/v3/content/section-list.json` |
//! | [`Endpoint::Content`] | `/svc/news/v3/content/{source}/{section}.json` |
//! | [`Endpoint::MostPopular`] | `/svc/mostpopular/v2/{kind}/{period}.json` |
//!
//! Nothing here touches the network; [`compose_url`] and
//! [`Endpoint::filename_params`] are plain functions of their inputs.

use crate::error::{NewswireError, Result};
use clap::ValueEnum;
use std::fmt;
use url::Url;

/// Content-origin filter for the Newswire content endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    All,
    Nyt,
    Inyt,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::All => "all",
            Source::Nyt => "nyt",
            Source::Inyt => "inyt",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which popularity ranking to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PopularKind {
    Emailed,
    Shared,
    Viewed,
}

impl PopularKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopularKind::Emailed => "emailed",
            PopularKind::Shared => "shared",
            PopularKind::Viewed => "viewed",
        }
    }
}

impl fmt::Display for PopularKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Popularity window in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    #[value(name = "1")]
    Day,
    #[value(name = "7")]
    Week,
    #[value(name = "30")]
    Month,
}

impl Period {
    pub fn days(&self) -> u8 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => 30,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

/// One API resource to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Every section the Newswire knows about.
    SectionList,
    /// Latest articles, optionally filtered. An omitted filter means `all`
    /// in the URL but is left out of the filename.
    Content {
        source: Option<Source>,
        section: Option<String>,
    },
    /// Most emailed / shared / viewed articles over a period.
    MostPopular { kind: PopularKind, period: Period },
}

impl Endpoint {
    /// Path segments below the base URL, last one carrying `.json`.
    pub fn path_segments(&self) -> Vec<String> {
        match self {
            Endpoint::SectionList => ["svc", "news", "v3", "content", "section-list.json"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            Endpoint::Content { source, section } => {
                let source = source.unwrap_or(Source::All);
                let section = section.as_deref().unwrap_or("all");
                vec![
                    "svc".to_string(),
                    "news".to_string(),
                    "v3".to_string(),
                    "content".to_string(),
                    source.to_string(),
                    format!("{section}.json"),
                ]
            }
            Endpoint::MostPopular { kind, period } => vec![
                "svc".to_string(),
                "mostpopular".to_string(),
                "v2".to_string(),
                kind.to_string(),
                format!("{period}.json"),
            ],
        }
    }

    /// Label that starts every output filename for this endpoint.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Endpoint::SectionList | Endpoint::Content { .. } => "newswire",
            Endpoint::MostPopular { .. } => "mostpopular",
        }
    }

    /// Parameters rendered into the output filename, in call order.
    /// Filters that were not supplied are skipped.
    pub fn filename_params(&self) -> Vec<String> {
        match self {
            Endpoint::SectionList => vec!["section-list".to_string()],
            Endpoint::Content { source, section } => source
                .map(|s| s.to_string())
                .into_iter()
                .chain(section.clone())
                .collect(),
            Endpoint::MostPopular { kind, period } => vec![kind.to_string(), period.to_string()],
        }
    }
}

/// Join an endpoint onto the base URL, keeping any path prefix the base has.
///
/// Segments are percent-encoded, so a section name containing spaces stays a
/// single path component. No query string is attached here.
pub fn compose_url(base: &Url, endpoint: &Endpoint) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| NewswireError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "URL cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend(endpoint.path_segments());
    Ok(url)
}

/// Render a URL for logs with the `api-key` value masked.
pub fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api-key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return shown.to_string();
    }
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
