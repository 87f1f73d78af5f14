//! Command-line interface definitions for nyt_newswire.
//!
//! The API key and host are read from the environment (`NY_API_KEY`,
//! `BASE_URL`/`URL_BASE`); everything else is a flag or subcommand here.

use crate::models::{Endpoint, Period, PopularKind, Source};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for nyt_newswire.
///
/// # Examples
///
/// ```sh
/// # Section list
/// NY_API_KEY=... nyt_newswire sections
///
/// # Latest NYT arts articles into ./raw
/// NY_API_KEY=... nyt_newswire --storage-dir ./raw content --source nyt --section arts
///
/// # Most viewed over a week
/// NY_API_KEY=... nyt_newswire popular viewed --period 7
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory the JSON files are written to; must already exist
    #[arg(short, long, env = "NEWSWIRE_STORAGE_DIR", global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Print the request URL and output filename without fetching anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the list of Newswire sections
    Sections,

    /// Fetch the latest Newswire articles
    Content {
        /// Content origin filter
        #[arg(long, value_enum)]
        source: Option<Source>,

        /// Section filter, e.g. "arts" or "business"
        #[arg(long)]
        section: Option<String>,

        /// Reject sections missing from the published section list
        #[arg(long, requires = "section")]
        check_section: bool,
    },

    /// Fetch the most emailed, shared or viewed articles
    Popular {
        #[arg(value_enum)]
        kind: PopularKind,

        /// Window in days
        #[arg(short, long, value_enum, default_value = "1")]
        period: Period,
    },
}

impl Command {
    /// The endpoint this subcommand fetches.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Command::Sections => Endpoint::SectionList,
            Command::Content {
                source, section, ..
            } => Endpoint::Content {
                source: *source,
                section: section.clone(),
            },
            Command::Popular { kind, period } => Endpoint::MostPopular {
                kind: *kind,
                period: *period,
            },
        }
    }

    /// Section to validate before fetching, if requested.
    pub fn section_to_check(&self) -> Option<&str> {
        match self {
            Command::Content {
                section: Some(section),
                check_section: true,
                ..
            } => Some(section.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_sections() {
        let cli = Cli::parse_from(["nyt_newswire", "--storage-dir", "./raw", "sections"]);
        assert_eq!(cli.storage_dir, Some(PathBuf::from("./raw")));
        assert!(!cli.dry_run);
        assert_eq!(cli.command.endpoint(), Endpoint::SectionList);
    }

    #[test]
    fn test_cli_storage_dir_after_subcommand() {
        let cli = Cli::parse_from(["nyt_newswire", "content", "--storage-dir", "./raw", "--section", "arts"]);
        assert_eq!(cli.storage_dir, Some(PathBuf::from("./raw")));
        assert_eq!(cli.command.section_to_check(), None);
    }

    #[test]
    fn test_cli_content_filters() {
        let cli = Cli::parse_from([
            "nyt_newswire",
            "content",
            "--source",
            "inyt",
            "--section",
            "world",
            "--check-section",
        ]);
        assert_eq!(
            cli.command.endpoint(),
            Endpoint::Content {
                source: Some(Source::Inyt),
                section: Some("world".to_string()),
            }
        );
        assert_eq!(cli.command.section_to_check(), Some("world"));
    }

    #[test]
    fn test_cli_content_without_filters() {
        let cli = Cli::parse_from(["nyt_newswire", "content"]);
        assert_eq!(
            cli.command.endpoint(),
            Endpoint::Content {
                source: None,
                section: None,
            }
        );
        assert_eq!(cli.command.section_to_check(), None);
    }

    #[test]
    fn test_cli_check_section_requires_section() {
        let res = Cli::try_parse_from(["nyt_newswire", "content", "--check-section"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_cli_popular_period() {
        let cli = Cli::parse_from(["nyt_newswire", "popular", "viewed", "-p", "30", "--dry-run"]);
        assert!(cli.dry_run);
        assert_eq!(
            cli.command.endpoint(),
            Endpoint::MostPopular {
                kind: PopularKind::Viewed,
                period: Period::Month,
            }
        );
    }

    #[test]
    fn test_cli_popular_default_period() {
        let cli = Cli::parse_from(["nyt_newswire", "popular", "emailed"]);
        assert!(matches!(
            cli.command,
            Command::Popular {
                period: Period::Day,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_period_and_source() {
        assert!(Cli::try_parse_from(["nyt_newswire", "popular", "shared", "--period", "3"]).is_err());
        assert!(Cli::try_parse_from(["nyt_newswire", "content", "--source", "bbc"]).is_err());
    }
}
