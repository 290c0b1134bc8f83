//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **tags**: Split filenames into tags
//! - **cloud**: Count tags across a JSON list of records
//! - **sort**: Order a JSON list of records by a ranking key
//! - **options**: Show the order-by choices for a media type
//!
//! # Examples
//!
//! ```text
//! mediashelf tags "[Circle] Title (Event)"
//! mediashelf cloud comics.json --limit 20
//! mediashelf sort comics.json --kind comic --by size-per-page
//! mediashelf options --kind video
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::media::{Category, MediaType};
use crate::sorting::RankingKey;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "mediashelf")]
#[command(about = "Tag extraction and ordering for a media library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Split filenames into tags
    #[command(visible_alias = "t")]
    Tags {
        /// Filenames to tokenize
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Count tag occurrences over the names in a records file
    Cloud {
        /// JSON array of media records
        #[arg(value_name = "RECORDS")]
        records: PathBuf,

        /// Only show the most frequent tags
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,
    },

    /// Print records in ranking order
    #[command(visible_alias = "s")]
    Sort {
        /// JSON array of media records
        #[arg(value_name = "RECORDS")]
        records: PathBuf,

        /// Media type of every record in the file
        #[arg(short = 'k', long = "kind", value_enum)]
        kind: MediaType,

        /// Ranking key (defaults to the configured order)
        #[arg(short = 'b', long = "by", value_name = "KEY")]
        by: Option<RankingKey>,

        /// Reverse the order
        #[arg(short = 'r', long = "reverse")]
        reverse: bool,

        /// Only show entries in this library view
        #[arg(short = 'c', long = "category", value_enum)]
        category: Option<Category>,

        /// Only show entries whose name contains every keyword
        #[arg(short = 'w', long = "keyword", value_name = "WORD")]
        keywords: Vec<String>,
    },

    /// List the order-by choices for a media type
    Options {
        #[arg(short = 'k', long = "kind", value_enum)]
        kind: MediaType,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::ComicKey;

    #[test]
    fn test_parse_sort_command() {
        let cli = Cli::try_parse_from([
            "mediashelf", "sort", "comics.json", "--kind", "comic", "--by", "SizePerPage", "-w", "Circle", "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Sort { records, kind, by, reverse, category, keywords } => {
                assert_eq!(records, PathBuf::from("comics.json"));
                assert_eq!(kind, MediaType::Comic);
                assert_eq!(by, Some(RankingKey::Comic(ComicKey::SizePerPage)));
                assert!(!reverse);
                assert_eq!(category, None);
                assert_eq!(keywords, vec!["Circle"]);
            }
            other => panic!("Expected sort command, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Cli::try_parse_from(["mediashelf", "sort", "x.json", "--kind", "video", "--by", "colour"]).is_err());
    }

    #[test]
    fn test_tags_requires_names() {
        assert!(Cli::try_parse_from(["mediashelf", "tags"]).is_err());
        let cli = Cli::try_parse_from(["mediashelf", "t", "[a]b"]).unwrap();
        assert!(matches!(cli.command, Commands::Tags { names } if names == vec!["[a]b"]));
    }

    #[test]
    fn test_category_value() {
        let cli = Cli::try_parse_from(["mediashelf", "sort", "x.json", "-k", "image", "-c", "favorite"]).unwrap();
        assert!(matches!(cli.command, Commands::Sort { category: Some(Category::Favorite), .. }));
    }
}
