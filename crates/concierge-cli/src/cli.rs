//! CLI argument definitions for the concierge catalog browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use concierge_core::BrowserAction;
use concierge_model::AttributeFilter;

#[derive(Parser)]
#[command(
    name = "concierge",
    version,
    about = "Browse the travel concierge guide catalog",
    long_about = "Browse the travel concierge guide catalog.\n\n\
                  Lists categories and entries, shows entry details, and replays\n\
                  scripted browser sessions as JSON snapshots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog directory containing catalog.json and an optional browser.toml.
    ///
    /// Defaults to $CONCIERGE_CATALOG_DIR, then the bundled catalog.
    #[arg(long = "catalog-dir", value_name = "DIR", global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List catalog categories.
    Categories,

    /// List the entries of a category.
    List(ListArgs),

    /// Show one entry in detail.
    Show(ShowArgs),

    /// Print a stored distance with its kilometre equivalent.
    Distance {
        /// Distance text such as "5.2 mi".
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Replay browser actions and print the resulting snapshot as JSON.
    Browse(BrowseArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Only entries whose attribute KEY equals VALUE.
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filter: Option<AttributeFilter>,

    /// Group entries by the value of an attribute.
    #[arg(long = "group-by", value_name = "KEY", conflicts_with = "filter")]
    pub group_by: Option<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[arg(value_name = "ENTRY")]
    pub entry: String,

    /// Count children per value of an attribute (e.g. --count-by type).
    #[arg(long = "count-by", value_name = "KEY")]
    pub count_by: Option<String>,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Action to apply, in order. Repeatable.
    ///
    /// category:<id>, entity:<id>, back, filter:<key>=<value>, clear-filter,
    /// toggle:<id>, collapse-all, show-only:<id>
    #[arg(long = "action", short = 'a', value_name = "ACTION")]
    pub actions: Vec<BrowserAction>,

    /// Print compact JSON instead of pretty JSON.
    #[arg(long = "compact")]
    pub compact: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_filter(raw: &str) -> Result<AttributeFilter, String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => {
            Ok(AttributeFilter::new(key.trim(), value.trim()))
        }
        _ => Err(format!("expected KEY=VALUE, got {raw:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_actions_parse_in_order() {
        let cli = Cli::try_parse_from([
            "concierge",
            "browse",
            "--action",
            "category:medical",
            "-a",
            "entity:new-york",
            "-a",
            "back",
        ])
        .unwrap();
        let Command::Browse(args) = cli.command else {
            panic!("expected browse");
        };
        let actions: Vec<String> = args.actions.iter().map(ToString::to_string).collect();
        assert_eq!(actions, ["category:medical", "entity:new-york", "back"]);
    }

    #[test]
    fn unknown_action_is_a_usage_error() {
        assert!(Cli::try_parse_from(["concierge", "browse", "-a", "jump:medical"]).is_err());
    }

    #[test]
    fn list_filter_needs_key_and_value() {
        let cli =
            Cli::try_parse_from(["concierge", "list", "lodging", "--filter", "category=Budget"])
                .unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.filter, Some(AttributeFilter::new("category", "Budget")));

        assert!(parse_filter("category").is_err());
        assert!(parse_filter("=Budget").is_err());
    }

    #[test]
    fn filter_and_group_by_conflict() {
        let result = Cli::try_parse_from([
            "concierge",
            "list",
            "medical",
            "--filter",
            "country=USA",
            "--group-by",
            "country",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn catalog_dir_is_global() {
        let cli = Cli::try_parse_from(["concierge", "categories", "--catalog-dir", "/srv/guide"])
            .unwrap();
        assert_eq!(cli.catalog_dir, Some(PathBuf::from("/srv/guide")));
    }
}
