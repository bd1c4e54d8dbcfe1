//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for memos-archived.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// memos-archived - Build archived memo list queries and order fetched pages
#[derive(Parser, Debug)]
#[command(name = "memos-archived")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter selections shared by `query` and `request`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// JSON file with an array of {"factor", "value"} selections ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub filters: Option<PathBuf>,

    /// Content search term (repeatable)
    #[arg(short, long, action = clap::ArgAction::Append)]
    pub content: Vec<String>,

    /// Tag search term (repeatable)
    #[arg(short, long, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Only memos with a due date
    #[arg(long)]
    pub due_date: bool,
}

/// Sort direction flags shared by `request` and `list`.
#[derive(Args, Debug, Default, Clone)]
pub struct DirectionArgs {
    /// Oldest first
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Newest first
    #[arg(long)]
    pub desc: bool,
}

impl DirectionArgs {
    /// Returns the direction requested on the command line, if any.
    pub fn ascending(&self) -> Option<bool> {
        match (self.asc, self.desc) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the query expression for the given filters
    #[command(alias = "q")]
    Query {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the list request for the archived view
    #[command(alias = "r")]
    Request {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        direction: DirectionArgs,

        /// Owner resource name, e.g. users/1 (default: from config)
        #[arg(long, env = "MEMOS_OWNER")]
        owner: Option<String>,
    },

    /// Show the archived memos of a fetched page, ordered by display time
    #[command(alias = "l")]
    List {
        /// JSON page of memos ("-" for stdin)
        #[arg(long, value_name = "FILE", default_value = "-")]
        page: PathBuf,

        #[command(flatten)]
        direction: DirectionArgs,

        /// Fail on memos whose display time cannot be read
        #[arg(long)]
        strict: bool,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
