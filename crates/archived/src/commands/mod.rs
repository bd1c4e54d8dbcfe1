//! Command implementations for the memos-archived CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod input;
pub mod list;
pub mod query;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Archived view error.
    #[error("view error: {0}")]
    View(#[from] memos_view::ArchivedViewError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input data.
    #[error("invalid input: {0}")]
    Input(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and loaded config.
    pub fn from_cli(cli: &Cli, config: &config::Config) -> Self {
        let color_allowed = config.output.color.unwrap_or(true);
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && color_allowed,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}
