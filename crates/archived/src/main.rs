use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::{load_config, Config, ConfigSetOptions};
use commands::list::ListOptions;
use commands::query::RequestOptions;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flag-derived level.
fn init_logging(cli: &Cli) {
    let default_directive = if cli.verbose {
        "memos_view=debug,memos_archived=debug,warn"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color),
        )
        .with(env_filter)
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    // config and completions still run when the config file is unreadable
    let config = match &cli.command {
        Commands::Config { .. } | Commands::Completions { .. } => {
            load_config().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unreadable config file");
                Config::default()
            })
        }
        _ => load_config()?,
    };
    let ctx = CommandContext::from_cli(cli, &config);

    match &cli.command {
        Commands::Query { filters } => commands::query::execute_query(&ctx, filters),
        Commands::Request {
            filters,
            direction,
            owner,
        } => {
            let opts = RequestOptions {
                filters,
                direction,
                owner: owner.as_deref(),
            };
            commands::query::execute_request(&ctx, &config, &opts)
        }
        Commands::List {
            page,
            direction,
            strict,
            limit,
        } => {
            let opts = ListOptions {
                page: page.clone(),
                direction: direction.clone(),
                strict: *strict,
                limit: *limit,
            };
            commands::list::execute(&ctx, &config, &opts)
        }
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx, &config),
            Some(ConfigCommands::Set { key, value }) => {
                let opts = ConfigSetOptions {
                    key: key.clone(),
                    value: value.clone(),
                };
                commands::config::execute_set(&ctx, config, &opts)
            }
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },
        Commands::Completions { shell } => Ok(commands::completions::execute(shell)?),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::View(_) => "VIEW_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Input(_) => "INPUT_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::View(_) => ExitCode::from(1),
        CommandError::Input(_) => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Config(_) => ExitCode::from(5),
    }
}
