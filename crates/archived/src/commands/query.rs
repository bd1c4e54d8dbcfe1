//! Query and request command implementations.
//!
//! Compile the active filter selections and build the list request for the
//! archived view.

use memos_view::ArchivedView;

use super::config::Config;
use super::input::collect_filters;
use super::{CommandContext, CommandError, Result};
use crate::cli::{DirectionArgs, FilterArgs};
use crate::output::{format_request_json, format_request_table};

/// Options for the request command.
#[derive(Debug)]
pub struct RequestOptions<'a> {
    pub filters: &'a FilterArgs,
    pub direction: &'a DirectionArgs,
    /// Owner from the command line or environment.
    pub owner: Option<&'a str>,
}

/// Executes the query command.
pub fn execute_query(ctx: &CommandContext, filters: &FilterArgs) -> Result<()> {
    let set = collect_filters(filters)?;
    let query = set.query();

    if ctx.json_output {
        let output = serde_json::json!({
            "filter": query,
            "criteria": set,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("{query}");
    }

    Ok(())
}

/// Resolves the owner: flag or environment first, then config.
fn resolve_owner(flag: Option<&str>, config: &Config) -> Result<String> {
    flag.map(str::to_string)
        .or_else(|| config.owner.clone())
        .filter(|owner| !owner.trim().is_empty())
        .ok_or_else(|| {
            CommandError::Config(
                "No owner set. Pass --owner or run 'memos-archived config set owner users/<id>'"
                    .to_string(),
            )
        })
}

/// Executes the request command.
///
/// # Errors
///
/// Returns a configuration error if no owner is available.
pub fn execute_request(ctx: &CommandContext, config: &Config, opts: &RequestOptions) -> Result<()> {
    let owner = resolve_owner(opts.owner, config)?;
    let set = collect_filters(opts.filters)?;
    let view = ArchivedView::new(owner, config.direction(opts.direction.ascending()));
    let request = view.request(set.as_slice());

    if ctx.verbose {
        eprintln!("Building archived list request for {}", request.owner);
    }

    if ctx.json_output {
        println!("{}", format_request_json(&request)?);
    } else if !ctx.quiet {
        print!("{}", format_request_table(&request, ctx.use_colors));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_owner_prefers_flag() {
        let config = Config {
            owner: Some("users/config".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_owner(Some("users/flag"), &config).unwrap(), "users/flag");
        assert_eq!(resolve_owner(None, &config).unwrap(), "users/config");
    }

    #[test]
    fn test_resolve_owner_missing() {
        let config = Config::default();
        assert!(matches!(
            resolve_owner(None, &config),
            Err(CommandError::Config(_))
        ));
        assert!(resolve_owner(Some(""), &config).is_err());
    }
}
