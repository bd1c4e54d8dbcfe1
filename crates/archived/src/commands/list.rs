//! List command implementation.
//!
//! Shows the archived memos of a fetched page, ordered by display time.

use std::path::PathBuf;

use memos_view::{ArchivedView, Memo};

use super::config::Config;
use super::input::read_page;
use super::{CommandContext, Result};
use crate::cli::DirectionArgs;
use crate::output::{format_memos_json, format_memos_table};

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions {
    /// Page source, `-` for stdin.
    pub page: PathBuf,
    pub direction: DirectionArgs,
    /// Fail on unreadable display times.
    pub strict: bool,
    /// Limit results.
    pub limit: Option<usize>,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if the page cannot be read or parsed, or, in strict
/// mode, if an archived memo has an unreadable display time.
pub fn execute(ctx: &CommandContext, config: &Config, opts: &ListOptions) -> Result<()> {
    let page = read_page(&opts.page)?;

    // The owner is not needed to order a page that was already fetched.
    let view = ArchivedView::new(
        config.owner.clone().unwrap_or_default(),
        config.direction(opts.direction.ascending()),
    )
    .with_display_time_policy(config.display_time_policy(opts.strict));

    let memos = view.process(&page)?;
    if ctx.verbose {
        eprintln!(
            "{} of {} memos archived, ordered by {}",
            memos.len(),
            page.len(),
            view.direction.order_by()
        );
    }

    let memos = apply_limit(memos, opts.limit);

    if ctx.json_output {
        println!("{}", format_memos_json(&memos)?);
    } else if !ctx.quiet {
        print!("{}", format_memos_table(&memos, ctx.use_colors));
    }

    Ok(())
}

/// Applies the optional limit to the memos.
fn apply_limit(memos: Vec<&Memo>, limit: Option<usize>) -> Vec<&Memo> {
    match limit {
        Some(n) => memos.into_iter().take(n).collect(),
        None => memos,
    }
}
