//! Reading filter selections and memo pages from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use memos_view::{FilterCriterion, FilterSet, Memo, MemoPage};
use serde::de::DeserializeOwned;

use super::{CommandError, Result};
use crate::cli::FilterArgs;

/// Reads the whole of `path`, or stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    fs::read_to_string(path)
        .map_err(|e| CommandError::Input(format!("Failed to read {}: {}", path.display(), e)))
}

/// Parses JSON read from `path`, naming the source on failure.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_source(path)?;
    serde_json::from_str(&content)
        .map_err(|e| CommandError::Input(format!("{}: {}", path.display(), e)))
}

/// Collects the filter selections from a file and the command-line flags.
///
/// File selections come first, then `--due-date`, `--content` and `--tag`
/// in the order given.
pub fn collect_filters(args: &FilterArgs) -> Result<FilterSet> {
    let mut set = FilterSet::new();

    if let Some(path) = &args.filters {
        let criteria: Vec<FilterCriterion> = read_json(path)?;
        tracing::debug!(count = criteria.len(), path = %path.display(), "read filter selections");
        set.extend(criteria);
    }

    if args.due_date {
        set.add(FilterCriterion::due_date());
    }
    set.extend(args.content.iter().map(FilterCriterion::content));
    set.extend(args.tag.iter().map(FilterCriterion::tag));

    Ok(set)
}

/// Reads a page of memos (envelope or bare array).
pub fn read_page(path: &Path) -> Result<Vec<Memo>> {
    let page: MemoPage = read_json(path)?;
    if let Some(token) = page.next_page_token() {
        tracing::debug!(next_page_token = %token, "page has more results");
    }
    Ok(page.into_memos())
}
