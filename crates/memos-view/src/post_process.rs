//! Client-side filtering and ordering of a fetched page of memos.

use std::cmp::Ordering;

use crate::display_time::display_epoch_seconds;
use crate::error::{ArchivedViewError, ArchivedViewResult};
use crate::memo::Memo;

/// Keeps archived memos of a page and orders them by display time.
///
/// Ordering uses whole epoch seconds. Memos with equal instants keep their
/// page order.
pub struct ResultPostProcessor;

impl ResultPostProcessor {
    /// Filters and sorts a page, placing memos with an unreadable display
    /// time after all others regardless of direction.
    ///
    /// # Example
    ///
    /// ```
    /// use memos_view::{Memo, ResultPostProcessor, State};
    ///
    /// let page = vec![
    ///     Memo::new("memos/1", State::Archived, "2024-01-03T00:00:00Z"),
    ///     Memo::new("memos/2", State::Normal, "2024-01-02T00:00:00Z"),
    ///     Memo::new("memos/3", State::Archived, "2024-01-01T00:00:00Z"),
    /// ];
    /// let names: Vec<&str> = ResultPostProcessor::process(&page, true)
    ///     .iter()
    ///     .map(|m| m.name.as_str())
    ///     .collect();
    /// assert_eq!(names, vec!["memos/3", "memos/1"]);
    /// ```
    pub fn process(items: &[Memo], ascending: bool) -> Vec<&Memo> {
        let mut keyed: Vec<(Option<i64>, &Memo)> = items
            .iter()
            .filter(|memo| memo.is_archived())
            .map(|memo| {
                let key = display_epoch_seconds(&memo.display_time);
                if key.is_none() {
                    tracing::warn!(
                        memo = %memo.name,
                        display_time = %memo.display_time,
                        "unreadable display time, ordering memo last"
                    );
                }
                (key, memo)
            })
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => compare_instants(*a, *b, ascending),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        keyed.into_iter().map(|(_, memo)| memo).collect()
    }

    /// Filters and sorts a page, failing on the first archived memo whose
    /// display time cannot be read.
    ///
    /// Non-archived memos are dropped before parsing, so their display
    /// times are never checked.
    ///
    /// # Errors
    ///
    /// Returns [`ArchivedViewError::InvalidDisplayTime`] naming the memo.
    pub fn try_process(items: &[Memo], ascending: bool) -> ArchivedViewResult<Vec<&Memo>> {
        let mut keyed = items
            .iter()
            .filter(|memo| memo.is_archived())
            .map(|memo| {
                display_epoch_seconds(&memo.display_time)
                    .map(|key| (key, memo))
                    .ok_or_else(|| {
                        ArchivedViewError::invalid_display_time(&memo.name, &memo.display_time)
                    })
            })
            .collect::<ArchivedViewResult<Vec<_>>>()?;

        keyed.sort_by(|(a, _), (b, _)| compare_instants(*a, *b, ascending));

        Ok(keyed.into_iter().map(|(_, memo)| memo).collect())
    }
}

fn compare_instants(a: i64, b: i64, ascending: bool) -> Ordering {
    if ascending {
        a.cmp(&b)
    } else {
        b.cmp(&a)
    }
}
