//! The archived list view, with its state passed in explicitly.

use crate::criterion::FilterCriterion;
use crate::error::ArchivedViewResult;
use crate::memo::Memo;
use crate::post_process::ResultPostProcessor;
use crate::request::{ListMemosRequest, SortDirection};

/// How memos with an unreadable display time are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayTimePolicy {
    /// Order them after every readable memo.
    #[default]
    SortLast,
    /// Fail the whole page.
    Reject,
}

/// View state for listing a user's archived memos.
///
/// Callers rebuild the request and re-run [`ArchivedView::process`]
/// whenever the filters, the direction or the fetched page change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedView {
    /// Resource name of the current user, e.g. `users/1`.
    pub owner: String,
    pub direction: SortDirection,
    pub display_time_policy: DisplayTimePolicy,
}

impl ArchivedView {
    pub fn new(owner: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            owner: owner.into(),
            direction,
            display_time_policy: DisplayTimePolicy::default(),
        }
    }

    /// Sets the policy for unreadable display times.
    pub fn with_display_time_policy(mut self, policy: DisplayTimePolicy) -> Self {
        self.display_time_policy = policy;
        self
    }

    /// Builds the list request for the given filter selections.
    pub fn request(&self, criteria: &[FilterCriterion]) -> ListMemosRequest {
        ListMemosRequest::archived(self.owner.clone(), self.direction, criteria)
    }

    /// Filters and orders a fetched page according to the view state.
    ///
    /// # Errors
    ///
    /// Only fails under [`DisplayTimePolicy::Reject`].
    pub fn process<'a>(&self, page: &'a [Memo]) -> ArchivedViewResult<Vec<&'a Memo>> {
        let ascending = self.direction.is_ascending();
        match self.display_time_policy {
            DisplayTimePolicy::SortLast => Ok(ResultPostProcessor::process(page, ascending)),
            DisplayTimePolicy::Reject => ResultPostProcessor::try_process(page, ascending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::State;

    #[test]
    fn test_request_uses_view_state() {
        let view = ArchivedView::new("users/3", SortDirection::Ascending);
        let request = view.request(&[FilterCriterion::content("x")]);

        assert_eq!(request.owner, "users/3");
        assert_eq!(request.state, State::Archived);
        assert_eq!(request.order_by, "display_time asc");
        assert_eq!(request.filter, r#"content_search == ["x"]"#);
    }

    #[test]
    fn test_process_sort_last_policy() {
        let page = vec![
            Memo::new("bad", State::Archived, "nope"),
            Memo::new("ok", State::Archived, "2024-01-01T00:00:00Z"),
        ];
        let view = ArchivedView::new("users/1", SortDirection::Descending);
        let out = view.process(&page).unwrap();
        assert_eq!(out[0].name, "ok");
        assert_eq!(out[1].name, "bad");
    }

    #[test]
    fn test_process_reject_policy() {
        let page = vec![Memo::new("bad", State::Archived, "nope")];
        let view = ArchivedView::new("users/1", SortDirection::Descending)
            .with_display_time_policy(DisplayTimePolicy::Reject);
        assert!(view.process(&page).is_err());
    }
}
