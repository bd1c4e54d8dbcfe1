//! The request handed to the external paged-fetch collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compiler::FilterCompiler;
use crate::criterion::FilterCriterion;
use crate::memo::State;

/// Field the archived list is ordered by.
pub const ORDER_FIELD: &str = "display_time";

/// Ordering of the list by display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Earliest first.
    Ascending,
    /// Latest first.
    #[default]
    Descending,
}

impl SortDirection {
    /// Maps the "order by time ascending" view flag to a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Returns the order-by directive, `display_time asc` or `display_time desc`.
    pub fn order_by(self) -> String {
        format!("{} {}", ORDER_FIELD, self)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Parameters for one list call against the memo endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMemosRequest {
    /// Resource name of the user whose memos are listed.
    pub owner: String,

    pub state: State,

    /// Order-by directive, e.g. `display_time desc`.
    pub order_by: String,

    /// Compiled query expression; empty when no filter is active.
    #[serde(default)]
    pub filter: String,
}

impl ListMemosRequest {
    /// Builds the request for the archived view.
    ///
    /// # Example
    ///
    /// ```
    /// use memos_view::{FilterCriterion, ListMemosRequest, SortDirection, State};
    ///
    /// let request = ListMemosRequest::archived(
    ///     "users/1",
    ///     SortDirection::Ascending,
    ///     &[FilterCriterion::due_date()],
    /// );
    /// assert_eq!(request.state, State::Archived);
    /// assert_eq!(request.order_by, "display_time asc");
    /// assert_eq!(request.filter, "has_due_date == true");
    /// ```
    pub fn archived(
        owner: impl Into<String>,
        direction: SortDirection,
        criteria: &[FilterCriterion],
    ) -> Self {
        Self {
            owner: owner.into(),
            state: State::Archived,
            order_by: direction.order_by(),
            filter: FilterCompiler::compile(criteria),
        }
    }
}
