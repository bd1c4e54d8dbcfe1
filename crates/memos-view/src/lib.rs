//! Query compilation and client-side post-processing for the archived memo list.
//!
//! The archived view asks the memo endpoint for one page at a time. This
//! crate covers the two pieces of logic around that call:
//!
//! - [`FilterCompiler`] turns the active [`FilterCriterion`] selections into
//!   the endpoint's query expression.
//! - [`ResultPostProcessor`] keeps the archived memos of a returned page and
//!   orders them by display time.
//!
//! Fetching, pagination and rendering belong to the caller.
//!
//! # Example
//!
//! ```
//! use memos_view::{ArchivedView, FilterCriterion, FilterSet, Memo, SortDirection, State};
//!
//! let mut filters = FilterSet::new();
//! filters.add(FilterCriterion::content("rust"));
//! filters.add(FilterCriterion::due_date());
//!
//! let view = ArchivedView::new("users/1", SortDirection::Descending);
//! let request = view.request(filters.as_slice());
//! assert_eq!(
//!     request.filter,
//!     r#"has_due_date == true && content_search == ["rust"]"#
//! );
//!
//! // ...the caller fetches a page with `request`...
//! let page = vec![
//!     Memo::new("memos/1", State::Archived, "2024-01-01T00:00:00Z"),
//!     Memo::new("memos/2", State::Archived, "2024-06-01T00:00:00Z"),
//! ];
//! let memos = view.process(&page).unwrap();
//! assert_eq!(memos[0].name, "memos/2");
//! ```

pub mod compiler;
pub mod criterion;
pub mod display_time;
pub mod error;
pub mod memo;
pub mod post_process;
pub mod request;
pub mod view;

pub use compiler::{Condition, FilterCompiler};
pub use criterion::{FilterCriterion, FilterFactor, FilterSet};
pub use display_time::{display_epoch_seconds, parse_display_time};
pub use error::{ArchivedViewError, ArchivedViewResult};
pub use memo::{Memo, MemoPage, PageEnvelope, State};
pub use post_process::ResultPostProcessor;
pub use request::{ListMemosRequest, SortDirection};
pub use view::{ArchivedView, DisplayTimePolicy};
