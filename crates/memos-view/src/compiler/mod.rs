//! Compiles filter selections into a query expression.
//!
//! The memo list endpoint accepts a small boolean grammar:
//!
//! ```text
//! expression ::= term (" && " term)*
//! term       ::= field " == " (literal | list)
//! list       ::= "[" quoted (", " quoted)* "]"
//! ```
//!
//! Only three fields are produced here: `has_due_date`, `content_search`
//! and `tag_search`.

mod condition;

pub use condition::{Condition, AND};

use crate::criterion::{FilterCriterion, FilterFactor};

/// Stateless compiler from [`FilterCriterion`] selections to a query string.
///
/// # Example
///
/// ```
/// use memos_view::{FilterCompiler, FilterCriterion};
///
/// let query = FilterCompiler::compile(&[
///     FilterCriterion::tag("x"),
///     FilterCriterion::content("y"),
/// ]);
/// assert_eq!(query, r#"content_search == ["y"] && tag_search == ["x"]"#);
/// ```
pub struct FilterCompiler;

impl FilterCompiler {
    /// Compiles criteria into a query expression.
    ///
    /// Due date terms come first (one per occurrence), followed by one
    /// `content_search` list and one `tag_search` list. Terms inside each
    /// list keep input order. Unknown factors are skipped. Returns an empty
    /// string when nothing compiles.
    pub fn compile(criteria: &[FilterCriterion]) -> String {
        let conditions = Self::conditions(criteria);
        let query = conditions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(AND);

        tracing::debug!(query = %query, terms = conditions.len(), "compiled memo filter");
        query
    }

    /// Builds the ordered list of conditions without rendering them.
    pub fn conditions(criteria: &[FilterCriterion]) -> Vec<Condition> {
        let mut conditions = Vec::new();
        let mut content_search = Vec::new();
        let mut tag_search = Vec::new();

        for criterion in criteria {
            match &criterion.factor {
                FilterFactor::ContentSearch => content_search.push(criterion.value.clone()),
                FilterFactor::TagSearch => tag_search.push(criterion.value.clone()),
                FilterFactor::DueDate => conditions.push(Condition::HasDueDate),
                FilterFactor::Other(name) => {
                    tracing::debug!(factor = %name, "ignoring filter factor");
                }
            }
        }

        if !content_search.is_empty() {
            conditions.push(Condition::ContentSearch(content_search));
        }
        if !tag_search.is_empty() {
            conditions.push(Condition::TagSearch(tag_search));
        }

        conditions
    }
}
