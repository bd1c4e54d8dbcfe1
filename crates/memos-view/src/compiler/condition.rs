//! Terms of the boolean query grammar understood by the memo list endpoint.

use std::fmt;

/// Joins conditions into one expression (logical AND).
pub const AND: &str = " && ";

/// A single `field == value` term of a query expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `has_due_date == true`
    HasDueDate,

    /// `content_search == ["a", "b"]`
    ContentSearch(Vec<String>),

    /// `tag_search == ["a", "b"]`
    TagSearch(Vec<String>),
}

impl Condition {
    /// Returns the field name on the left-hand side of the term.
    pub fn field(&self) -> &'static str {
        match self {
            Condition::HasDueDate => "has_due_date",
            Condition::ContentSearch(_) => "content_search",
            Condition::TagSearch(_) => "tag_search",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::HasDueDate => write!(f, "{} == true", self.field()),
            Condition::ContentSearch(terms) | Condition::TagSearch(terms) => {
                write!(f, "{} == [", self.field())?;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // Values go in verbatim; the endpoint does no unescaping.
                    write!(f, "\"{term}\"")?;
                }
                f.write_str("]")
            }
        }
    }
}
