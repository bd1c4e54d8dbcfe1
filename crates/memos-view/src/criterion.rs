//! Filter criteria selected by the user and the ordered set that holds them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The category of a filter criterion.
///
/// Only [`ContentSearch`](FilterFactor::ContentSearch),
/// [`TagSearch`](FilterFactor::TagSearch) and
/// [`DueDate`](FilterFactor::DueDate) take part in query compilation. Any
/// other factor name is kept verbatim in [`Other`](FilterFactor::Other) so
/// that selections round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterFactor {
    /// Free-text search over memo content.
    ContentSearch,

    /// Search by tag name.
    TagSearch,

    /// Restrict to memos carrying a due date.
    DueDate,

    /// A factor this crate does not compile.
    Other(String),
}

impl FilterFactor {
    /// Returns the wire name of the factor.
    pub fn as_str(&self) -> &str {
        match self {
            FilterFactor::ContentSearch => "contentSearch",
            FilterFactor::TagSearch => "tagSearch",
            FilterFactor::DueDate => "dueDate",
            FilterFactor::Other(name) => name,
        }
    }
}

impl FromStr for FilterFactor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterFactor::from(s.to_string()))
    }
}

impl From<String> for FilterFactor {
    fn from(s: String) -> Self {
        match s.as_str() {
            "contentSearch" => FilterFactor::ContentSearch,
            "tagSearch" => FilterFactor::TagSearch,
            "dueDate" => FilterFactor::DueDate,
            _ => FilterFactor::Other(s),
        }
    }
}

impl From<FilterFactor> for String {
    fn from(factor: FilterFactor) -> Self {
        match factor {
            FilterFactor::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FilterFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single active filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriterion {
    /// What the value filters on.
    pub factor: FilterFactor,

    /// The selected value. Ignored for [`FilterFactor::DueDate`].
    #[serde(default)]
    pub value: String,
}

impl FilterCriterion {
    /// Creates a criterion from a factor and a value.
    pub fn new(factor: FilterFactor, value: impl Into<String>) -> Self {
        Self {
            factor,
            value: value.into(),
        }
    }

    /// Creates a content search criterion.
    pub fn content(value: impl Into<String>) -> Self {
        Self::new(FilterFactor::ContentSearch, value)
    }

    /// Creates a tag search criterion.
    pub fn tag(value: impl Into<String>) -> Self {
        Self::new(FilterFactor::TagSearch, value)
    }

    /// Creates a due date criterion.
    pub fn due_date() -> Self {
        Self::new(FilterFactor::DueDate, "")
    }
}

/// Ordered collection of active filter selections.
///
/// Insertion order is kept because it decides the order of terms inside
/// each compiled list. Selecting the exact same factor and value twice is a
/// no-op.
///
/// # Example
///
/// ```
/// use memos_view::{FilterCriterion, FilterSet};
///
/// let mut filters = FilterSet::new();
/// assert!(filters.add(FilterCriterion::tag("work")));
/// assert!(!filters.add(FilterCriterion::tag("work")));
/// assert_eq!(filters.query(), r#"tag_search == ["work"]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FilterCriterion>", into = "Vec<FilterCriterion>")]
pub struct FilterSet {
    criteria: Vec<FilterCriterion>,
}

impl FilterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion unless an identical one is already selected.
    ///
    /// Returns `true` if the criterion was added.
    pub fn add(&mut self, criterion: FilterCriterion) -> bool {
        if self.criteria.contains(&criterion) {
            return false;
        }
        self.criteria.push(criterion);
        true
    }

    /// Removes every criterion matching `predicate`, returning how many were removed.
    pub fn remove<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&FilterCriterion) -> bool,
    {
        let before = self.criteria.len();
        self.criteria.retain(|c| !predicate(c));
        before - self.criteria.len()
    }

    /// Removes all criteria.
    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterCriterion> {
        self.criteria.iter()
    }

    pub fn as_slice(&self) -> &[FilterCriterion] {
        &self.criteria
    }

    /// Compiles the current selection into a query expression.
    pub fn query(&self) -> String {
        crate::compiler::FilterCompiler::compile(&self.criteria)
    }
}

impl FromIterator<FilterCriterion> for FilterSet {
    fn from_iter<I: IntoIterator<Item = FilterCriterion>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for criterion in iter {
            set.add(criterion);
        }
        set
    }
}

impl From<Vec<FilterCriterion>> for FilterSet {
    fn from(criteria: Vec<FilterCriterion>) -> Self {
        criteria.into_iter().collect()
    }
}

impl From<FilterSet> for Vec<FilterCriterion> {
    fn from(set: FilterSet) -> Self {
        set.criteria
    }
}

impl Extend<FilterCriterion> for FilterSet {
    fn extend<I: IntoIterator<Item = FilterCriterion>>(&mut self, iter: I) {
        for criterion in iter {
            self.add(criterion);
        }
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterCriterion;
    type IntoIter = std::slice::Iter<'a, FilterCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}
