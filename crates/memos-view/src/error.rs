//! Error types for the archived memo view.

use thiserror::Error;

/// A specialized Result type for archived view operations.
pub type ArchivedViewResult<T> = Result<T, ArchivedViewError>;

/// Errors that can occur while post-processing a page of memos.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArchivedViewError {
    /// A memo's display time could not be interpreted as a point in time.
    #[error("memo {name} has an invalid display time: {value:?}")]
    InvalidDisplayTime {
        /// Resource name of the offending memo.
        name: String,
        /// The display time as received.
        value: String,
    },
}

impl ArchivedViewError {
    /// Creates an invalid display time error.
    pub fn invalid_display_time(name: impl Into<String>, value: impl Into<String>) -> Self {
        ArchivedViewError::InvalidDisplayTime {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_time_message() {
        let error = ArchivedViewError::invalid_display_time("memos/42", "yesterday-ish");
        assert_eq!(
            error.to_string(),
            "memo memos/42 has an invalid display time: \"yesterday-ish\""
        );
    }
}
