//! Memo records as returned by the memo list endpoint.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display_time::parse_display_time;

/// Lifecycle state of a memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    /// A regular, visible memo.
    Normal,

    /// A memo moved to the archive.
    Archived,

    /// Unset or unrecognized state.
    #[default]
    #[serde(other)]
    StateUnspecified,
}

impl State {
    /// Returns the wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::StateUnspecified => "STATE_UNSPECIFIED",
            State::Normal => "NORMAL",
            State::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A memo as delivered in a page of list results.
///
/// Only the fields this crate reads or displays are modelled; anything else
/// in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    /// Resource name, e.g. `memos/123`.
    pub name: String,

    #[serde(default)]
    pub state: State,

    /// Resource name of the author, e.g. `users/1`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub creator: String,

    #[serde(default)]
    pub content: String,

    /// Timestamp shown in the list and used for ordering, serialized form.
    #[serde(default)]
    pub display_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(default)]
    pub pinned: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Memo {
    /// Creates a memo with the given name, state and display time.
    pub fn new(name: impl Into<String>, state: State, display_time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state,
            display_time: display_time.into(),
            ..Self::default()
        }
    }

    pub fn is_archived(&self) -> bool {
        self.state == State::Archived
    }

    /// Parses the display time, if it is well formed.
    pub fn display_instant(&self) -> Option<DateTime<Utc>> {
        parse_display_time(&self.display_time)
    }

    /// Key identifying this memo revision in a rendered list.
    ///
    /// Changes whenever the memo is updated so stale rows are re-rendered.
    pub fn render_key(&self) -> String {
        format!("{}-{}", self.name, self.update_time.as_deref().unwrap_or_default())
    }
}

/// The endpoint's list response body.
///
/// `memos` may be absent (empty repeated fields are omitted on the wire),
/// but any other key is rejected so a misspelled envelope is not read as an
/// empty page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageEnvelope {
    #[serde(default)]
    pub memos: Vec<Memo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// One page of list results.
///
/// Accepts both the endpoint's envelope and a bare array of memos.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemoPage {
    Envelope(PageEnvelope),
    Bare(Vec<Memo>),
    #[default]
    Empty,
}

impl MemoPage {
    /// Returns the memos of this page.
    pub fn memos(&self) -> &[Memo] {
        match self {
            MemoPage::Envelope(envelope) => &envelope.memos,
            MemoPage::Bare(memos) => memos,
            MemoPage::Empty => &[],
        }
    }

    /// Consumes the page, returning its memos.
    pub fn into_memos(self) -> Vec<Memo> {
        match self {
            MemoPage::Envelope(envelope) => envelope.memos,
            MemoPage::Bare(memos) => memos,
            MemoPage::Empty => Vec::new(),
        }
    }

    /// Token of the next page, if the endpoint reported one.
    pub fn next_page_token(&self) -> Option<&str> {
        match self {
            MemoPage::Envelope(envelope) => envelope
                .next_page_token
                .as_deref()
                .filter(|t| !t.is_empty()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_deserialize() {
        let states: Vec<State> =
            serde_json::from_str(r#"["ARCHIVED", "NORMAL", "STATE_UNSPECIFIED"]"#).unwrap();
        assert_eq!(
            states,
            vec![State::Archived, State::Normal, State::StateUnspecified]
        );
    }

    #[test]
    fn test_unknown_state_is_unspecified() {
        let state: State = serde_json::from_str(r#""DELETED""#).unwrap();
        assert_eq!(state, State::StateUnspecified);
    }

    #[test]
    fn test_memo_deserialize_camel_case_ignores_unknown_fields() {
        let json = r#"{
            "name": "memos/7",
            "state": "ARCHIVED",
            "creator": "users/1",
            "content": "hello #work",
            "displayTime": "2024-02-03T04:05:06Z",
            "updateTime": "2024-02-04T00:00:00Z",
            "visibility": "PRIVATE",
            "pinned": true,
            "tags": ["work"],
            "reactions": [],
            "snippet": "hello"
        }"#;
        let memo: Memo = serde_json::from_str(json).unwrap();

        assert_eq!(memo.name, "memos/7");
        assert!(memo.is_archived());
        assert_eq!(memo.display_time, "2024-02-03T04:05:06Z");
        assert_eq!(memo.update_time.as_deref(), Some("2024-02-04T00:00:00Z"));
        assert!(memo.pinned);
        assert_eq!(memo.tags, vec!["work"]);
    }

    #[test]
    fn test_memo_minimal_payload() {
        let memo: Memo = serde_json::from_str(r#"{"name": "memos/1"}"#).unwrap();
        assert_eq!(memo.state, State::StateUnspecified);
        assert!(memo.display_time.is_empty());
        assert!(memo.display_instant().is_none());
    }

    #[test]
    fn test_render_key() {
        let mut memo = Memo::new("memos/9", State::Archived, "2024-01-01T00:00:00Z");
        assert_eq!(memo.render_key(), "memos/9-");

        memo.update_time = Some("2024-01-02T00:00:00Z".to_string());
        assert_eq!(memo.render_key(), "memos/9-2024-01-02T00:00:00Z");
    }

    #[test]
    fn test_page_envelope() {
        let json = r#"{"memos": [{"name": "memos/1"}], "nextPageToken": "abc"}"#;
        let page: MemoPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.memos().len(), 1);
        assert_eq!(page.next_page_token(), Some("abc"));
    }

    #[test]
    fn test_page_envelope_empty_token() {
        let json = r#"{"memos": [], "nextPageToken": ""}"#;
        let page: MemoPage = serde_json::from_str(json).unwrap();
        assert!(page.memos().is_empty());
        assert_eq!(page.next_page_token(), None);
    }

    #[test]
    fn test_page_envelope_without_memos_is_empty() {
        let page: MemoPage = serde_json::from_str(r#"{"nextPageToken": "abc"}"#).unwrap();
        assert!(page.memos().is_empty());
        assert_eq!(page.next_page_token(), Some("abc"));
    }

    #[test]
    fn test_page_misspelled_envelope_is_rejected() {
        let json = r#"{"memo": [{"name": "memos/1", "state": "ARCHIVED"}]}"#;
        assert!(serde_json::from_str::<MemoPage>(json).is_err());
    }

    #[test]
    fn test_state_serializes_wire_names() {
        let json = serde_json::to_string(&[State::Normal, State::Archived, State::StateUnspecified])
            .unwrap();
        assert_eq!(json, r#"["NORMAL","ARCHIVED","STATE_UNSPECIFIED"]"#);
    }

    #[test]
    fn test_page_bare_array() {
        let json = r#"[{"name": "memos/1"}, {"name": "memos/2"}]"#;
        let page: MemoPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.into_memos().len(), 2);
    }
}
