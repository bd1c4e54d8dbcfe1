//! Integration tests for the archived view: request building and page
//! post-processing through the public API.

use chrono::TimeZone;
use chrono_tz::{America::New_York, Asia::Tokyo};
use memos_view::{
    ArchivedView, DisplayTimePolicy, FilterCriterion, FilterFactor, FilterSet, Memo, MemoPage,
    ResultPostProcessor, SortDirection, State,
};

fn page_from_json(json: &str) -> Vec<Memo> {
    serde_json::from_str::<MemoPage>(json).unwrap().into_memos()
}

fn names(memos: &[&Memo]) -> Vec<String> {
    memos.iter().map(|m| m.name.clone()).collect()
}

fn mixed_page() -> Vec<Memo> {
    page_from_json(
        r#"{
            "memos": [
                {"name": "memos/1", "state": "ARCHIVED", "displayTime": "2024-03-01T12:00:00Z"},
                {"name": "memos/2", "state": "NORMAL",   "displayTime": "2024-03-02T12:00:00Z"},
                {"name": "memos/3", "state": "ARCHIVED", "displayTime": "2024-02-01T12:00:00Z"},
                {"name": "memos/4", "state": "ARCHIVED", "displayTime": "2024-04-01T12:00:00Z"},
                {"name": "memos/5", "state": "STATE_UNSPECIFIED", "displayTime": "2024-01-01T00:00:00Z"},
                {"name": "memos/6", "state": "ARCHIVED", "displayTime": "2024-03-01T12:00:00Z"}
            ],
            "nextPageToken": "next"
        }"#,
    )
}

// ==================== Request ====================

#[test]
fn test_request_for_selected_filters() {
    let filters: FilterSet = vec![
        FilterCriterion::tag("reading"),
        FilterCriterion::new(FilterFactor::Other("pinned".to_string()), "true"),
        FilterCriterion::content("book"),
        FilterCriterion::tag("later"),
        FilterCriterion::due_date(),
    ]
    .into_iter()
    .collect();

    let view = ArchivedView::new("users/42", SortDirection::Descending);
    let request = view.request(filters.as_slice());
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "owner": "users/42",
            "state": "ARCHIVED",
            "orderBy": "display_time desc",
            "filter": r#"has_due_date == true && content_search == ["book"] && tag_search == ["reading", "later"]"#,
        })
    );
}

// ==================== Post-processing ====================

#[test]
fn test_process_only_archived_and_permutation_of_subset() {
    let page = mixed_page();
    for ascending in [true, false] {
        let out = ResultPostProcessor::process(&page, ascending);

        let mut got = names(&out);
        got.sort();
        let mut expected: Vec<String> = page
            .iter()
            .filter(|m| m.state == State::Archived)
            .map(|m| m.name.clone())
            .collect();
        expected.sort();

        assert_eq!(got, expected);
    }
}

#[test]
fn test_process_orders_and_breaks_ties_by_page_order() {
    let page = mixed_page();

    assert_eq!(
        names(&ResultPostProcessor::process(&page, true)),
        vec!["memos/3", "memos/1", "memos/6", "memos/4"]
    );
    assert_eq!(
        names(&ResultPostProcessor::process(&page, false)),
        vec!["memos/4", "memos/1", "memos/6", "memos/3"]
    );
}

#[test]
fn test_process_is_idempotent() {
    let page = mixed_page();
    for ascending in [true, false] {
        let once: Vec<Memo> = ResultPostProcessor::process(&page, ascending)
            .into_iter()
            .cloned()
            .collect();
        let twice = ResultPostProcessor::process(&once, ascending);
        assert_eq!(names(&twice), once.iter().map(|m| m.name.clone()).collect::<Vec<_>>());
    }
}

#[test]
fn test_process_compares_instants_across_offsets() {
    // 09:00 in Tokyo is 00:00 UTC; 21:00 the previous day in New York is 01:00 UTC.
    let tokyo = Tokyo.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
    let new_york = New_York.with_ymd_and_hms(2024, 6, 30, 21, 0, 0).unwrap();

    let page = vec![
        Memo::new("memos/ny", State::Archived, new_york.to_rfc3339()),
        Memo::new("memos/tokyo", State::Archived, tokyo.to_rfc3339()),
    ];

    assert_eq!(
        names(&ResultPostProcessor::process(&page, true)),
        vec!["memos/tokyo", "memos/ny"]
    );
}

#[test]
fn test_view_reject_policy_surfaces_memo_name() {
    let page = page_from_json(
        r#"[
            {"name": "memos/1", "state": "ARCHIVED", "displayTime": "2024-01-01T00:00:00Z"},
            {"name": "memos/2", "state": "ARCHIVED", "displayTime": "someday"}
        ]"#,
    );
    let view = ArchivedView::new("users/1", SortDirection::Ascending)
        .with_display_time_policy(DisplayTimePolicy::Reject);

    let err = view.process(&page).unwrap_err();
    assert!(err.to_string().contains("memos/2"));
}
