//! List request formatting.

use memos_view::ListMemosRequest;
use owo_colors::OwoColorize;

/// Formats a list request as JSON.
pub fn format_request_json(request: &ListMemosRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(request)
}

/// Formats a list request as labelled lines.
pub fn format_request_table(request: &ListMemosRequest, use_colors: bool) -> String {
    let filter = if request.filter.is_empty() {
        "(none)"
    } else {
        request.filter.as_str()
    };

    let rows = [
        ("owner", request.owner.as_str()),
        ("state", request.state.as_str()),
        ("orderBy", request.order_by.as_str()),
        ("filter", filter),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        let label = format!("{label:<8}");
        if use_colors {
            output.push_str(&format!("{}  {}\n", label.bold(), value));
        } else {
            output.push_str(&format!("{label}  {value}\n"));
        }
    }
    output
}
