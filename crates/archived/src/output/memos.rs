//! Archived memo list formatting.

use memos_view::Memo;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{first_line, format_display_time, truncate_str};

/// Width of the content column in table output.
const CONTENT_WIDTH: usize = 60;

/// JSON row for one memo.
#[derive(Serialize)]
struct MemoOutput<'a> {
    name: &'a str,
    key: String,
    display_time: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "no_tags")]
    tags: &'a [String],
    pinned: bool,
}

fn no_tags(tags: &&[String]) -> bool {
    tags.is_empty()
}

/// Formats memos as JSON.
pub fn format_memos_json(memos: &[&Memo]) -> Result<String, serde_json::Error> {
    let rows: Vec<MemoOutput> = memos
        .iter()
        .map(|m| MemoOutput {
            name: &m.name,
            key: m.render_key(),
            display_time: &m.display_time,
            content: &m.content,
            tags: &m.tags,
            pinned: m.pinned,
        })
        .collect();

    serde_json::to_string_pretty(&rows)
}

/// Formats memos as a table.
pub fn format_memos_table(memos: &[&Memo], use_colors: bool) -> String {
    if memos.is_empty() {
        return "No archived memos.\n".to_string();
    }

    let mut output = String::new();

    for memo in memos {
        let time = format_display_time(&memo.display_time, use_colors);
        let name = if use_colors {
            memo.name.dimmed().to_string()
        } else {
            memo.name.clone()
        };
        let content = truncate_str(first_line(&memo.content), CONTENT_WIDTH);
        let tags = if memo.tags.is_empty() {
            String::new()
        } else {
            let joined = memo
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            if use_colors {
                format!(" {}", joined.cyan())
            } else {
                format!(" {joined}")
            }
        };

        output.push_str(&format!("{time:<16}  {name}  {content}{tags}\n"));
    }

    output
}
