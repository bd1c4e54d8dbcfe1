//! Common helper functions for output formatting.

use memos_view::parse_display_time;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Collapses a memo body to its first non-empty line.
pub fn first_line(content: &str) -> &str {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Formats a display time as `YYYY-MM-DD HH:MM` UTC, or flags it as unreadable.
pub fn format_display_time(value: &str, use_colors: bool) -> String {
    match parse_display_time(value) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => {
            let label = if value.is_empty() {
                "(no time)".to_string()
            } else {
                format!("?{value}")
            };
            if use_colors {
                label.red().to_string()
            } else {
                label
            }
        }
    }
}
