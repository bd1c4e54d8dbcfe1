//! Output formatting utilities for the memos-archived CLI.
//!
//! - [`memos`] - Archived memo list formatting
//! - [`request`] - List request formatting
//! - [`helpers`] - Common formatting utilities (truncation, timestamps)

pub mod helpers;
mod memos;
mod request;

pub use memos::{format_memos_json, format_memos_table};
pub use request::{format_request_json, format_request_table};
