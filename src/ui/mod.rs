//! User interface module - report formatting.

pub mod formatter;

pub use formatter::{display_batch_errors, display_error, display_output, format_commit_line};
