//! Pure formatting functions for UI output.
//!
//! `format_*` functions build plain text. `display_*` functions print it,
//! styled with `console`, which drops colors when the stream is not a terminal.

use console::style;

use crate::domain::Commit;
use crate::error::BatchError;

/// One line of `--list` output: `{short_id}: {summary}`.
pub fn format_commit_line(commit: &Commit) -> String {
    format!("{}: {}", commit.short_id(), commit.summary())
}

/// Print a line of report output.
pub fn display_output(line: &str) {
    println!("{}", line);
}

/// Print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", style(message).red().for_stderr());
}

/// Print every error of a batch, one per line.
pub fn display_batch_errors(errors: &BatchError) {
    for err in errors.errors() {
        display_error(&err.to_string());
    }
}
