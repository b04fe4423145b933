//! Commit history abstraction layer
//!
//! The analyzer reads raw commit messages through the [CommitSource] trait,
//! so it can run against a real repository or an in-memory one:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing
//!
//! ```rust
//! # use conch::git::CommitSource;
//! # fn example<S: CommitSource>(source: &S) -> conch::Result<()> {
//! for raw in source.commits_in_range("main..HEAD")? {
//!     println!("{}: {}", raw.short_id, raw.message.lines().next().unwrap_or(""));
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// One commit as read from history, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    /// Full commit hash
    pub id: String,
    /// Abbreviated hash used in reports
    pub short_id: String,
    /// The complete commit message
    pub message: String,
}

impl RawCommit {
    pub fn new(
        id: impl Into<String>,
        short_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RawCommit {
            id: id.into(),
            short_id: short_id.into(),
            message: message.into(),
        }
    }
}

/// Source of commit messages for a revision range.
pub trait CommitSource {
    /// Get the commits of a revision range
    ///
    /// A range containing `..` (e.g. `v1.0.0..HEAD`) yields the commits
    /// reachable from the right side but not the left. Any other revision
    /// yields everything reachable from it.
    ///
    /// # Returns
    /// * `Ok(Vec<RawCommit>)` - Commits in traversal order, newest first
    /// * `Err` - If a revision cannot be resolved or git fails
    fn commits_in_range(&self, range: &str) -> Result<Vec<RawCommit>>;
}
