use crate::error::{ConchError, Result};
use crate::git::{CommitSource, RawCommit};

/// Mock repository for testing without actual git operations
///
/// Holds commits newest first, the order a revwalk yields them. Every range
/// returns all of them, except the range `"missing"`, which fails like an
/// unknown revision.
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    commits: Vec<RawCommit>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from messages, newest first, with generated ids
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repo = MockRepository::new();
        for message in messages {
            let id = format!("{:040x}", repo.commits.len() + 1);
            let short_id = id[33..].to_string();
            repo.add_commit(RawCommit::new(id, short_id, message));
        }
        repo
    }

    /// Append a commit, older than every commit already added
    pub fn add_commit(&mut self, commit: RawCommit) {
        self.commits.push(commit);
    }
}

impl CommitSource for MockRepository {
    fn commits_in_range(&self, range: &str) -> Result<Vec<RawCommit>> {
        if range == "missing" {
            return Err(ConchError::Git(git2::Error::from_str(
                "revspec 'missing' not found",
            )));
        }
        Ok(self.commits.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_keeps_order() {
        let repo = MockRepository::from_messages(["fix: newest", "feat: oldest"]);
        let commits = repo.commits_in_range("HEAD").unwrap();

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "fix: newest");
        assert_eq!(commits[0].short_id, "0000001");
        assert_eq!(commits[1].short_id, "0000002");
        assert!(commits[1].id.ends_with(&commits[1].short_id));
    }

    #[test]
    fn test_mock_repository_missing_range() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.commits_in_range("missing"),
            Err(ConchError::Git(_))
        ));
    }
}
