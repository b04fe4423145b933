use std::path::Path;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::error::Result;
use crate::git::{CommitSource, RawCommit};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl CommitSource for Git2Repository {
    fn commits_in_range(&self, range: &str) -> Result<Vec<RawCommit>> {
        let mut revwalk = self.repo.revwalk()?;

        if range.contains("..") {
            revwalk.push_range(range)?;
        } else {
            let object = self.repo.revparse_single(range)?;
            revwalk.push(object.peel_to_commit()?.id())?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let short_id = commit
                .as_object()
                .short_id()?
                .as_str()
                .unwrap_or_default()
                .to_string();
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

            commits.push(RawCommit {
                id: oid.to_string(),
                short_id,
                message,
            });
        }

        debug!(range, count = commits.len(), "walked revision range");
        Ok(commits)
    }
}
