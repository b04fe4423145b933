use tracing::{debug, info};

use crate::config::Config;
use crate::domain::commit::MESSAGE_ID;
use crate::domain::{Classification, Commit, Version};
use crate::error::{BatchError, Result, VersionError};
use crate::git::{CommitSource, RawCommit};

/// Outcome of analyzing a batch of commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Commits that parsed and satisfied the policy, in traversal order
    pub commits: Vec<Commit>,
    /// One error per rejected commit, in traversal order
    pub errors: BatchError,
    /// Number of commits skipped by the exclusion filter
    pub excluded: usize,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }
}

/// Parses commits, applies the policy and derives their impact
pub struct CommitAnalyzer {
    config: Config,
}

impl CommitAnalyzer {
    /// Create a new commit analyzer
    pub fn new(config: Config) -> Self {
        CommitAnalyzer { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze the commits of a revision range
    pub fn analyze_repository_range<S: CommitSource>(
        &self,
        source: &S,
        range: &str,
    ) -> Result<Analysis> {
        let commits = source.commits_in_range(range)?;
        info!(range, count = commits.len(), "analyzing commits");
        Ok(self.analyze_commits(commits))
    }

    /// Analyze a single message that is not part of a repository
    pub fn analyze_message(&self, message: &str) -> Analysis {
        self.analyze_commits([RawCommit::new(MESSAGE_ID, MESSAGE_ID, message)])
    }

    /// Filter, parse and check each commit, keeping every failure
    pub fn analyze_commits<I>(&self, raw_commits: I) -> Analysis
    where
        I: IntoIterator<Item = RawCommit>,
    {
        let mut analysis = Analysis::default();

        for raw in raw_commits {
            if self.config.exclude.is_excluded(&raw.message) {
                debug!(id = %raw.short_id, "commit excluded by prefix");
                analysis.excluded += 1;
                continue;
            }

            let commit = match Commit::parse(raw.id, raw.short_id, &raw.message) {
                Ok(commit) => commit,
                Err(err) => {
                    debug!(id = err.id(), "commit failed to parse");
                    analysis.errors.push(err);
                    continue;
                }
            };

            match self.config.policy.check(&commit) {
                Ok(()) => analysis.commits.push(commit),
                Err(err) => {
                    debug!(id = commit.short_id(), "commit violates policy");
                    analysis.errors.push(err);
                }
            }
        }

        analysis
    }

    /// Impact of one commit under the configured policy
    pub fn classify(&self, commit: &Commit) -> Classification {
        commit.classification(&self.config.policy)
    }

    /// Most severe impact of `commits`
    pub fn impact(&self, commits: &[Commit]) -> Classification {
        Classification::aggregate(commits.iter().map(|c| self.classify(c)))
    }

    /// The version that follows `current` for the given impact
    pub fn next_version(
        &self,
        current: &str,
        impact: Classification,
    ) -> std::result::Result<Version, VersionError> {
        let version = Version::parse(current)?;
        let next = version.bump(impact)?;
        debug!(from = %version, to = %next, %impact, "computed next version");
        Ok(next)
    }
}
