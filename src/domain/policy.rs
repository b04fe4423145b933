//! Authoring rules applied to parsed commits.

use tracing::debug;

use crate::domain::{CaseInsensitiveSet, Commit};
use crate::error::{BatchError, PolicyError};

/// Rules a commit must satisfy beyond the grammar.
///
/// An empty `allowed_*` set places no restriction on that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub allowed_types: CaseInsensitiveSet,
    pub minor_types: CaseInsensitiveSet,
    pub patch_types: CaseInsensitiveSet,
    pub scope_required: bool,
    pub allowed_scopes: CaseInsensitiveSet,
    pub min_length: usize,
    /// `0` leaves the description unbounded.
    pub max_length: usize,
    pub required_tokens: CaseInsensitiveSet,
    pub allowed_tokens: CaseInsensitiveSet,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            allowed_types: CaseInsensitiveSet::new(),
            minor_types: ["feat"].into_iter().collect(),
            patch_types: ["fix"].into_iter().collect(),
            scope_required: false,
            allowed_scopes: CaseInsensitiveSet::new(),
            min_length: 1,
            max_length: 0,
            required_tokens: CaseInsensitiveSet::new(),
            allowed_tokens: CaseInsensitiveSet::new(),
        }
    }
}

impl Policy {
    /// Check one commit, stopping at the first violation.
    pub fn check(&self, commit: &Commit) -> Result<(), PolicyError> {
        let id = || commit.short_id().to_string();

        if !self.allowed_types.is_empty() && !self.allowed_types.contains(commit.r#type()) {
            return Err(PolicyError::UnrecognizedType { id: id() });
        }

        if commit.scope().is_empty() {
            if self.scope_required {
                return Err(PolicyError::RequiredScope { id: id() });
            }
        } else if !self.allowed_scopes.is_empty() && !self.allowed_scopes.contains(commit.scope())
        {
            return Err(PolicyError::UnrecognizedScope { id: id() });
        }

        let min = self.min_length.max(1);
        let length = commit.description().len();
        if length < min || (self.max_length > 0 && length > self.max_length) {
            return Err(PolicyError::DescriptionLength {
                id: id(),
                min,
                max: self.max_length,
            });
        }

        // the policy stays untouched; seen tokens are removed from a copy
        let mut missing = self.required_tokens.clone();
        for footer in commit.footers() {
            if !self.allowed_tokens.is_empty() && !self.allowed_tokens.contains(&footer.token) {
                return Err(PolicyError::UnrecognizedFooter {
                    id: id(),
                    token: footer.token.clone(),
                });
            }
            missing.remove(&footer.token);
        }

        if !missing.is_empty() {
            return Err(PolicyError::RequiredFooters {
                id: id(),
                tokens: missing.iter().map(str::to_string).collect(),
            });
        }

        Ok(())
    }

    /// Check every commit, collecting one violation per failing commit.
    pub fn check_all(&self, commits: &[Commit]) -> Result<(), BatchError> {
        let mut errors = BatchError::new();
        for commit in commits {
            if let Err(err) = self.check(commit) {
                debug!(id = commit.short_id(), error = %err, "policy violation");
                errors.push(err);
            }
        }
        errors.into_result()
    }
}
