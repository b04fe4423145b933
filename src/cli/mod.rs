//! Command-line features: which commits to report and how to report them.

pub mod orchestration;

pub use orchestration::{run_message_workflow, run_range_workflow, WorkflowArgs, WorkflowResult};

use crate::domain::{CaseInsensitiveSet, Classification, Commit};

/// Ways commits can be included based on impact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selections {
    pub breaking: bool,
    pub minor: bool,
    pub patch: bool,
    pub uncategorized: bool,
}

impl Selections {
    pub fn any(&self) -> bool {
        self.breaking || self.minor || self.patch || self.uncategorized
    }

    /// With nothing selected, every impact matches.
    pub fn matches(&self, impact: Classification) -> bool {
        if !self.any() {
            return true;
        }
        match impact {
            Classification::Breaking => self.breaking,
            Classification::Minor => self.minor,
            Classification::Patch => self.patch,
            Classification::Uncategorized => self.uncategorized,
        }
    }
}

/// Ways commits can be included based on their attributes or impact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub types: Option<CaseInsensitiveSet>,
    pub scopes: Option<CaseInsensitiveSet>,
    pub selections: Selections,
}

impl Filters {
    pub fn any(&self) -> bool {
        self.types.is_some() || self.scopes.is_some() || self.selections.any()
    }

    /// Whether `commit`, with the given impact, passes every filter.
    pub fn matches(&self, commit: &Commit, impact: Classification) -> bool {
        if let Some(types) = &self.types {
            if !types.contains(commit.r#type()) {
                return false;
            }
        }
        if let Some(scopes) = &self.scopes {
            if !scopes.contains(commit.scope()) {
                return false;
            }
        }
        self.selections.matches(impact)
    }
}

/// Ways commit information can be displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outputs {
    pub list: bool,
    pub count: bool,
    pub impact: bool,
    pub bump_version: Option<String>,
}

impl Outputs {
    pub fn any(&self) -> bool {
        self.list || self.count || self.impact || self.bump_version.is_some()
    }
}
