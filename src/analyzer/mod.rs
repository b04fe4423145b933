//! Analysis engine for checking commits and determining version bumps

pub mod commit_analyzer;

pub use commit_analyzer::{Analysis, CommitAnalyzer};
