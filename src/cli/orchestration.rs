//! Main workflow orchestration logic
//!
//! Keeps argument parsing in main.rs apart from the check itself, so the
//! workflow can be called programmatically without depending on clap.

use anyhow::Result;
use tracing::debug;

use crate::analyzer::{Analysis, CommitAnalyzer};
use crate::cli::{Filters, Outputs};
use crate::domain::{Classification, Version};
use crate::error::BatchError;
use crate::git::CommitSource;
use crate::ui::formatter;

/// Arguments for the check workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowArgs {
    pub filters: Filters,
    pub outputs: Outputs,
}

/// Result of a check that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowResult {
    /// Lines for standard output, in order
    pub output: Vec<String>,

    /// Every syntax and policy error found
    pub errors: BatchError,

    /// Aggregate impact of the selected commits
    pub impact: Classification,
}

impl WorkflowResult {
    /// `1` if any commit was rejected, otherwise `0`
    pub fn exit_code(&self) -> i32 {
        if self.errors.has_errors() {
            1
        } else {
            0
        }
    }
}

/// Check every commit in `range` and build the requested report
///
/// An invalid `--bump-version` fails before history is read.
pub fn run_range_workflow<S: CommitSource>(
    args: &WorkflowArgs,
    analyzer: &CommitAnalyzer,
    source: &S,
    range: &str,
) -> Result<WorkflowResult> {
    let current = parse_current_version(&args.outputs)?;
    let analysis = analyzer.analyze_repository_range(source, range)?;
    report(args, analyzer, analysis, current.as_ref())
}

/// Check a single commit message, as a commit-msg hook does
pub fn run_message_workflow(
    args: &WorkflowArgs,
    analyzer: &CommitAnalyzer,
    message: &str,
) -> Result<WorkflowResult> {
    let current = parse_current_version(&args.outputs)?;
    let analysis = analyzer.analyze_message(message);
    report(args, analyzer, analysis, current.as_ref())
}

fn parse_current_version(outputs: &Outputs) -> Result<Option<Version>> {
    match &outputs.bump_version {
        Some(spec) => Ok(Some(Version::parse(spec)?)),
        None => Ok(None),
    }
}

fn report(
    args: &WorkflowArgs,
    analyzer: &CommitAnalyzer,
    analysis: Analysis,
    current: Option<&Version>,
) -> Result<WorkflowResult> {
    let mut selected = Vec::new();
    for commit in &analysis.commits {
        let impact = analyzer.classify(commit);
        if args.filters.matches(commit, impact) {
            selected.push((commit, impact));
        }
    }
    debug!(
        accepted = analysis.commits.len(),
        selected = selected.len(),
        "applied filters"
    );

    let impact = Classification::aggregate(selected.iter().map(|(_, impact)| *impact));
    let outputs = &args.outputs;
    let mut output = Vec::new();

    if outputs.list {
        output.extend(
            selected
                .iter()
                .map(|(commit, _)| formatter::format_commit_line(commit)),
        );
    }
    if outputs.count {
        output.push(selected.len().to_string());
    }
    if outputs.impact {
        output.push(impact.to_string());
    }
    if let Some(current) = current {
        output.push(current.bump(impact)?.to_string());
    }

    Ok(WorkflowResult {
        output,
        errors: analysis.errors,
        impact,
    })
}
