use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use conch::analyzer::CommitAnalyzer;
use conch::cli::{self, Filters, Outputs, Selections, WorkflowArgs};
use conch::config;
use conch::domain::{strip_comments, CaseInsensitiveSet};
use conch::git::Git2Repository;
use conch::ui;

#[derive(clap::Parser)]
#[command(
    name = "conch",
    version,
    about = "Check commit messages against the Conventional Commits standard"
)]
struct Args {
    #[arg(default_value = "HEAD", help = "Revision or range of commits to check")]
    range: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short = 'C', long, default_value = ".", help = "Repository directory")]
    repo: PathBuf,

    #[arg(
        short,
        long,
        help = "Check the commit message in a file instead of a range"
    )]
    message_file: Option<PathBuf>,

    #[arg(long, help = "Select commits with breaking changes")]
    breaking: bool,

    #[arg(long, help = "Select commits with minor changes")]
    minor: bool,

    #[arg(long, help = "Select commits with patch changes")]
    patch: bool,

    #[arg(long, help = "Select commits without a version impact")]
    uncategorized: bool,

    #[arg(long, value_delimiter = ',', help = "Select commits of these types")]
    types: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',', help = "Select commits with these scopes")]
    scopes: Option<Vec<String>>,

    #[arg(short, long, help = "List the selected commits")]
    list: bool,

    #[arg(short = 'n', long, help = "Print the number of selected commits")]
    count: bool,

    #[arg(short, long, help = "Print the most severe impact of the selected commits")]
    impact: bool,

    #[arg(
        short,
        long,
        value_name = "VERSION",
        help = "Print the version that follows VERSION"
    )]
    bump_version: Option<String>,
}

impl Args {
    fn workflow_args(&self) -> WorkflowArgs {
        let to_set = |items: &Option<Vec<String>>| {
            items
                .as_ref()
                .map(|items| items.iter().cloned().collect::<CaseInsensitiveSet>())
        };

        WorkflowArgs {
            filters: Filters {
                types: to_set(&self.types),
                scopes: to_set(&self.scopes),
                selections: Selections {
                    breaking: self.breaking,
                    minor: self.minor,
                    patch: self.patch,
                    uncategorized: self.uncategorized,
                },
            },
            outputs: Outputs {
                list: self.list,
                count: self.count,
                impact: self.impact,
                bump_version: self.bump_version.clone(),
            },
        }
    }
}

fn main() -> Result<()> {
    // Write to stderr so logs don't interfere with report output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = config::load_config(args.config.as_deref(), &args.repo)
        .context("Error loading config")?;
    let analyzer = CommitAnalyzer::new(config);
    let workflow_args = args.workflow_args();

    let result = match &args.message_file {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Cannot read message file {}", path.display()))?;
            cli::run_message_workflow(&workflow_args, &analyzer, &strip_comments(&contents))?
        }
        None => {
            let repo = Git2Repository::open(&args.repo)?;
            cli::run_range_workflow(&workflow_args, &analyzer, &repo, &args.range)?
        }
    };

    for line in &result.output {
        ui::display_output(line);
    }
    ui::display_batch_errors(&result.errors);

    std::process::exit(result.exit_code());
}
