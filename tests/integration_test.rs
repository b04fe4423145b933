// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use git2::{Repository, Signature};
use tempfile::TempDir;

fn conch(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_conch"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// Create a repository with one commit per message, oldest first.
fn init_repo(messages: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    for message in messages {
        let parent = repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    dir
}

#[test]
fn test_conch_help() {
    let dir = TempDir::new().unwrap();
    let output = conch(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("conch"));
    assert!(stdout.contains("Conventional Commits"));
}

#[test]
fn test_conch_version() {
    let dir = TempDir::new().unwrap();
    let output = conch(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_valid_history_passes() {
    let dir = init_repo(&["chore: init", "feat: add parser", "fix(parser): handle empty"]);
    let output = conch(dir.path(), &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_list_count_impact_and_bump() {
    let dir = init_repo(&["chore: init", "feat: add parser", "fix(parser): handle empty"]);
    let output = conch(dir.path(), &["--list", "--count", "--impact", "--bump-version", "1.4.2"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].ends_with(": fix(parser): handle empty"));
    assert!(lines[1].ends_with(": feat: add parser"));
    assert!(lines[2].ends_with(": chore: init"));
    assert_eq!(&lines[3..], &["3", "minor", "1.5.0"]);
}

#[test]
fn test_range_and_selection_filters() {
    let dir = init_repo(&["chore: init", "feat: add parser", "fix(parser): handle empty"]);
    let output = conch(dir.path(), &["HEAD~2..HEAD", "--patch", "--count", "--impact"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "1\npatch\n");
}

#[test]
fn test_invalid_commits_are_reported_after_output() {
    let dir = init_repo(&[
        "chore: init",
        "not conventional",
        "fix: bug\n\nbreaking-change: removed field",
        "feat!: drop v1 api",
    ]);
    let output = conch(dir.path(), &["--count", "--bump-version", "1.0.0"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "2\n2.0.0\n");

    let stderr = stderr(&output);
    assert!(stderr.contains("syntax error: BREAKING CHANGE token must be capitalized"));
    assert!(stderr.contains(
        "syntax error: commit summary must contain a valid type, optional scope, and description"
    ));
}

#[test]
fn test_repository_config_is_applied() {
    let dir = init_repo(&["chore: init", "Merge branch 'topic'", "docs: explain"]);
    fs::write(
        dir.path().join("conch.toml"),
        "version = 1\n\n[policy.type]\ntypes = [\"feat\", \"fix\", \"chore\"]\n\n[exclude]\nprefixes = [\"merge \"]\n",
    )
    .unwrap();

    let output = conch(dir.path(), &["--count"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n");
    assert!(stderr(&output).contains("policy error: unrecognized commit type"));
}

#[test]
fn test_invalid_bump_version_fails() {
    let dir = init_repo(&["feat: a"]);
    let output = conch(dir.path(), &["--bump-version", "v1.0"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("invalid semantic version specifier: 'v1.0'"));
}

#[test]
fn test_unknown_revision_fails() {
    let dir = init_repo(&["feat: a"]);
    let output = conch(dir.path(), &["no-such-branch..HEAD"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_message_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(
        &path,
        "feat(cli): add message mode\n# Please enter the commit message\n\nRefs: #12\n",
    )
    .unwrap();

    let output = conch(
        dir.path(),
        &["--message-file", path.to_str().unwrap(), "--list", "--impact"],
    );

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0: feat(cli): add message mode\nminor\n");
}

#[test]
fn test_message_file_without_blank_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(&path, "fix: x\nmore text\n").unwrap();

    let output = conch(dir.path(), &["-m", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output)
        .contains("0: syntax error: the commit summary must be followed by a blank line"));
}
