use tracing::trace;

use crate::domain::footer::{extract_footers, Footer};
use crate::domain::summary::Summary;
use crate::domain::{Classification, Policy};
use crate::error::SyntaxError;

/// Id given to messages that do not come from a repository.
pub const MESSAGE_ID: &str = "0";

/// A parsed conventional commit.
///
/// Built once from a raw message by [`Commit::parse`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    id: String,
    short_id: String,
    r#type: String,
    scope: String,
    exclaimed: bool,
    breaking: bool,
    description: String,
    body: String,
    footers: Vec<Footer>,
}

impl Commit {
    /// Parse a commit message following Conventional Commits 1.0.0.
    ///
    /// The summary line must be followed by a blank line before any body.
    /// The last paragraph holds the footers when its first line is a footer,
    /// otherwise it is part of the body.
    pub fn parse(
        id: impl Into<String>,
        short_id: impl Into<String>,
        message: &str,
    ) -> Result<Self, SyntaxError> {
        let id = id.into();
        let short_id = short_id.into();
        // a lone CR ending the input terminates the last line
        let message = message.strip_suffix('\r').unwrap_or(message);
        let mut lines = message.lines();

        let Some(first_line) = lines.next() else {
            return Err(SyntaxError::Empty { id: short_id });
        };
        let Some(summary) = Summary::parse(first_line) else {
            return Err(SyntaxError::Summary { id: short_id });
        };

        let mut commit = Commit {
            r#type: summary.r#type.to_string(),
            scope: summary.scope.to_string(),
            exclaimed: summary.exclaimed,
            breaking: summary.exclaimed,
            description: summary.description.to_string(),
            body: String::new(),
            footers: Vec::new(),
            id,
            short_id,
        };

        match lines.next() {
            None => return Ok(commit),
            Some("") => {}
            Some(_) => {
                return Err(SyntaxError::BlankLine {
                    id: commit.short_id,
                })
            }
        }

        let rest: Vec<&str> = lines.collect();
        if let Some(start) = last_paragraph_start(&rest) {
            let footers = extract_footers(&rest[start..]);
            if footers.is_empty() {
                commit.body = rest.join("\n");
            } else {
                commit.body = rest[..start].join("\n").trim_end_matches('\n').to_string();
                commit.footers = footers;
            }
        }

        // every footer is checked, so a malformed one fails even after a valid breaking footer
        for footer in &commit.footers {
            let breaking = footer
                .is_breaking_change()
                .map_err(|source| SyntaxError::Footer {
                    id: commit.short_id.clone(),
                    source,
                })?;
            commit.breaking |= breaking;
        }

        trace!(
            id = %commit.short_id,
            footers = commit.footers.len(),
            breaking = commit.breaking,
            "parsed commit"
        );
        Ok(commit)
    }

    /// Parse a message that does not belong to a repository commit.
    pub fn parse_message(message: &str) -> Result<Self, SyntaxError> {
        Commit::parse(MESSAGE_ID, MESSAGE_ID, message)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn short_id(&self) -> &str {
        &self.short_id
    }

    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    /// Empty when the summary has no scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The summary carries a `!`.
    pub fn is_exclaimed(&self) -> bool {
        self.exclaimed
    }

    /// Set by a `!` in the summary or a `BREAKING CHANGE` footer.
    pub fn is_breaking(&self) -> bool {
        self.breaking
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    /// One-line `type(scope)!: description` form.
    ///
    /// The `!` is shown for every breaking commit, since footers are not part
    /// of the summary.
    pub fn summary(&self) -> String {
        let mut s = self.r#type.clone();
        if !self.scope.is_empty() {
            s.push('(');
            s.push_str(&self.scope);
            s.push(')');
        }
        if self.breaking {
            s.push('!');
        }
        s.push_str(": ");
        s.push_str(&self.description);
        s
    }

    /// Impact of this commit under `policy`.
    pub fn classification(&self, policy: &Policy) -> Classification {
        if self.breaking {
            Classification::Breaking
        } else if policy.minor_types.contains(&self.r#type) {
            Classification::Minor
        } else if policy.patch_types.contains(&self.r#type) {
            Classification::Patch
        } else {
            Classification::Uncategorized
        }
    }
}

/// Index of the first line of the last paragraph, if any line is non-empty.
fn last_paragraph_start(lines: &[&str]) -> Option<usize> {
    let mut start = None;
    let mut in_paragraph = false;

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            start = Some(i);
        }
    }

    start
}

/// Drop every line starting with `#`, as git does for commit message files.
pub fn strip_comments(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for line in message.lines().filter(|line| !line.starts_with('#')) {
        out.push_str(line);
        out.push('\n');
    }
    out
}
