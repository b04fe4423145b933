use std::fmt;

use thiserror::Error;

/// A malformed `BREAKING CHANGE` footer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FooterError {
    #[error("BREAKING CHANGE must be followed by a colon and space (: )")]
    Separator,

    #[error("BREAKING CHANGE token must be capitalized")]
    Capitalization,
}

/// A commit message that does not follow the Conventional Commits grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("{id}: syntax error: commit message cannot be empty")]
    Empty { id: String },

    #[error(
        "{id}: syntax error: commit summary must contain a valid type, optional scope, and description"
    )]
    Summary { id: String },

    #[error("{id}: syntax error: the commit summary must be followed by a blank line")]
    BlankLine { id: String },

    #[error("{id}: syntax error: {source}")]
    Footer {
        id: String,
        #[source]
        source: FooterError,
    },
}

impl SyntaxError {
    /// Short id of the commit that failed to parse
    pub fn id(&self) -> &str {
        match self {
            SyntaxError::Empty { id }
            | SyntaxError::Summary { id }
            | SyntaxError::BlankLine { id }
            | SyntaxError::Footer { id, .. } => id,
        }
    }
}

/// A well-formed commit that violates the configured policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("{id}: policy error: unrecognized commit type")]
    UnrecognizedType { id: String },

    #[error("{id}: policy error: commit must have a scope")]
    RequiredScope { id: String },

    #[error("{id}: policy error: unrecognized commit scope")]
    UnrecognizedScope { id: String },

    #[error("{id}: policy error: {}", length_message(.min, .max))]
    DescriptionLength { id: String, min: usize, max: usize },

    #[error("{id}: policy error: unrecognized footer: {token}")]
    UnrecognizedFooter { id: String, token: String },

    #[error("{id}: policy error: commit must include footers: {}", .tokens.join(", "))]
    RequiredFooters { id: String, tokens: Vec<String> },
}

fn length_message(min: &usize, max: &usize) -> String {
    if *max > 0 {
        format!("description must be between {} and {} chars long", min, max)
    } else {
        format!("description must be at least {} chars long", min)
    }
}

/// Either kind of per-commit failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Every per-commit failure found in one batch, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchError {
    errors: Vec<CommitError>,
}

impl BatchError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: impl Into<CommitError>) {
        self.errors.push(err.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[CommitError] {
        &self.errors
    }

    /// Append every error of `other`, keeping order.
    pub fn extend(&mut self, other: BatchError) {
        self.errors.extend(other.errors);
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> std::result::Result<(), BatchError> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for BatchError {}

/// A version string that is not a valid semantic version, or cannot be incremented.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid semantic version specifier: '{0}'")]
    InvalidSpecifier(String),

    #[error("version number overflow: cannot increment '{0}'")]
    Overflow(String),
}

/// Unified error type for conch operations
#[derive(Error, Debug)]
pub enum ConchError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in conch
pub type Result<T> = std::result::Result<T, ConchError>;

impl ConchError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ConchError::Config(msg.into())
    }
}
