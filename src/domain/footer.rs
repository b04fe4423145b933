//! Commit message footers.
//!
//! A footer is similar to a git trailer: a `token: value` or `token #value`
//! pair in the final paragraph of a message. Values may continue over the
//! following lines.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::FooterError;

const BREAKING_PHRASE: &str = "BREAKING CHANGE";
const BREAKING_ARROW: &str = "BREAKING-CHANGE";

// <token>       ::= "BREAKING CHANGE"
//                |  any char except ":", Unicode separators, U+0009..U+000D, U+FEFF
// <separator>   ::= ": " | " #"
// <footer>      ::= <token>, <separator>, <value>
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static FOOTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<token>(?:BREAKING CHANGE|[^:\pZ\x09-\x0D\x{FEFF}]+))",
        r"(?P<separator>: | #)",
        r"(?P<value>.*)$",
    ))
    .unwrap()
});

/// The separator between a footer token and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterSeparator {
    /// ": "
    ColonSpace,

    /// " #"
    SpacePound,
}

impl FooterSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            FooterSeparator::ColonSpace => ": ",
            FooterSeparator::SpacePound => " #",
        }
    }
}

impl fmt::Display for FooterSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FooterSeparator {
    type Err = ();

    fn from_str(sep: &str) -> Result<Self, Self::Err> {
        match sep {
            ": " => Ok(FooterSeparator::ColonSpace),
            " #" => Ok(FooterSeparator::SpacePound),
            _ => Err(()),
        }
    }
}

/// A single footer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Footer {
    pub token: String,
    pub separator: FooterSeparator,
    pub value: String,
}

impl Footer {
    pub fn new(
        token: impl Into<String>,
        separator: FooterSeparator,
        value: impl Into<String>,
    ) -> Self {
        Footer {
            token: token.into(),
            separator,
            value: value.into(),
        }
    }

    /// Whether this footer marks a breaking change.
    ///
    /// `BREAKING CHANGE` and `BREAKING-CHANGE` must be spelled in capitals and
    /// use the `": "` separator. Near misses are errors rather than ordinary
    /// footers.
    pub fn is_breaking_change(&self) -> Result<bool, FooterError> {
        if self.token == BREAKING_PHRASE || self.token == BREAKING_ARROW {
            return match self.separator {
                FooterSeparator::ColonSpace => Ok(true),
                FooterSeparator::SpacePound => Err(FooterError::Separator),
            };
        }

        let normalized = self.token.to_lowercase();
        if normalized == "breaking change" || normalized == "breaking-change" {
            return Err(FooterError::Capitalization);
        }

        Ok(false)
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.token, self.separator, self.value)
    }
}

/// Split one line into a footer, if it starts one.
fn match_footer(line: &str) -> Option<Footer> {
    let captures = FOOTER_PATTERN.captures(line)?;
    let separator = captures["separator"].parse().ok()?;

    Some(Footer::new(&captures["token"], separator, &captures["value"]))
}

/// Extract the footers from the lines of a message's final paragraph.
///
/// Returns an empty list when the first line is not a footer; the paragraph
/// then belongs to the body. Lines after the first that do not start a
/// footer continue the value of the previous one.
pub fn extract_footers<S: AsRef<str>>(lines: &[S]) -> Vec<Footer> {
    let mut footers: Vec<Footer> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        match match_footer(line) {
            Some(footer) => footers.push(footer),
            None => match footers.last_mut() {
                Some(current) => {
                    current.value.push('\n');
                    current.value.push_str(line);
                }
                None => return Vec::new(),
            },
        }
    }

    footers
}
