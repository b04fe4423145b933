//! The first line of a conventional commit.

use std::sync::LazyLock;

use regex::Regex;

// <type>        ::= any char except "(", ")", ":", "!", Unicode separators,
//                   U+0009..U+000D, or U+FEFF (ZWNBSP)
// <scope>       ::= any char except parens, whitespace included
// <summary>     ::= <type>, ["(", <scope>, ")"], ["!"], ": ", <description>
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SUMMARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<type>[^():!\pZ\x09-\x0D\x{FEFF}]+)",
        r"(?:\((?P<scope>[^()]+)\))?",
        r"(?P<exclaim>!?)",
        r": ",
        r"(?P<description>.+)$",
    ))
    .unwrap()
});

/// The parts of a summary line. Only built from a complete match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<'a> {
    pub r#type: &'a str,
    pub scope: &'a str,
    pub exclaimed: bool,
    pub description: &'a str,
}

impl<'a> Summary<'a> {
    /// Match `line` against `type(scope)!: description`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = SUMMARY_PATTERN.captures(line)?;
        let group = |name: &str| captures.name(name).map_or("", |m| m.as_str());

        Some(Summary {
            r#type: group("type"),
            scope: group("scope"),
            exclaimed: group("exclaim") == "!",
            description: group("description"),
        })
    }
}
