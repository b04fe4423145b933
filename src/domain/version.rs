//! Semantic versions as defined by <https://semver.org/>.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Classification;
use crate::error::VersionError;

// https://semver.org/#is-there-a-suggested-regular-expression-regex-to-check-a-semver-string
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)",
        r"(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+(?P<build>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .unwrap()
});

/// Semantic version representation
///
/// `prerelease` and `build` are `None` when the version has no such part.
/// Build metadata never takes part in [`Version::compare`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<Vec<String>>,
    pub build: Option<Vec<String>>,
}

impl Version {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Parse a version string (e.g., "1.2.3-rc.1+build.5").
    ///
    /// No prefix such as `v` is accepted.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::InvalidSpecifier(s.to_string());
        let captures = SEMVER_PATTERN.captures(s).ok_or_else(invalid)?;

        let number = |name: &str| -> Result<u64, VersionError> {
            captures[name].parse::<u64>().map_err(|_| invalid())
        };
        let identifiers = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().split('.').map(str::to_string).collect())
        };

        Ok(Version {
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            prerelease: identifiers("prerelease"),
            build: identifiers("build"),
        })
    }

    /// Total precedence order, ignoring build metadata.
    pub fn compare(&self, other: &Version) -> Ordering {
        let core = (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch));
        if core != Ordering::Equal {
            return core;
        }

        let ours = self.prerelease.as_deref().unwrap_or_default();
        let theirs = other.prerelease.as_deref().unwrap_or_default();

        match (ours.is_empty(), theirs.is_empty()) {
            (true, true) => return Ordering::Equal,
            // a prerelease has lower precedence than the release
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (false, false) => {}
        }

        ours.iter()
            .zip(theirs)
            .map(|(a, b)| compare_identifier(a, b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or_else(|| ours.len().cmp(&theirs.len()))
    }

    /// Fails with [`VersionError::Overflow`] when major is already `u64::MAX`.
    pub fn next_major(&self) -> Result<Self, VersionError> {
        let major = self.increment(self.major)?;
        Ok(Version::new(major, 0, 0))
    }

    pub fn next_minor(&self) -> Result<Self, VersionError> {
        let minor = self.increment(self.minor)?;
        Ok(Version::new(self.major, minor, 0))
    }

    pub fn next_patch(&self) -> Result<Self, VersionError> {
        let patch = self.increment(self.patch)?;
        Ok(Version::new(self.major, self.minor, patch))
    }

    fn increment(&self, component: u64) -> Result<u64, VersionError> {
        component
            .checked_add(1)
            .ok_or_else(|| VersionError::Overflow(self.to_string()))
    }

    /// The stable release this version leads up to (prerelease and build stripped).
    pub fn next_release(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Not a prerelease, and past initial development (major > 0).
    pub fn is_stable(&self) -> bool {
        self.major > 0 && self.prerelease.as_ref().map_or(true, Vec::is_empty)
    }

    /// Next version for a range of commits with the given aggregate impact.
    ///
    /// Prereleases are promoted to their release. While major is 0,
    /// breaking changes only bump the minor version.
    pub fn bump(&self, impact: Classification) -> Result<Self, VersionError> {
        if impact == Classification::Uncategorized {
            return Ok(self.clone());
        }
        if self.prerelease.as_ref().is_some_and(|pre| !pre.is_empty()) {
            return Ok(self.next_release());
        }

        match impact {
            Classification::Breaking if self.major == 0 => self.next_minor(),
            Classification::Breaking => self.next_major(),
            Classification::Minor => self.next_minor(),
            Classification::Patch => self.next_patch(),
            Classification::Uncategorized => Ok(self.clone()),
        }
    }
}

fn is_numeric(ident: &str) -> bool {
    !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_digit())
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => {
            // integer order without overflow: longer (zero-stripped) digit runs are larger
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build.join("."))?;
        }
        Ok(())
    }
}
