//! Conversion between versions and their canonical string form

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::grammar;
use crate::number::Number;
use crate::version::Version;

/// Error type for [`Version::from_str`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid semantic version \"{0}\"")]
    NoMatch(String),
}

impl Version {
    /// Parse a version string.
    ///
    /// Accepts the Semantic Versioning 2.0 grammar with an optional leading
    /// `v`. Returns `None` if the whole string is not a version.
    pub fn parse(input: &str) -> Option<Version> {
        let caps = grammar::match_version(input)?;

        Some(Version {
            major: Number::from_digits(caps.major).ok()?,
            minor: Number::from_digits(caps.minor).ok()?,
            patch: Number::from_digits(caps.patch).ok()?,
            pre_release: caps.pre_release.to_string(),
            build: caps.build.to_string(),
        })
    }

    /// Check if the version renders to a string that parses back to itself.
    ///
    /// Always true for parsed versions. Hand-built ones may carry labels that
    /// are not valid identifiers, or that split differently when re-parsed
    /// (a pre-release of `a+b` comes back as pre-release `a`, build `b`).
    pub fn is_valid(&self) -> bool {
        Version::parse(&self.to_string()).as_ref() == Some(self)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s).ok_or_else(|| ParseError::NoMatch(s.to_string()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
