//! Structured encoding of versions
//!
//! A version has two structured representations:
//!
//! - [`Strategy::SemverString`]: the canonical string, e.g. `"1.2.3-rc.1"`
//! - [`Strategy::Members`]: an object with `major`, `minor`, `patch`,
//!   `preRelease` and `build` members
//!
//! The strategy is never part of the [`Version`] itself. It is picked per call:
//! through [`CodingOptions`] and the JSON [`Encoder`]/[`Decoder`], through a
//! [`Strategy`] used as a serde `DeserializeSeed` or [`WithStrategy`] wrapper,
//! or per field with `#[serde(with = "semantic_version::codec::members")]`.
//! The plain `Serialize`/`Deserialize` impls of [`Version`] use
//! [`Strategy::default()`], which is [`Strategy::SemverString`].

mod error;
mod json;
pub mod members;
mod path;
pub mod semver_string;

use std::fmt;

use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::Version;

pub use error::CodingError;
pub use json::{Decoder, Encoder};
pub use path::{CodingPath, PathSegment};

/// Diagnostic for a string that does not parse as a version
pub const MALFORMED_MESSAGE: &str = "Expected valid semver 2.0 string";

/// Structured representation used for a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// The canonical version string
    #[default]
    SemverString,
    /// An object with one member per component
    #[serde(alias = "memberwise", alias = "defaultCodable")]
    Members,
}

impl Strategy {
    /// Parse a strategy name, case-insensitively
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "semverstring" => Some(Strategy::SemverString),
            "members" | "memberwise" | "defaultcodable" => Some(Strategy::Members),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::SemverString => "semverString",
            Strategy::Members => "members",
        }
    }

    /// Serialize `version` in this representation
    pub fn serialize_version<S>(self, version: &Version, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        log::trace!("Serializing {} as {}", version, self);
        match self {
            Strategy::SemverString => semver_string::serialize(version, serializer),
            Strategy::Members => members::serialize(version, serializer),
        }
    }

    /// Deserialize a version stored in this representation
    pub fn deserialize_version<'de, D>(self, deserializer: D) -> Result<Version, D::Error>
    where
        D: Deserializer<'de>,
    {
        log::trace!("Deserializing version as {}", self);
        match self {
            Strategy::SemverString => semver_string::deserialize(deserializer),
            Strategy::Members => members::deserialize(deserializer),
        }
    }

    /// Wrap `version` so that serializing it uses this strategy
    pub fn wrap(self, version: &Version) -> WithStrategy<'_> {
        WithStrategy { version, strategy: self }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> DeserializeSeed<'de> for Strategy {
    type Value = Version;

    fn deserialize<D>(self, deserializer: D) -> Result<Version, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.deserialize_version(deserializer)
    }
}

/// A borrowed version that serializes with a chosen [`Strategy`]
#[derive(Debug, Clone, Copy)]
pub struct WithStrategy<'a> {
    pub version: &'a Version,
    pub strategy: Strategy,
}

impl Serialize for WithStrategy<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.strategy.serialize_version(self.version, serializer)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Strategy::default().serialize_version(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Strategy::default().deserialize_version(deserializer)
    }
}

/// Strategy selection for each direction.
///
/// Both directions default to [`Strategy::SemverString`]. Unknown or missing
/// keys fall back to the default when loaded with serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodingOptions {
    pub encoding: Strategy,
    pub decoding: Strategy,
}

impl CodingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same strategy in both directions
    pub fn uniform(strategy: Strategy) -> Self {
        CodingOptions {
            encoding: strategy,
            decoding: strategy,
        }
    }

    pub fn with_encoding(mut self, strategy: Strategy) -> Self {
        self.encoding = strategy;
        self
    }

    pub fn with_decoding(mut self, strategy: Strategy) -> Self {
        self.decoding = strategy;
        self
    }

    pub fn encoder(&self) -> Encoder {
        Encoder::new(self.encoding)
    }

    pub fn decoder(&self) -> Decoder {
        Decoder::new(self.decoding)
    }
}
