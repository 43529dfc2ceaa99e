//! Serde functions for the canonical string representation.
//!
//! Usable as `#[serde(with = "semantic_version::codec::semver_string")]`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use super::MALFORMED_MESSAGE;
use crate::version::Version;

pub fn serialize<S>(version: &Version, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(version)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Version, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(VersionStringVisitor)
}

struct VersionStringVisitor;

impl<'de> Visitor<'de> for VersionStringVisitor {
    type Value = Version;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a semantic version string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Version, E>
    where
        E: de::Error,
    {
        Version::parse(value).ok_or_else(|| {
            log::debug!("Rejected version string {:?}", value);
            E::custom(MALFORMED_MESSAGE)
        })
    }
}
