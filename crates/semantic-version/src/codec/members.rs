//! Serde functions for the member-wise object representation.
//!
//! Usable as `#[serde(with = "semantic_version::codec::members")]`. The
//! object has the members `major`, `minor`, `patch`, `preRelease` and
//! `build`, all required.
//!
//! Numeric components are written as integers when they fit in a `u64` and
//! as decimal strings otherwise; both forms are accepted when reading.
//! A JSON integer above `u64::MAX` is read by `serde_json` as a float and
//! rejected, so larger components must arrive as strings.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::number::Number;
use crate::version::Version;

/// Member names in declaration order
pub const FIELDS: [&str; 5] = ["major", "minor", "patch", "preRelease", "build"];

#[derive(Serialize)]
#[serde(rename = "Version", rename_all = "camelCase")]
struct MembersRef<'a> {
    major: &'a Number,
    minor: &'a Number,
    patch: &'a Number,
    pre_release: &'a str,
    build: &'a str,
}

#[derive(Deserialize)]
#[serde(rename = "Version", rename_all = "camelCase")]
struct MembersOwned {
    major: Number,
    minor: Number,
    patch: Number,
    pre_release: String,
    build: String,
}

pub fn serialize<S>(version: &Version, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    MembersRef {
        major: &version.major,
        minor: &version.minor,
        patch: &version.patch,
        pre_release: &version.pre_release,
        build: &version.build,
    }
    .serialize(serializer)
}

/// Read the five members as-is. The labels are not validated, mirroring
/// [`Version::from_parts`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<Version, D::Error>
where
    D: Deserializer<'de>,
{
    let members = MembersOwned::deserialize(deserializer)?;
    Ok(Version {
        major: members.major,
        minor: members.minor,
        patch: members.patch,
        pre_release: members.pre_release,
        build: members.build,
    })
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_u64() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(self.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or a string of decimal digits")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Number, E>
    where
        E: de::Error,
    {
        Ok(Number::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Number, E>
    where
        E: de::Error,
    {
        Ok(Number::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Number, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(Number::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Number, E>
    where
        E: de::Error,
    {
        Number::from_digits(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}
