//! JSON encoding and decoding with path-aware errors

use serde_json::{Map, Value};

use super::error::CodingError;
use super::path::CodingPath;
use super::{Strategy, MALFORMED_MESSAGE};
use crate::number::Number;
use crate::version::Version;

/// Encodes versions into JSON with a fixed [`Strategy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    strategy: Strategy,
}

impl Encoder {
    pub fn new(strategy: Strategy) -> Self {
        Encoder { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Encode a version through the same serde path as [`Strategy::wrap`]
    pub fn encode(&self, version: &Version) -> Result<Value, CodingError> {
        Ok(serde_json::to_value(self.strategy.wrap(version))?)
    }

    pub fn encode_all(&self, versions: &[Version]) -> Result<Value, CodingError> {
        versions
            .iter()
            .map(|v| self.encode(v))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    /// Encode a version as compact JSON text
    pub fn to_string(&self, version: &Version) -> Result<String, CodingError> {
        Ok(serde_json::to_string(&self.strategy.wrap(version))?)
    }
}

/// Decodes versions from JSON with a fixed [`Strategy`].
///
/// Errors carry the [`CodingPath`] of the offending value:
///
/// ```
/// use semantic_version::codec::{CodingError, Decoder, Strategy};
///
/// let doc = serde_json::json!({"v": "I AM NOT A SEMVER"});
/// let err = Decoder::new(Strategy::SemverString).decode_member(&doc, "v").unwrap_err();
/// match err {
///     CodingError::Malformed { path, message } => {
///         assert_eq!(path.to_strings(), ["v"]);
///         assert_eq!(message, "Expected valid semver 2.0 string");
///     }
///     other => panic!("unexpected error {other}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    strategy: Strategy,
}

impl Decoder {
    pub fn new(strategy: Strategy) -> Self {
        Decoder { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Decode a version stored at the document root
    pub fn decode(&self, value: &Value) -> Result<Version, CodingError> {
        self.decode_at(value, &CodingPath::root())
    }

    /// Decode a version found at `path` in a larger document
    pub fn decode_at(&self, value: &Value, path: &CodingPath) -> Result<Version, CodingError> {
        let result = match self.strategy {
            Strategy::SemverString => decode_string(value, path),
            Strategy::Members => decode_members(value, path),
        };
        if let Err(err) = &result {
            log::debug!("Failed to decode version ({}): {}", self.strategy, err);
        }
        result
    }

    /// Decode the version stored in member `key` of an object
    pub fn decode_member(&self, value: &Value, key: &str) -> Result<Version, CodingError> {
        self.decode_member_at(value, key, &CodingPath::root())
    }

    pub fn decode_member_at(
        &self,
        value: &Value,
        key: &str,
        path: &CodingPath,
    ) -> Result<Version, CodingError> {
        let object = as_object(value, path)?;
        let member = object.get(key).ok_or_else(|| CodingError::MissingField {
            field: key.to_string(),
            path: path.clone(),
        })?;
        self.decode_at(member, &path.key(key))
    }

    /// Decode every element of an array
    pub fn decode_elements(&self, value: &Value) -> Result<Vec<Version>, CodingError> {
        self.decode_elements_at(value, &CodingPath::root())
    }

    pub fn decode_elements_at(
        &self,
        value: &Value,
        path: &CodingPath,
    ) -> Result<Vec<Version>, CodingError> {
        let elements = value.as_array().ok_or_else(|| CodingError::InvalidType {
            path: path.clone(),
            expected: "an array",
        })?;
        elements
            .iter()
            .enumerate()
            .map(|(i, element)| self.decode_at(element, &path.index(i)))
            .collect()
    }

    /// Parse JSON text and decode the version at its root
    pub fn from_str(&self, json: &str) -> Result<Version, CodingError> {
        let value: Value = serde_json::from_str(json)?;
        self.decode(&value)
    }
}

fn as_object<'a>(
    value: &'a Value,
    path: &CodingPath,
) -> Result<&'a Map<String, Value>, CodingError> {
    value.as_object().ok_or_else(|| CodingError::InvalidType {
        path: path.clone(),
        expected: "an object",
    })
}

fn decode_string(value: &Value, path: &CodingPath) -> Result<Version, CodingError> {
    let text = value.as_str().ok_or_else(|| CodingError::InvalidType {
        path: path.clone(),
        expected: "a string",
    })?;
    Version::parse(text).ok_or_else(|| CodingError::Malformed {
        path: path.clone(),
        message: MALFORMED_MESSAGE.to_string(),
    })
}

fn decode_members(value: &Value, path: &CodingPath) -> Result<Version, CodingError> {
    let object = as_object(value, path)?;
    let member = |name: &str| {
        object.get(name).ok_or_else(|| CodingError::MissingField {
            field: name.to_string(),
            path: path.clone(),
        })
    };

    Ok(Version {
        major: decode_number(member("major")?, &path.key("major"))?,
        minor: decode_number(member("minor")?, &path.key("minor"))?,
        patch: decode_number(member("patch")?, &path.key("patch"))?,
        pre_release: decode_label(member("preRelease")?, &path.key("preRelease"))?,
        build: decode_label(member("build")?, &path.key("build"))?,
    })
}

fn decode_number(value: &Value, path: &CodingPath) -> Result<Number, CodingError> {
    let number = match value {
        Value::Number(n) => n.as_u64().map(Number::from),
        Value::String(s) => Number::from_digits(s).ok(),
        _ => None,
    };
    number.ok_or_else(|| CodingError::InvalidType {
        path: path.clone(),
        expected: "a non-negative integer",
    })
}

fn decode_label(value: &Value, path: &CodingPath) -> Result<String, CodingError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CodingError::InvalidType {
            path: path.clone(),
            expected: "a string",
        })
}
