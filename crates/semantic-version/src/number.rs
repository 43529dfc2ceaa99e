//! Arbitrary-length version numbers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when building a [`Number`] from text that is not a decimal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version number \"{0}\"")]
pub struct NumberError(pub String);

/// A non-negative integer of any length.
///
/// Major, minor and patch components are not bounded by the grammar, so a
/// value like `99999999999999999999999` has to survive parsing and rendering
/// untouched. The digits are kept in canonical form (no leading zeros) which
/// makes the derived `Eq`/`Hash` agree with numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// The number zero
    pub fn zero() -> Self {
        Number("0".to_string())
    }

    /// Build a number from a string of ASCII digits, dropping leading zeros
    pub fn from_digits(digits: &str) -> Result<Self, NumberError> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberError(digits.to_string()));
        }
        Ok(Number(canonical_digits(digits).to_string()))
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// The value as `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The canonical decimal digits
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strip leading zeros, keeping a lone `0`.
pub(crate) fn canonical_digits(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}

/// Compare two digit strings by numeric value without parsing them.
pub(crate) fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = canonical_digits(a);
    let b = canonical_digits(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_digits(&self.0, &other.0)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_digits(s)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number(value.to_string())
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl PartialEq<u64> for Number {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}
