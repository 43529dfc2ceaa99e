//! Version precedence (semver.org §11)

use std::cmp::Ordering;
use std::fmt;

use crate::number::compare_digits;
use crate::version::Version;

/// One dot-separated segment of a pre-release or build label.
///
/// Equality follows precedence, so `Numeric("07")` equals `Numeric("7")`.
#[derive(Debug, Clone, Copy)]
pub enum Identifier<'a> {
    /// Only ASCII digits
    Numeric(&'a str),
    /// Anything else, including the empty segment of a malformed label
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn new(segment: &'a str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(segment)
        } else {
            Identifier::Alphanumeric(segment)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::Alphanumeric(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => compare_digits(a, b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

impl PartialEq for Identifier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier<'_> {}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn identifiers(label: &str) -> impl Iterator<Item = Identifier<'_>> {
    // An empty label has no identifiers, not one empty identifier
    let segments = (!label.is_empty()).then(|| label.split('.'));
    segments.into_iter().flatten().map(Identifier::new)
}

impl Version {
    /// The pre-release identifiers in order
    pub fn pre_release_identifiers(&self) -> impl Iterator<Item = Identifier<'_>> {
        identifiers(&self.pre_release)
    }

    /// The build metadata identifiers in order
    pub fn build_identifiers(&self) -> impl Iterator<Item = Identifier<'_>> {
        identifiers(&self.build)
    }

    /// Compare two versions by precedence.
    ///
    /// This is a total order that ignores build metadata, so
    /// `1.0.0+a` and `1.0.0+b` compare `Equal` here although they are not `==`.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (self.is_stable(), other.is_stable()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                // Iterator::cmp already ranks a strict prefix lower
                (false, false) => self
                    .pre_release_identifiers()
                    .cmp(other.pre_release_identifiers()),
            })
    }

    /// Sort versions by ascending precedence. Precedence-equal versions keep their order.
    pub fn sort(versions: &mut [Version]) {
        versions.sort_by(Version::cmp_precedence);
    }

    /// Sort versions by descending precedence. Precedence-equal versions keep their order.
    pub fn sort_descending(versions: &mut [Version]) {
        versions.sort_by(|a, b| b.cmp_precedence(a));
    }
}

/// Follows [`Version::cmp_precedence`], except that precedence-equal versions
/// which differ in build metadata are unordered (`None`), keeping `==` and
/// `partial_cmp` consistent. Neither `<` nor `>` holds between them.
impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_precedence(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}
