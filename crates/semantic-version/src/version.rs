//! The version value type

use crate::number::Number;

/// A version according to [Semantic Versioning 2.0](https://semver.org).
///
/// ```
/// use semantic_version::Version;
///
/// let v123 = Version::new(1, 2, 3);
/// assert!(v123.is_stable());
/// assert!(v123.is_patch_release());
///
/// let rc = Version::parse("3.0.0-rc1-test").unwrap();
/// assert!(rc.is_pre_release());
/// assert_eq!(rc.pre_release, "rc1-test");
/// assert!(rc < Version::new(3, 0, 0));
/// ```
///
/// Constructing a version directly does not validate the labels. Only
/// [`Version::parse`] guarantees a value that satisfies the grammar; use
/// [`Version::is_valid`] to check a hand-built one.
///
/// Equality and hashing cover all five fields, including build metadata.
/// Precedence ignores build metadata, see [`Version::cmp_precedence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: Number,
    pub minor: Number,
    pub patch: Number,
    /// Dot-separated pre-release identifiers, empty for a stable version
    pub pre_release: String,
    /// Dot-separated build metadata identifiers, possibly empty
    pub build: String,
}

impl Version {
    /// Create a version with empty pre-release and build labels
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            pre_release: String::new(),
            build: String::new(),
        }
    }

    /// Create a version from all five components without validating them.
    ///
    /// Components beyond `u64` can be set through the public [`Number`] fields.
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: impl Into<String>,
        build: impl Into<String>,
    ) -> Self {
        Version {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            pre_release: pre_release.into(),
            build: build.into(),
        }
    }

    /// The initial version `0.0.0`
    pub fn initial() -> Self {
        Version::default()
    }

    /// Replace the pre-release label
    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = pre_release.into();
        self
    }

    /// Replace the build metadata
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    /// A version without pre-release identifiers. Build metadata does not matter.
    pub fn is_stable(&self) -> bool {
        self.pre_release.is_empty()
    }

    pub fn is_pre_release(&self) -> bool {
        !self.is_stable()
    }

    /// Stable `X.0.0` with `X > 0`
    pub fn is_major_release(&self) -> bool {
        self.is_stable() && !self.major.is_zero() && self.minor.is_zero() && self.patch.is_zero()
    }

    /// Stable `_.Y.0` with `Y > 0`
    pub fn is_minor_release(&self) -> bool {
        self.is_stable() && !self.minor.is_zero() && self.patch.is_zero()
    }

    /// Stable `_._.Z` with `Z > 0`
    pub fn is_patch_release(&self) -> bool {
        self.is_stable() && !self.patch.is_zero()
    }

    pub fn is_initial_release(&self) -> bool {
        *self == Version::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_constructors() {
        let v = Version::from_parts(1, 2, 3, "beta", "build.5");
        assert_eq!(v.major.to_u64(), Some(1));
        assert_eq!(v.minor.to_u64(), Some(2));
        assert_eq!(v.patch.to_u64(), Some(3));
        assert_eq!(v.pre_release, "beta");
        assert_eq!(v.build, "build.5");

        assert_eq!(Version::new(1, 2, 3).with_pre_release("beta").with_build("build.5"), v);
        assert_eq!(Version::new(0, 0, 0), Version::initial());
    }

    #[test]
    fn test_constructor_does_not_validate() {
        let v = Version::from_parts(1, 0, 0, "not valid!", "..");
        assert_eq!(v.pre_release, "not valid!");
        assert_eq!(v.build, "..");
    }

    #[test]
    fn test_is_stable() {
        assert!(Version::new(1, 0, 0).is_stable());
        assert!(Version::from_parts(1, 0, 0, "", "").is_stable());
        assert!(!Version::new(1, 0, 0).with_pre_release("a").is_stable());
        assert!(Version::from_parts(1, 0, 0, "", "a").is_stable());

        assert!(Version::new(1, 0, 0).with_pre_release("a").is_pre_release());
        assert!(!Version::from_parts(1, 0, 0, "", "a").is_pre_release());
    }

    #[test]
    fn test_is_major_release() {
        assert!(Version::new(1, 0, 0).is_major_release());
        assert!(!Version::new(1, 0, 0).with_pre_release("b").is_major_release());
        assert!(!Version::new(0, 0, 1).is_major_release());
        assert!(!Version::new(0, 0, 1).with_pre_release("b").is_major_release());
        assert!(!Version::new(0, 1, 0).is_major_release());
        assert!(!Version::new(0, 1, 0).with_pre_release("b").is_major_release());
        assert!(!Version::new(0, 1, 1).is_major_release());
        assert!(!Version::new(0, 0, 0).is_major_release());
    }

    #[test]
    fn test_is_minor_release() {
        assert!(!Version::new(1, 0, 0).is_minor_release());
        assert!(!Version::new(1, 0, 0).with_pre_release("b").is_minor_release());
        assert!(!Version::new(0, 0, 1).is_minor_release());
        assert!(!Version::new(0, 0, 1).with_pre_release("b").is_minor_release());
        assert!(Version::new(0, 1, 0).is_minor_release());
        assert!(!Version::new(0, 1, 0).with_pre_release("b").is_minor_release());
        assert!(!Version::new(0, 1, 1).is_minor_release());
        assert!(!Version::new(0, 0, 0).is_minor_release());
    }

    #[test]
    fn test_is_patch_release() {
        assert!(!Version::new(1, 0, 0).is_patch_release());
        assert!(!Version::new(1, 0, 0).with_pre_release("b").is_patch_release());
        assert!(Version::new(0, 0, 1).is_patch_release());
        assert!(!Version::new(0, 0, 1).with_pre_release("b").is_patch_release());
        assert!(!Version::new(0, 1, 0).is_patch_release());
        assert!(!Version::new(0, 1, 0).with_pre_release("b").is_patch_release());
        assert!(Version::new(0, 1, 1).is_patch_release());
        assert!(!Version::new(0, 0, 0).is_patch_release());
    }

    #[test]
    fn test_is_initial_release() {
        assert!(Version::new(0, 0, 0).is_initial_release());
        assert!(!Version::new(0, 0, 0).with_pre_release("alpha").is_initial_release());
        assert!(!Version::new(0, 0, 0).with_build("1").is_initial_release());
        assert!(!Version::new(0, 0, 1).is_initial_release());
    }

    #[test]
    fn test_equality_includes_build() {
        let a = Version::from_parts(1, 2, 3, "rc.1", "build.1");
        let b = Version::from_parts(1, 2, 3, "rc.1", "build.1");
        let c = Version::from_parts(1, 2, 3, "rc.1", "build.2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hashable() {
        let v123 = Version::new(1, 2, 3);
        let v200 = Version::new(2, 0, 0);
        let v300rc1 = Version::new(3, 0, 0).with_pre_release("rc1");

        let mut map = HashMap::new();
        map.insert(v123.clone(), 1);
        map.insert(v200.clone(), 2);
        map.insert(v300rc1.clone(), 3);
        map.insert(v300rc1.clone().with_build("x"), 4);

        assert_eq!(map.len(), 4);
        assert_eq!(map[&v123], 1);
        assert_eq!(map[&v200], 2);
        assert_eq!(map[&v300rc1], 3);
    }
}
