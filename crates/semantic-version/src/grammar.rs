//! Semantic Versioning 2.0 grammar matching

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The semver.org reference pattern plus an optional leading `v`.
    // Character classes are spelled out because `\d` matches Unicode digits.
    static ref SEMVER_RE: Regex = Regex::new(
        r"(?x)
        ^
        v?
        (?P<major>0|[1-9][0-9]*)
        \.
        (?P<minor>0|[1-9][0-9]*)
        \.
        (?P<patch>0|[1-9][0-9]*)
        (?:-
            (?P<prerelease>
                (?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)
                (?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*
            )
        )?
        (?:\+
            (?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)
        )?
        $"
    )
    .unwrap();
}

/// The five groups captured from a matching version string.
///
/// Absent pre-release and build sections come back as empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captures<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub pre_release: &'a str,
    pub build: &'a str,
}

/// Match `input` against the whole grammar.
///
/// Returns `None` unless the entire string is a version; there are no
/// partial matches.
pub fn match_version(input: &str) -> Option<Captures<'_>> {
    let caps = SEMVER_RE.captures(input)?;
    let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    Some(Captures {
        major: group("major"),
        minor: group("minor"),
        patch: group("patch"),
        pre_release: group("prerelease"),
        build: group("buildmetadata"),
    })
}

/// Check if `input` is a version string
pub fn is_match(input: &str) -> bool {
    SEMVER_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_versions() {
        let valid = [
            "0.0.4",
            "1.2.3",
            "10.20.30",
            "1.1.2-prerelease+meta",
            "1.1.2+meta",
            "1.1.2+meta-valid",
            "1.0.0-alpha",
            "1.0.0-beta",
            "1.0.0-alpha.beta",
            "1.0.0-alpha.beta.1",
            "1.0.0-alpha.1",
            "1.0.0-alpha0.valid",
            "1.0.0-alpha.0valid",
            "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
            "1.0.0-rc.1+build.1",
            "2.0.0-rc.1+build.123",
            "1.2.3-beta",
            "10.2.3-DEV-SNAPSHOT",
            "1.2.3-SNAPSHOT-123",
            "1.0.0",
            "2.0.0",
            "1.1.7",
            "2.0.0+build.1848",
            "2.0.1-alpha.1227",
            "1.0.0-alpha+beta",
            "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
            "1.2.3----R-S.12.9.1--.12+meta",
            "1.2.3----RC-SNAPSHOT.12.9.1--.12",
            "1.0.0+0.build.1-rc.10000aaa-kk-0.1",
            "99999999999999999999999.999999999999999999.99999999999999999",
            "1.0.0-0A.is.legal",
        ];

        for version in valid {
            assert!(is_match(version), "expected {version:?} to match");
        }
    }

    #[test]
    fn test_leading_v() {
        assert!(is_match("v0.0.4"));
        assert!(!is_match("vv0.0.4"));
        assert!(!is_match("V0.0.4"));
    }

    #[test]
    fn test_invalid_versions() {
        let invalid = [
            "",
            "1",
            "1.2",
            "1.2.3-0123",
            "1.2.3-0123.0123",
            "1.1.2+.123",
            "+invalid",
            "-invalid",
            "-invalid+invalid",
            "-invalid.01",
            "alpha",
            "alpha.beta",
            "alpha.beta.1",
            "alpha.1",
            "alpha+beta",
            "alpha_beta",
            "alpha.",
            "alpha..",
            "beta",
            "1.0.0-alpha_beta",
            "-alpha.",
            "1.0.0-alpha..",
            "1.0.0-alpha..1",
            "1.0.0-alpha...1",
            "1.0.0-alpha....1",
            "1.0.0-alpha.....1",
            "1.0.0-alpha......1",
            "1.0.0-alpha.......1",
            "01.1.1",
            "1.01.1",
            "1.1.01",
            "1.2.3.DEV",
            "1.2-SNAPSHOT",
            "1.2.31.2.3----RC-SNAPSHOT.12.09.1--..12+788",
            "1.2-RC-SNAPSHOT",
            "-1.0.3-gamma+b7718",
            "+justmeta",
            "9.8.7+meta+meta",
            "9.8.7-whatever+meta+meta",
            "1.2.3rc",
            "1.2.3 ",
            " 1.2.3",
            "1.2.3\n",
            "1.2.3-",
            "1.2.3+",
            "swift-2.2-SNAPSHOT-2016-01-11-a",
        ];

        for version in invalid {
            assert!(!is_match(version), "expected {version:?} not to match");
            assert_eq!(match_version(version), None);
        }
    }

    #[test]
    fn test_unicode_digits_rejected() {
        // Arabic-Indic and full-width digits
        assert!(!is_match("\u{0661}.2.3"));
        assert!(!is_match("1.2.\u{FF13}"));
    }

    #[test]
    fn test_captures() {
        let caps = match_version("v1.2.3-beta.1+build.5").unwrap();
        assert_eq!(caps.major, "1");
        assert_eq!(caps.minor, "2");
        assert_eq!(caps.patch, "3");
        assert_eq!(caps.pre_release, "beta.1");
        assert_eq!(caps.build, "build.5");

        let caps = match_version("10.20.30").unwrap();
        assert_eq!(caps.pre_release, "");
        assert_eq!(caps.build, "");

        let caps = match_version("1.0.0+0.build.1-rc.10000aaa-kk-0.1").unwrap();
        assert_eq!(caps.pre_release, "");
        assert_eq!(caps.build, "0.build.1-rc.10000aaa-kk-0.1");

        let caps = match_version("1.2.3----RC-SNAPSHOT.12.9.1--.12+788").unwrap();
        assert_eq!(caps.pre_release, "---RC-SNAPSHOT.12.9.1--.12");
        assert_eq!(caps.build, "788");
    }
}
