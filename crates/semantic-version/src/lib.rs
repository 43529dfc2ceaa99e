//! Semantic Versioning 2.0 for Rust
//!
//! This crate provides strict parsing, canonical rendering and precedence
//! ordering of [semantic versions](https://semver.org), plus serde support for
//! two structured representations (see [`codec`]).
//!
//! ```
//! use semantic_version::Version;
//!
//! let v = Version::parse("v1.2.3-beta1+build5").unwrap();
//! assert_eq!(v, Version::from_parts(1, 2, 3, "beta1", "build5"));
//! assert_eq!(v.to_string(), "1.2.3-beta1+build5");
//! assert!(v < Version::new(1, 2, 3));
//! assert!(Version::parse("01.2.3").is_none());
//! ```

pub mod codec;
mod grammar;
mod number;
mod precedence;
mod text;
mod version;

pub use codec::{CodingError, CodingOptions, Decoder, Encoder, Strategy};
pub use grammar::{is_match, match_version, Captures};
pub use number::{Number, NumberError};
pub use precedence::Identifier;
pub use text::ParseError;
pub use version::Version;
