//! Codec and validator for the PHC string format.
//!
//! The PHC string format is the textual envelope that password hashing
//! functions use to store their output:
//!
//! ```text
//! $<id>[$v=<version>][$<param>=<value>(,<param>=<value>)*][$<salt>[$<hash>]]
//! ```
//!
//! This crate formats and parses that envelope. It never computes or
//! verifies a hash; salt and hash bytes are supplied by the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use phc_string::{format, parse, Field, Hint, PhcFields};
//!
//! let fields = PhcFields {
//!     version: Some(19),
//!     params: Some([("m", 4096), ("t", 3), ("p", 1)].into_iter().collect()),
//!     salt: Some(b"saltsaltsaltsalt".to_vec()),
//!     ..PhcFields::with_id("argon2id")
//! };
//!
//! let phc = format(&fields, &Hint::default()).expect("format should succeed");
//! assert_eq!(phc, "$argon2id$v=19$m=4096,t=3,p=1$c2FsdHNhbHRzYWx0c2FsdA");
//!
//! let parsed = parse(&phc, &Hint::default(), &Field::ALL).expect("parse should succeed");
//! assert_eq!(parsed, fields);
//! ```
//!
//! # Segments
//!
//! | Segment | Grammar | Notes |
//! |---------|---------|-------|
//! | id | `[a-z0-9-]{1,32}` | Required |
//! | version | `v=[0-9]+` | Optional |
//! | params | `name=value(,name=value)*` | Names `[a-z0-9-]{1,32}`, values `[a-zA-Z0-9/+.-]+` |
//! | salt | `[a-zA-Z0-9/+.-]*` | Non-padded base64, or raw 7-bit text with a hint |
//! | hash | `[a-zA-Z0-9/+]*` | Non-padded base64; requires a salt |
//!
//! An empty salt or hash is distinct from an absent one: `$id$$` carries an
//! empty salt and an empty hash, `$id` carries neither.
//!
//! # Errors
//!
//! - [`ValidationError`] when building from values
//! - [`ParseError`] when parsing untrusted text
//! - [`DecodeError`] when a segment payload cannot be decoded
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Builder and ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{DecodeError, ParseError, PhcResult, ValidationError};
pub use crate::core::operations::formatter::{format, parse};
pub use crate::core::params::{ParamValue, Params};
pub use crate::core::types::{
    Field, Hint, PhcFields, PhcString, SaltEncoding, SaltHint, Segment, UnknownSaltEncoding,
};
