//! Error types for PHC string operations.
//!
//! Three error kinds are exposed:
//!
//! - [`ValidationError`] - a segment failed its grammar rule, or a hash was
//!   supplied without a salt. Returned when building from trusted values.
//! - [`DecodeError`] - a segment was well-formed text but its payload could
//!   not be decoded (malformed base64, version out of range).
//! - [`ParseError`] - the single error surface for untrusted input. Wraps
//!   either of the above.

use thiserror::Error;

use crate::core::types::Field;

/// A PHC string segment that violates the format grammar.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The id is absent or does not match `[a-z0-9-]{1,32}`.
    #[error("id is non-compliant")]
    Id,

    /// The version segment does not match `v=<digits>`.
    #[error("version is non-compliant")]
    Version,

    /// The parameter segment is empty or holds a malformed `name=value` entry.
    #[error("parameters is non-compliant")]
    Parameters,

    /// The salt contains characters outside `[a-zA-Z0-9/+.-]`.
    #[error("encoded salt is non-compliant")]
    EncodedSalt,

    /// The hash contains characters outside `[a-zA-Z0-9/+]`.
    #[error("encoded hash is non-compliant")]
    EncodedHash,

    /// A hash segment is present but the salt segment is absent.
    #[error("hash needs salt")]
    HashNeedsSalt,
}

impl ValidationError {
    /// Returns the field guarded by the violated rule.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Id => Field::Id,
            Self::Version => Field::Version,
            Self::Parameters => Field::Params,
            Self::EncodedSalt => Field::Salt,
            Self::EncodedHash | Self::HashNeedsSalt => Field::Hash,
        }
    }
}

/// A well-formed segment whose payload could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Base64 decode error.
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The version number does not fit in an `i64`.
    #[error("version number out of range")]
    VersionOutOfRange,
}

/// Errors returned when parsing an untrusted PHC string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not start with `$`.
    #[error("Invalid PHC string: missing leading '$'")]
    MissingLeadingDelimiter,

    /// Segments remain after the hash.
    #[error("Invalid PHC string: unexpected segment after hash")]
    TrailingSegment,

    /// A segment failed its grammar rule.
    #[error("Invalid PHC string: {0}")]
    Invalid(#[from] ValidationError),

    /// A segment payload could not be decoded.
    #[error("Invalid PHC string: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type alias for validating operations.
pub type PhcResult<T> = Result<T, ValidationError>;
