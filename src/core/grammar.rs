//! Character-class grammar for PHC string segments.
//!
//! ```text
//! id      = [a-z0-9-]{1,32}
//! version = "v=" [0-9]+
//! params  = param ("," param)*
//! param   = [a-z0-9-]{1,32} "=" [a-zA-Z0-9/+.-]+
//! salt    = [a-zA-Z0-9/+.-]*
//! hash    = [a-zA-Z0-9/+]*
//! ```
//!
//! A record is checked against [`RULES`] in order and the first failing
//! rule is reported.

use crate::core::error::ValidationError;
use crate::core::types::PhcString;

/// Maximum length of an id or parameter name.
pub const MAX_NAME_LEN: usize = 32;

/// `[a-z0-9-]{1,32}`
#[must_use]
pub fn is_name(s: &str) -> bool {
    (1..=MAX_NAME_LEN).contains(&s.len())
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// `v=[0-9]+`
#[must_use]
pub fn is_version_segment(s: &str) -> bool {
    s.strip_prefix("v=")
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// A comma-separated, non-empty list of `name=value` entries.
#[must_use]
pub fn is_params_segment(s: &str) -> bool {
    !s.is_empty()
        && s.split(',').all(|entry| {
            entry
                .split_once('=')
                .is_some_and(|(name, value)| is_name(name) && is_param_value(value))
        })
}

/// `[a-zA-Z0-9/+.-]+`
#[must_use]
pub fn is_param_value(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_salt_byte)
}

/// `[a-zA-Z0-9/+.-]*`
#[must_use]
pub fn is_salt(s: &str) -> bool {
    s.bytes().all(is_salt_byte)
}

/// `[a-zA-Z0-9/+]*`
#[must_use]
pub fn is_hash(s: &str) -> bool {
    s.bytes().all(is_b64_byte)
}

const fn is_b64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'/' || b == b'+'
}

const fn is_salt_byte(b: u8) -> bool {
    is_b64_byte(b) || b == b'.' || b == b'-'
}

/// A construction-time check paired with the error it raises.
pub(crate) struct Rule {
    pub check: fn(&PhcString) -> bool,
    pub error: ValidationError,
}

/// Checked in order; the first failure wins.
pub(crate) const RULES: [Rule; 6] = [
    Rule {
        check: |r| is_name(r.id()),
        error: ValidationError::Id,
    },
    Rule {
        check: |r| r.version_segment().map_or(true, is_version_segment),
        error: ValidationError::Version,
    },
    Rule {
        check: |r| r.params_segment().map_or(true, is_params_segment),
        error: ValidationError::Parameters,
    },
    Rule {
        check: |r| r.encoded_salt().map_or(true, is_salt),
        error: ValidationError::EncodedSalt,
    },
    Rule {
        check: |r| r.encoded_hash().map_or(true, is_hash),
        error: ValidationError::EncodedHash,
    },
    Rule {
        check: |r| r.encoded_salt().is_some() || r.encoded_hash().is_none(),
        error: ValidationError::HashNeedsSalt,
    },
];

/// Runs every rule against `record`.
///
/// # Errors
///
/// Returns the error of the first rule that fails.
pub(crate) fn validate(record: &PhcString) -> Result<(), ValidationError> {
    match RULES.iter().find(|rule| !(rule.check)(record)) {
        Some(rule) => {
            tracing::debug!(error = %rule.error, field = %rule.error.field(), "PHC segment rejected");
            Err(rule.error)
        }
        None => Ok(()),
    }
}
