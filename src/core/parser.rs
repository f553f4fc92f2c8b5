//! Splits a PHC string into its raw segments.
//!
//! Format: `$<id>[$v=<version>][$<params>][$<salt>[$<hash>]]`
//!
//! The optional version and params segments are recognized by peeking at
//! the next token: a version starts with `v=`, params contain `=`. Salt and
//! hash are positional. The walk never backtracks.

use crate::core::error::ParseError;

/// The five segments of a PHC string, not yet validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawSegments<'a> {
    /// Function identifier.
    pub id: Option<&'a str>,
    /// `v=<N>` segment.
    pub version: Option<&'a str>,
    /// `name=value,...` segment.
    pub params: Option<&'a str>,
    /// Encoded salt.
    pub salt: Option<&'a str>,
    /// Encoded hash.
    pub hash: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectId,
    ExpectVersion,
    ExpectParams,
    ExpectSalt,
    ExpectHash,
    Done,
}

/// Splits `input` on `$` into raw segments.
///
/// # Errors
///
/// Returns `ParseError::MissingLeadingDelimiter` if `input` does not begin
/// with `$`, and `ParseError::TrailingSegment` if tokens remain after the
/// hash.
pub fn split_segments(input: &str) -> Result<RawSegments<'_>, ParseError> {
    let mut tokens = input.split('$');
    if tokens.next() != Some("") || input.is_empty() {
        return Err(ParseError::MissingLeadingDelimiter);
    }
    let mut tokens = tokens.peekable();

    let mut raw = RawSegments::default();
    let mut state = State::ExpectId;
    while state != State::Done {
        state = match state {
            State::ExpectId => {
                raw.id = tokens.next();
                State::ExpectVersion
            }
            State::ExpectVersion => {
                raw.version = tokens.next_if(|t| t.starts_with("v="));
                State::ExpectParams
            }
            State::ExpectParams => {
                raw.params = tokens.next_if(|t| t.contains('='));
                State::ExpectSalt
            }
            State::ExpectSalt => {
                raw.salt = tokens.next();
                State::ExpectHash
            }
            State::ExpectHash => {
                raw.hash = tokens.next();
                State::Done
            }
            State::Done => State::Done,
        };
    }

    if tokens.next().is_some() {
        return Err(ParseError::TrailingSegment);
    }
    Ok(raw)
}
