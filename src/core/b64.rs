//! Non-padded base64 used for PHC salt and hash segments.
//!
//! The PHC format uses the standard base64 alphabet (`A-Za-z0-9+/`) with
//! the trailing `=` padding stripped. Decoding restores the padding and
//! applies strict standard decoding.

use base64::prelude::*;

use crate::core::error::DecodeError;

/// Encodes bytes as standard base64 without `=` padding.
///
/// # Example
///
/// ```rust
/// use phc_string::core::b64;
///
/// assert_eq!(b64::encode(b"P@$$w0rd"), "UEAkJHcwcmQ");
/// assert_eq!(b64::encode(b""), "");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE64_STANDARD_NO_PAD.encode(bytes)
}

/// Decodes non-padded base64 text.
///
/// The text is right-padded with `=` to a multiple of four before strict
/// standard decoding.
///
/// # Errors
///
/// Returns `DecodeError::Base64` if the padded text is not valid base64.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let padding = (4 - text.len() % 4) % 4;
    let mut padded = String::with_capacity(text.len() + padding);
    padded.push_str(text);
    padded.extend(std::iter::repeat('=').take(padding));

    Ok(BASE64_STANDARD.decode(padded)?)
}
