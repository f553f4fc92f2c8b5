//! Salt encoding hint.
//!
//! The PHC string does not record how its salt was encoded. The same hint
//! must be given when formatting and when parsing for a salt to round-trip.

use core::fmt::{self, Display};
use core::str::FromStr;

/// How the salt segment is carried.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaltEncoding {
    /// Non-padded base64, like the hash.
    #[default]
    Base64,
    /// Raw 7-bit text, stored as-is.
    SevenBit,
}

impl SaltEncoding {
    /// The name used in configuration (`"base64"` or `"7bit"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::SevenBit => "7bit",
        }
    }
}

impl Display for SaltEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized salt encoding name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported salt encoding: {0}")]
pub struct UnknownSaltEncoding(pub String);

impl FromStr for SaltEncoding {
    type Err = UnknownSaltEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(Self::Base64),
            "7bit" => Ok(Self::SevenBit),
            other => Err(UnknownSaltEncoding(other.to_owned())),
        }
    }
}

/// Salt section of a [`Hint`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaltHint {
    /// Encoding of the salt segment.
    pub encoding: SaltEncoding,
}

/// Options that steer how segments are transcoded.
///
/// # Example
///
/// ```rust
/// use phc_string::{Hint, SaltEncoding};
///
/// assert_eq!(Hint::default().salt.encoding, SaltEncoding::Base64);
/// assert_eq!(Hint::seven_bit_salt().salt.encoding, SaltEncoding::SevenBit);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    /// Salt options.
    pub salt: SaltHint,
}

impl Hint {
    /// A hint with the given salt encoding.
    #[must_use]
    pub const fn with_salt_encoding(encoding: SaltEncoding) -> Self {
        Self {
            salt: SaltHint { encoding },
        }
    }

    /// A hint carrying the salt as raw 7-bit text.
    #[must_use]
    pub const fn seven_bit_salt() -> Self {
        Self::with_salt_encoding(SaltEncoding::SevenBit)
    }

    pub(crate) const fn is_seven_bit_salt(&self) -> bool {
        matches!(self.salt.encoding, SaltEncoding::SevenBit)
    }
}
