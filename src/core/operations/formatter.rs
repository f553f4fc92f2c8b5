//! Formatting and parsing between semantic values and PHC strings.
//!
//! # Example
//!
//! ```rust
//! use phc_string::{format, parse, Field, Hint};
//!
//! let input = "$argon2i$v=19$m=4096,t=3,p=1\
//!     $IfH5R3O3r3501DfGnGr2rw$DfQ8Hv9R2eF2uBs1dR99IGjVjDl/rpkJIkaNyZ1g3pk";
//!
//! let fields = parse(input, &Hint::default(), &Field::ALL).expect("parse should succeed");
//! assert_eq!(fields.id.as_deref(), Some("argon2i"));
//! assert_eq!(fields.version, Some(19));
//! assert_eq!(fields.salt.as_ref().map(Vec::len), Some(16));
//!
//! let output = format(&fields, &Hint::default()).expect("format should succeed");
//! assert_eq!(output, input);
//! ```

use crate::core::error::{ParseError, ValidationError};
use crate::core::types::{Field, Hint, PhcFields, PhcString};

/// Formats semantic values as a PHC string.
///
/// # Errors
///
/// Returns `ValidationError` if `fields.id` is `None`, if any segment breaks
/// the grammar, or if a hash is given without a salt.
pub fn format(fields: &PhcFields, hint: &Hint) -> Result<String, ValidationError> {
    PhcString::create(fields, hint).map(|phc| phc.to_string())
}

/// Parses a PHC string and decodes the picked fields.
///
/// Pass [`Field::ALL`] to decode everything. Fields that are not picked are
/// `None` and their segments are not decoded.
///
/// # Errors
///
/// Returns `ParseError` if the string is malformed, fails validation, or a
/// picked segment cannot be decoded.
pub fn parse(input: &str, hint: &Hint, pick: &[Field]) -> Result<PhcFields, ParseError> {
    let phc = PhcString::parse(input)?;
    Ok(phc.to_fields(pick, hint)?)
}
