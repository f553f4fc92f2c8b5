//! PHC string types.
//!
//! - [`PhcString`] - Validated record of the five raw segments
//! - [`PhcFields`] - Decoded semantic values, and [`Field`] to pick them
//! - [`Segment`] - Absent / empty / valued salt or hash
//! - [`Hint`] - Salt encoding options

mod fields;
mod hint;
mod phc_string;
mod segment;

pub use fields::{Field, PhcFields};
pub use hint::{Hint, SaltEncoding, SaltHint, UnknownSaltEncoding};
pub use phc_string::PhcString;
pub use segment::Segment;
