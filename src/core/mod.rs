//! Core PHC string types and operations.
//!
//! This module provides the building blocks of the PHC string codec:
//!
//! - [`b64`] - Non-padded base64 for salt and hash
//! - [`params`] - The `name=value,...` parameter mini-language
//! - [`grammar`] - Character-class rules for each segment
//! - [`parser`] - Splitting a string into raw segments
//! - [`error`] - Error types
//! - [`types`] - The validated record and its decoded view
//! - [`operations`] - `format` and `parse`

pub mod b64;
pub mod error;
pub mod grammar;
pub mod operations;
pub mod params;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use error::{DecodeError, ParseError, PhcResult, ValidationError};
