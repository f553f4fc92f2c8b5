//! Ergonomic layer for PHC string operations.
//!
//! The prelude module re-exports the common types and adds the
//! [`PhcBuilder`] fluent API.
//!
//! # Usage
//!
//! ```rust
//! use phc_string::prelude::*;
//! ```

mod builders;

pub use builders::PhcBuilder;

// Re-export core types for convenience
pub use crate::core::error::{DecodeError, ParseError, PhcResult, ValidationError};
pub use crate::core::operations::formatter::{format, parse};
pub use crate::core::params::{ParamValue, Params};
pub use crate::core::types::{Field, Hint, PhcFields, PhcString, SaltEncoding, SaltHint, Segment};
