//! Caller-facing operations.
//!
//! - [`formatter`] - `format` and `parse` between semantic values and text

pub mod formatter;
