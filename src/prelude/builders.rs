//! Builder pattern for PHC strings.
//!
//! # Example
//!
//! ```rust
//! use phc_string::prelude::*;
//!
//! let phc = PhcBuilder::new("argon2id")
//!     .version(19)
//!     .param("m", 65536)
//!     .param("t", 2)
//!     .param("p", 1)
//!     .salt(b"saltsaltsaltsalt")
//!     .build()
//!     .expect("build should succeed");
//!
//! assert_eq!(
//!     phc.to_string(),
//!     "$argon2id$v=19$m=65536,t=2,p=1$c2FsdHNhbHRzYWx0c2FsdA"
//! );
//! ```

use crate::core::error::PhcResult;
use crate::core::params::{ParamValue, Params};
use crate::core::types::{Hint, PhcFields, PhcString, SaltEncoding};

/// Fluent builder over [`PhcFields`] and a [`Hint`].
///
/// Setting the same parameter twice keeps its original position and the
/// later value.
#[derive(Debug, Clone, Default)]
pub struct PhcBuilder {
    fields: PhcFields,
    hint: Hint,
}

impl PhcBuilder {
    /// Starts a builder for the given function id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            fields: PhcFields::with_id(id),
            hint: Hint::default(),
        }
    }

    /// Sets the version.
    #[must_use]
    pub fn version(mut self, version: i64) -> Self {
        self.fields.version = Some(version);
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.fields
            .params
            .get_or_insert_with(Params::new)
            .insert(name, value);
        self
    }

    /// Adds every parameter in `params`, in order.
    #[must_use]
    pub fn params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.fields
            .params
            .get_or_insert_with(Params::new)
            .extend(params);
        self
    }

    /// Sets the salt bytes.
    #[must_use]
    pub fn salt(mut self, salt: impl AsRef<[u8]>) -> Self {
        self.fields.salt = Some(salt.as_ref().to_vec());
        self
    }

    /// Sets the hash bytes.
    #[must_use]
    pub fn hash(mut self, hash: impl AsRef<[u8]>) -> Self {
        self.fields.hash = Some(hash.as_ref().to_vec());
        self
    }

    /// Sets the salt encoding.
    #[must_use]
    pub fn salt_encoding(mut self, encoding: SaltEncoding) -> Self {
        self.hint.salt.encoding = encoding;
        self
    }

    /// Replaces the whole hint.
    #[must_use]
    pub fn hint(mut self, hint: Hint) -> Self {
        self.hint = hint;
        self
    }

    /// Returns the fields collected so far.
    #[must_use]
    pub const fn fields(&self) -> &PhcFields {
        &self.fields
    }

    /// Validates and builds the record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` as [`PhcString::create`] does.
    pub fn build(&self) -> PhcResult<PhcString> {
        PhcString::create(&self.fields, &self.hint)
    }

    /// Validates and renders the PHC string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` as [`PhcString::create`] does.
    pub fn format(&self) -> PhcResult<String> {
        self.build().map(|phc| phc.to_string())
    }
}
