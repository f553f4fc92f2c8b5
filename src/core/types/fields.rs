//! The decoded, caller-facing view of a PHC string.

use core::fmt::{self, Display};

use crate::core::params::Params;

/// A field of a PHC string, used to pick what to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Function identifier.
    Id,
    /// `v=<N>` version.
    Version,
    /// Parameter list.
    Params,
    /// Salt bytes.
    Salt,
    /// Hash bytes.
    Hash,
}

impl Field {
    /// Every field, in wire order.
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::Version,
        Self::Params,
        Self::Salt,
        Self::Hash,
    ];

    /// Lowercase field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Version => "version",
            Self::Params => "params",
            Self::Salt => "salt",
            Self::Hash => "hash",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic values of a PHC string.
///
/// Used both as input to [`format`](crate::format) and as the output of
/// [`parse`](crate::parse). A `None` field is either absent from the string
/// or was not picked.
///
/// # Example
///
/// ```rust
/// use phc_string::{PhcFields, Params};
///
/// let fields = PhcFields {
///     id: Some("argon2id".into()),
///     version: Some(19),
///     params: Some([("m", 65536), ("t", 2), ("p", 1)].into_iter().collect::<Params>()),
///     ..PhcFields::default()
/// };
/// let phc = phc_string::format(&fields, &Default::default()).expect("format should succeed");
/// assert_eq!(phc, "$argon2id$v=19$m=65536,t=2,p=1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhcFields {
    /// Function identifier.
    pub id: Option<String>,
    /// Function version.
    pub version: Option<i64>,
    /// Function parameters.
    pub params: Option<Params>,
    /// Raw salt bytes.
    pub salt: Option<Vec<u8>>,
    /// Raw hash bytes.
    pub hash: Option<Vec<u8>>,
}

impl PhcFields {
    /// Starts a field set with the given id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}
