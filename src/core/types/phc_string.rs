//! `PhcString` - a validated PHC string.
//!
//! Format: `$<id>[$v=<version>][$<params>][$<salt>[$<hash>]]`
//!
//! The record holds the five segments as text. Decoding into semantic
//! values (version number, parameter mapping, salt and hash bytes) happens
//! on demand and is never cached.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::b64;
use crate::core::error::{DecodeError, ParseError, ValidationError};
use crate::core::grammar;
use crate::core::params::{self, Params};
use crate::core::parser::split_segments;
use crate::core::types::{Field, Hint, PhcFields, Segment};

/// A PHC string whose segments satisfy the format grammar.
///
/// Equality compares the raw segments, so two strings that decode to the
/// same values but differ on the wire (`v=019` against `v=19`) are unequal.
///
/// # Example
///
/// ```rust
/// use phc_string::{Hint, PhcString};
///
/// let phc: PhcString = "$argon2i$v=19$m=4096,t=3,p=1$IfH5R3O3r3501DfGnGr2rw"
///     .parse()
///     .expect("valid PHC string");
///
/// assert_eq!(phc.id(), "argon2i");
/// assert_eq!(phc.version(), Ok(Some(19)));
/// assert_eq!(phc.salt(&Hint::default()).expect("valid salt").map(|s| s.len()), Some(16));
/// assert_eq!(phc.to_string(), "$argon2i$v=19$m=4096,t=3,p=1$IfH5R3O3r3501DfGnGr2rw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhcString {
    id: String,
    version: Option<String>,
    params: Option<String>,
    salt: Segment,
    hash: Segment,
}

impl PhcString {
    /// Builds a record from raw segment text.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first segment that breaks the
    /// grammar, or `ValidationError::HashNeedsSalt` if `hash` is present
    /// while `salt` is absent.
    pub fn new(
        id: impl Into<String>,
        version: Option<String>,
        params: Option<String>,
        salt: Segment,
        hash: Segment,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            id: id.into(),
            version,
            params,
            salt: salt.normalized(),
            hash: hash.normalized(),
        };
        grammar::validate(&record)?;
        Ok(record)
    }

    /// Parses and validates a PHC string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the string is malformed or any segment fails
    /// validation.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let result = split_segments(input).and_then(|raw| {
            let id = raw.id.ok_or(ValidationError::Id)?;
            Ok(Self::new(
                id,
                raw.version.map(str::to_owned),
                raw.params.map(str::to_owned),
                Segment::from(raw.salt),
                Segment::from(raw.hash),
            )?)
        });

        match &result {
            Ok(record) => tracing::trace!(id = %record.id, "parsed PHC string"),
            Err(err) => tracing::debug!(error = %err, "rejected PHC string"),
        }
        result
    }

    /// Builds a record from semantic values.
    ///
    /// The version becomes `v=<N>`, parameters become `name=value,...`, and
    /// salt and hash are base64-encoded without padding. With a 7-bit salt
    /// hint the salt bytes are used as the segment text unchanged. An empty
    /// parameter mapping leaves the params segment absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Id` if `fields.id` is `None`, and
    /// `ValidationError::EncodedSalt` if a 7-bit salt is not UTF-8. Other
    /// errors are the same as [`PhcString::new`].
    pub fn create(fields: &PhcFields, hint: &Hint) -> Result<Self, ValidationError> {
        let id = fields.id.as_deref().ok_or(ValidationError::Id)?;
        let version = fields.version.map(params::version_segment);
        let params_segment = fields
            .params
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(Params::to_string);

        let salt = match fields.salt.as_deref() {
            None => Segment::Absent,
            Some(bytes) if hint.is_seven_bit_salt() => core::str::from_utf8(bytes)
                .map(Segment::from)
                .map_err(|_| ValidationError::EncodedSalt)?,
            Some(bytes) => Segment::from(b64::encode(bytes)),
        };
        let hash = Segment::from(fields.hash.as_deref().map(b64::encode));

        let record = Self::new(id, version, params_segment, salt, hash)?;
        tracing::trace!(id = %record.id, "created PHC string");
        Ok(record)
    }

    /// Function identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw `v=<N>` segment, if present.
    #[must_use]
    pub fn version_segment(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Raw parameter segment, if present.
    #[must_use]
    pub fn params_segment(&self) -> Option<&str> {
        self.params.as_deref()
    }

    /// Salt segment text, if present. May be empty.
    #[must_use]
    pub fn encoded_salt(&self) -> Option<&str> {
        self.salt.as_str()
    }

    /// Hash segment text, if present. May be empty.
    #[must_use]
    pub fn encoded_hash(&self) -> Option<&str> {
        self.hash.as_str()
    }

    /// Decoded version number.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::VersionOutOfRange` if it does not fit an `i64`.
    pub fn version(&self) -> Result<Option<i64>, DecodeError> {
        match self.version_segment() {
            Some(segment) => params::parse_version(segment),
            None => Ok(None),
        }
    }

    /// Decoded parameter mapping.
    #[must_use]
    pub fn params(&self) -> Option<Params> {
        self.params_segment().map(Params::from_segment)
    }

    /// Decoded salt bytes, honoring the salt encoding hint.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Base64` if a base64 salt is malformed.
    pub fn salt(&self, hint: &Hint) -> Result<Option<Vec<u8>>, DecodeError> {
        match self.encoded_salt() {
            Some(text) if hint.is_seven_bit_salt() => Ok(Some(text.as_bytes().to_vec())),
            Some(text) => b64::decode(text).map(Some),
            None => Ok(None),
        }
    }

    /// Decoded hash bytes.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Base64` if the hash is malformed.
    pub fn hash(&self) -> Result<Option<Vec<u8>>, DecodeError> {
        self.encoded_hash().map(b64::decode).transpose()
    }

    /// Decodes the picked fields.
    ///
    /// Fields that are not picked, or whose segment is absent, are `None`.
    /// Only picked segments are decoded.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if a picked segment cannot be decoded.
    pub fn to_fields(&self, pick: &[Field], hint: &Hint) -> Result<PhcFields, DecodeError> {
        let wants = |field: Field| pick.contains(&field);
        Ok(PhcFields {
            id: wants(Field::Id).then(|| self.id.clone()),
            version: if wants(Field::Version) { self.version()? } else { None },
            params: if wants(Field::Params) { self.params() } else { None },
            salt: if wants(Field::Salt) { self.salt(hint)? } else { None },
            hash: if wants(Field::Hash) { self.hash()? } else { None },
        })
    }
}

impl Display for PhcString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = [
            Some(self.id.as_str()),
            self.version_segment(),
            self.params_segment(),
            self.encoded_salt(),
            self.encoded_hash(),
        ];
        for segment in segments.into_iter().flatten() {
            write!(f, "${segment}")?;
        }
        Ok(())
    }
}

impl FromStr for PhcString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PhcString {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhcString {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::ParamValue;

    const ARGON2I: &str = "$argon2i$v=19$m=4096,t=3,p=1\
        $IfH5R3O3r3501DfGnGr2rw$DfQ8Hv9R2eF2uBs1dR99IGjVjDl/rpkJIkaNyZ1g3pk";

    const SALT: [u8; 16] = [
        0x21, 0xf1, 0xf9, 0x47, 0x73, 0xb7, 0xaf, 0x7e, 0x74, 0xd4, 0x37, 0xc6, 0x9c, 0x6a, 0xf6,
        0xaf,
    ];

    fn raw(
        id: &str,
        version: Option<&str>,
        params: Option<&str>,
        salt: Option<&str>,
        hash: Option<&str>,
    ) -> Result<PhcString, ValidationError> {
        PhcString::new(
            id,
            version.map(str::to_owned),
            params.map(str::to_owned),
            Segment::from(salt),
            Segment::from(hash),
        )
    }

    #[test]
    fn test_parse_segments() -> Result<(), ParseError> {
        let phc = PhcString::parse(ARGON2I)?;
        assert_eq!(phc.id(), "argon2i");
        assert_eq!(phc.version_segment(), Some("v=19"));
        assert_eq!(phc.params_segment(), Some("m=4096,t=3,p=1"));
        assert_eq!(phc.encoded_salt(), Some("IfH5R3O3r3501DfGnGr2rw"));
        assert_eq!(
            phc.encoded_hash(),
            Some("DfQ8Hv9R2eF2uBs1dR99IGjVjDl/rpkJIkaNyZ1g3pk")
        );
        Ok(())
    }

    #[test]
    fn test_parse_is_reversible() -> Result<(), ParseError> {
        assert_eq!(PhcString::parse(ARGON2I)?.to_string(), ARGON2I);
        Ok(())
    }

    #[test]
    fn test_decoded_values() -> Result<(), Box<dyn std::error::Error>> {
        let phc: PhcString = ARGON2I.parse()?;
        assert_eq!(phc.version()?, Some(19));
        let params = phc.params().ok_or("params missing")?;
        assert_eq!(params.get("t"), Some(&ParamValue::Integer(3)));
        assert_eq!(phc.salt(&Hint::default())?, Some(SALT.to_vec()));
        assert_eq!(phc.hash()?.map(|h| h.len()), Some(32));
        Ok(())
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(
            PhcString::parse("not-a-phc-string-at-all"),
            Err(ParseError::MissingLeadingDelimiter)
        );
        assert_eq!(
            PhcString::parse("$"),
            Err(ParseError::Invalid(ValidationError::Id))
        );
        assert_eq!(
            PhcString::parse("$foo_bar"),
            Err(ParseError::Invalid(ValidationError::Id))
        );
        assert_eq!(
            PhcString::parse("$argon2i$v=foo"),
            Err(ParseError::Invalid(ValidationError::Version))
        );
        assert_eq!(
            PhcString::parse("$argon2i$m=1$q-_N"),
            Err(ParseError::Invalid(ValidationError::EncodedSalt))
        );
        assert_eq!(
            PhcString::parse("$argon2i$m=1$c2FsdA$q-_N"),
            Err(ParseError::Invalid(ValidationError::EncodedHash))
        );
    }

    #[test]
    fn test_id_is_required() {
        assert_eq!(raw("", None, None, None, None), Err(ValidationError::Id));
        assert_eq!(
            raw("foo_bar_baz", None, None, None, None),
            Err(ValidationError::Id)
        );
        assert_eq!(
            raw(&"foo".repeat(11), None, None, None, None),
            Err(ValidationError::Id)
        );
    }

    #[test]
    fn test_version_rules() {
        for version in ["", "b=1", "v=", "v=foo"] {
            assert_eq!(
                raw("argon2i", Some(version), None, None, None),
                Err(ValidationError::Version),
                "version {version:?}"
            );
        }
    }

    #[test]
    fn test_params_rules() {
        let too_long = format!("{}=0", "bar".repeat(11));
        for params in ["", "foo=0,,bar=1,", "01_foo=0", too_long.as_str(), "p=?"] {
            assert_eq!(
                raw("argon2i", None, Some(params), None, None),
                Err(ValidationError::Parameters),
                "params {params:?}"
            );
        }
    }

    #[test]
    fn test_salt_and_hash_rules() {
        assert!(raw("argon2i", None, None, Some(""), None).is_ok());
        assert_eq!(
            raw("argon2i", None, None, Some("q-_N"), None),
            Err(ValidationError::EncodedSalt)
        );
        assert!(raw("argon2i", None, None, Some(""), Some("")).is_ok());
        assert_eq!(
            raw("argon2i", None, None, Some("q+/N"), Some("q-_N")),
            Err(ValidationError::EncodedHash)
        );
    }

    #[test]
    fn test_hash_needs_salt() {
        assert_eq!(
            raw("argon2i", None, None, None, Some("")),
            Err(ValidationError::HashNeedsSalt)
        );
        assert_eq!(
            raw("argon2i", None, None, None, Some("UEAkJHcwcmQ")),
            Err(ValidationError::HashNeedsSalt)
        );
        assert!(raw("argon2i", None, None, Some(""), Some("UEAkJHcwcmQ")).is_ok());
    }

    #[test]
    fn test_empty_salt_and_hash_rendering() -> Result<(), ValidationError> {
        let phc = raw("example", Some("v=19"), Some("m=4096,t=3,p=1"), Some(""), Some(""))?;
        assert_eq!(phc.to_string(), "$example$v=19$m=4096,t=3,p=1$$");

        let phc = raw(
            "example",
            Some("v=19"),
            Some("m=4096,t=3,p=1"),
            Some(""),
            Some("AAAA"),
        )?;
        assert_eq!(phc.to_string(), "$example$v=19$m=4096,t=3,p=1$$AAAA");
        Ok(())
    }

    #[test]
    fn test_equality_is_on_raw_segments() -> Result<(), ParseError> {
        assert_eq!(PhcString::parse(ARGON2I)?, PhcString::parse(ARGON2I)?);

        let padded = PhcString::parse("$argon2i$v=019")?;
        let plain = PhcString::parse("$argon2i$v=19")?;
        assert_eq!(padded.version(), plain.version());
        assert_ne!(padded, plain);
        Ok(())
    }

    #[test]
    fn test_create() -> Result<(), ValidationError> {
        let fields = PhcFields {
            id: Some("argon2i".into()),
            version: Some(19),
            params: Some([("m", 4096), ("t", 3), ("p", 1)].into_iter().collect()),
            salt: Some(SALT.to_vec()),
            hash: None,
        };
        let phc = PhcString::create(&fields, &Hint::default())?;
        assert_eq!(
            phc.to_string(),
            "$argon2i$v=19$m=4096,t=3,p=1$IfH5R3O3r3501DfGnGr2rw"
        );
        Ok(())
    }

    #[test]
    fn test_create_rejects_negative_version() {
        let fields = PhcFields {
            version: Some(-1),
            ..PhcFields::with_id("argon2i")
        };
        assert_eq!(
            PhcString::create(&fields, &Hint::default()),
            Err(ValidationError::Version)
        );
    }

    #[test]
    fn test_create_requires_id() {
        let fields = PhcFields::default();
        assert_eq!(
            PhcString::create(&fields, &Hint::default()),
            Err(ValidationError::Id)
        );
    }

    #[test]
    fn test_create_hash_needs_salt() {
        let fields = PhcFields {
            hash: Some(vec![0; 4]),
            ..PhcFields::with_id("argon2i")
        };
        assert_eq!(
            PhcString::create(&fields, &Hint::default()),
            Err(ValidationError::HashNeedsSalt)
        );
    }

    #[test]
    fn test_create_empty_params_is_absent() -> Result<(), ValidationError> {
        let fields = PhcFields {
            params: Some(Params::new()),
            ..PhcFields::with_id("argon2i")
        };
        let phc = PhcString::create(&fields, &Hint::default())?;
        assert_eq!(phc.params_segment(), None);
        assert_eq!(phc.to_string(), "$argon2i");
        Ok(())
    }

    #[test]
    fn test_create_seven_bit_salt() -> Result<(), Box<dyn std::error::Error>> {
        let hint = Hint::seven_bit_salt();
        let fields = PhcFields {
            salt: Some(b"saltsalt".to_vec()),
            ..PhcFields::with_id("pbkdf2")
        };
        let phc = PhcString::create(&fields, &hint)?;
        assert_eq!(phc.to_string(), "$pbkdf2$saltsalt");
        assert_eq!(phc.salt(&hint)?, Some(b"saltsalt".to_vec()));
        Ok(())
    }

    #[test]
    fn test_create_seven_bit_salt_rejects_foreign_bytes() {
        let hint = Hint::seven_bit_salt();
        for salt in [b"salt$salt".to_vec(), vec![0xff, 0xfe]] {
            let fields = PhcFields {
                salt: Some(salt),
                ..PhcFields::with_id("pbkdf2")
            };
            assert_eq!(
                PhcString::create(&fields, &hint),
                Err(ValidationError::EncodedSalt)
            );
        }
    }

    #[test]
    fn test_to_fields_pick() -> Result<(), Box<dyn std::error::Error>> {
        let phc = PhcString::parse(ARGON2I)?;
        let fields = phc.to_fields(&[Field::Id, Field::Params, Field::Version], &Hint::default())?;
        assert_eq!(fields.id.as_deref(), Some("argon2i"));
        assert_eq!(fields.version, Some(19));
        assert!(fields.params.is_some());
        assert_eq!(fields.salt, None);
        assert_eq!(fields.hash, None);
        Ok(())
    }

    #[test]
    fn test_to_fields_skips_undecodable_unpicked_salt() -> Result<(), Box<dyn std::error::Error>> {
        // "q" is valid salt text but not decodable base64.
        let phc = PhcString::parse("$argon2i$m=1$q")?;
        assert!(phc.to_fields(&[Field::Id, Field::Params], &Hint::default()).is_ok());
        assert!(phc.to_fields(&Field::ALL, &Hint::default()).is_err());
        Ok(())
    }

    #[test]
    fn test_try_from() {
        assert!(PhcString::try_from(ARGON2I).is_ok());
        assert!(PhcString::try_from(ARGON2I.to_string()).is_ok());
        assert!(PhcString::try_from("argon2i").is_err());
    }
}
