//! The `name=value[,name=value]*` parameter mini-language.
//!
//! Parameter values are either text or integers. Decoding coerces any value
//! that looks like a signed integer (optionally followed by `.digits`) into
//! [`ParamValue::Integer`], keeping the integer part. Everything else stays
//! [`ParamValue::Text`].
//!
//! The version segment `v=<N>` is the same language with a single `v` key.

use core::fmt::{self, Display};

use crate::core::error::DecodeError;

/// Name of the key carried by the version segment.
pub const VERSION_KEY: &str = "v";

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// A value kept as text.
    Text(String),
    /// A value that decoded as an integer.
    Integer(i64),
}

impl ParamValue {
    /// Coerces raw segment text into a value.
    ///
    /// `"4096"`, `"-1"` and `"3.7"` become integers (`3.7` keeps `3`).
    /// Text whose integer part overflows `i64` stays text.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        if looks_numeric(raw) {
            let integer_part = raw.split_once('.').map_or(raw, |(int, _)| int);
            if let Ok(n) = integer_part.parse::<i64>() {
                return Self::Integer(n);
            }
        }
        Self::Text(raw.to_owned())
    }

    /// Returns the integer if this value is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Integer(_) => None,
        }
    }
}

/// `-?\d+(\.\d+)?`
fn looks_numeric(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    all_digits(int) && frac.map_or(true, all_digits)
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// An insertion-ordered parameter mapping.
///
/// Re-inserting an existing name replaces its value in place, so the
/// first-seen order is kept and the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a parameter, replacing the value of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Decodes a parameter segment.
    ///
    /// Each comma-separated entry is split on its first `=`. An entry
    /// without `=`, or empty text, yields an empty mapping.
    #[must_use]
    pub fn from_segment(text: &str) -> Self {
        let mut params = Self::new();
        if text.is_empty() {
            return params;
        }
        for entry in text.split(',') {
            let Some((name, value)) = entry.split_once('=') else {
                return Self::new();
            };
            params.insert(name, ParamValue::coerce(value));
        }
        params
    }
}

/// Serializes as `name=value` pairs joined by `,`.
///
/// An empty mapping renders as empty text.
impl Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Renders a version number as its `v=<N>` segment.
#[must_use]
pub fn version_segment(version: i64) -> String {
    Params::from_iter([(VERSION_KEY, version)]).to_string()
}

/// Reads the version number out of a `v=<N>` segment.
///
/// Returns `Ok(None)` if the segment carries no integer `v` key.
///
/// # Errors
///
/// Returns `DecodeError::VersionOutOfRange` if the number does not fit an
/// `i64`, the width every integer in this language decodes to.
pub fn parse_version(segment: &str) -> Result<Option<i64>, DecodeError> {
    match Params::from_segment(segment).get(VERSION_KEY) {
        Some(ParamValue::Integer(n)) => Ok(Some(*n)),
        Some(ParamValue::Text(s)) if s.bytes().all(|b| b.is_ascii_digit()) && !s.is_empty() => {
            Err(DecodeError::VersionOutOfRange)
        }
        _ => Ok(None),
    }
}
