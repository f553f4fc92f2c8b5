//! `Segment` - an optional salt or hash field.
//!
//! An absent salt is omitted from the PHC string, while an empty salt is
//! kept as an empty field between two `$` delimiters. The two must not be
//! collapsed, so they are separate states here.

/// A salt or hash segment in one of three states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Not present; no delimiter is emitted.
    #[default]
    Absent,
    /// Present but empty; renders as an empty field.
    Empty,
    /// Present with non-empty text.
    Value(String),
}

impl Segment {
    /// Returns the segment text, or `None` if absent.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Empty => Some(""),
            Self::Value(s) => Some(s.as_str()),
        }
    }

    /// Normalizes `Value("")` into `Empty`.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        match self {
            Self::Value(s) if s.is_empty() => Self::Empty,
            other => other,
        }
    }
}

impl From<Option<String>> for Segment {
    fn from(text: Option<String>) -> Self {
        text.map_or(Self::Absent, Self::from)
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Value(text)
        }
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Self::from(text.to_owned())
    }
}

impl From<Option<&str>> for Segment {
    fn from(text: Option<&str>) -> Self {
        text.map_or(Self::Absent, Self::from)
    }
}
