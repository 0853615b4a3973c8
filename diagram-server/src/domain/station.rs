//! Station identifier type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque station identifier.
///
/// Identifiers carry no structure: two stations are the same exactly when
/// their identifiers are equal. Callers that cluster nearby stops do so
/// before handing identifiers to the layout engine.
///
/// # Examples
///
/// ```
/// use diagram_server::domain::StationId;
///
/// let hbf = StationId::parse("de:09663:177").unwrap();
/// assert_eq!(hbf.as_str(), "de:09663:177");
///
/// // Empty ids are rejected
/// assert!(StationId::parse("").is_err());
///
/// // Padded ids are rejected
/// assert!(StationId::parse(" hbf").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station id without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a station id from untrusted input.
    ///
    /// The input must be non-empty and carry no leading or trailing
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStationId {
                reason: "must not have surrounding whitespace",
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[a-z0-9:]{1,16}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Leading whitespace is always rejected
        #[test]
        fn leading_whitespace_rejected(s in "[ \t]{1,3}[a-z]{1,8}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
