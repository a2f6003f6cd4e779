//! zUID (Zettelkasten Unique Identifier) value type and errors.
//!
//! Format: `YYYYMMDDHHmm` stored as a 12-digit integer.
//!
//! A [`Zuid`] can only be obtained through the builder, so every value in
//! circulation satisfies the range invariants checked by the validator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::builder::build;
use crate::decomposer::Components;
use crate::input::Input;

/// Number of decimal digits in a canonical zUID.
pub const ZUID_DIGITS: usize = 12;

/// Smallest valid zUID (`1970-01-01T00:00`).
pub const ZUID_MIN: u64 = 197_001_010_000;

/// Largest valid zUID (`2170-12-31T23:59`).
pub const ZUID_MAX: u64 = 217_012_312_359;

/// Errors that can occur during zUID operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZuidError {
    #[error("Malformed zUID input: {0}")]
    MalformedInput(String),
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),
    #[error("{0} is not a valid calendar date and time")]
    CalendarConstruction(Components),
    #[error("The given argument is not a valid Zettelkasten Unique Identifier (zUID): {0}")]
    UnsupportedType(String),
    #[error("zUID range ends at {last}: {available} of {requested} requested zUIDs available")]
    RangeExhausted {
        last: Zuid,
        requested: usize,
        available: usize,
    },
}

impl ZuidError {
    /// Short name of the error variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "MalformedInput",
            Self::Validation(_) => "Validation",
            Self::CalendarConstruction(_) => "CalendarConstruction",
            Self::UnsupportedType(_) => "UnsupportedType",
            Self::RangeExhausted { .. } => "RangeExhausted",
        }
    }
}

/// A validated Zettelkasten Unique Identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Zuid(u64);

impl Zuid {
    /// Wrap an already validated canonical value.
    pub(crate) fn from_canonical(value: u64) -> Self {
        Self(value)
    }

    /// The underlying 12-digit integer.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Year, month, day, hour and minute encoded in this identifier.
    pub fn components(self) -> Components {
        let v = self.0;
        Components {
            year: (v / 100_000_000) as i32,
            month: (v / 1_000_000 % 100) as i32,
            day: (v / 10_000 % 100) as i32,
            hour: (v / 100 % 100) as i32,
            minute: (v % 100) as i32,
        }
    }
}

impl fmt::Display for Zuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Zuid {
    type Err = ZuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        build(s)
    }
}

impl TryFrom<u64> for Zuid {
    type Error = ZuidError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let value = i64::try_from(value)
            .map_err(|_| ZuidError::MalformedInput(format!("{value} does not fit in 64 bits")))?;
        build(Input::Integer(value))
    }
}

impl From<Zuid> for u64 {
    fn from(zuid: Zuid) -> Self {
        zuid.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_value() {
        let z: Zuid = "199507141431".parse().unwrap();
        assert_eq!(z.value(), 199_507_141_431);
        assert_eq!(z.to_string(), "199507141431");
        assert_eq!(u64::from(z), 199_507_141_431);
    }

    #[test]
    fn test_ordering_follows_integer() {
        let a = Zuid::try_from(202502282359_u64).unwrap();
        let b = Zuid::try_from(202503010000_u64).unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(a, Zuid::try_from(202502282359_u64).unwrap());
    }

    #[test]
    fn test_components() {
        let z = Zuid::try_from(199507141431_u64).unwrap();
        assert_eq!(z.components().as_tuple(), (1995, 7, 14, 14, 31));
    }

    #[test]
    fn test_try_from_rejects_invalid() {
        assert!(matches!(
            Zuid::try_from(199513141431_u64),
            Err(ZuidError::Validation(_))
        ));
        assert!(matches!(
            Zuid::try_from(u64::MAX),
            Err(ZuidError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_bounds_are_valid() {
        assert_eq!(Zuid::try_from(ZUID_MIN).unwrap().value(), ZUID_MIN);
        assert_eq!(Zuid::try_from(ZUID_MAX).unwrap().value(), ZUID_MAX);
    }

    #[test]
    fn test_serde_as_integer() {
        let z = Zuid::try_from(199507141431_u64).unwrap();
        assert_eq!(serde_json::to_string(&z).unwrap(), "199507141431");
        let back: Zuid = serde_json::from_str("199507141431").unwrap();
        assert_eq!(back, z);
        assert!(serde_json::from_str::<Zuid>("199507141499").is_err());
    }

    #[test]
    fn test_validation_error_display_joins_lines() {
        let err = ZuidError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "a\nb");
        assert_eq!(err.kind(), "Validation");
    }
}
