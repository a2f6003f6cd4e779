//! Accepted zUID input shapes.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt;

use crate::zuid::{Zuid, ZuidError};

/// A value that can be decomposed, validated, built or sequenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Integer(i64),
    Text(String),
    Timestamp(NaiveDateTime),
    Wrapped(Zuid),
}

impl Input {
    /// Zero and the empty string carry no identifier at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Integer(v) => *v == 0,
            Self::Text(s) => s.is_empty(),
            Self::Timestamp(_) | Self::Wrapped(_) => false,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%dT%H:%M")),
            Self::Wrapped(z) => write!(f, "{z}"),
        }
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for Input {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Zuid> for Input {
    fn from(value: Zuid) -> Self {
        Self::Wrapped(value)
    }
}

impl TryFrom<Value> for Input {
    type Error = ZuidError;

    /// Numbers become integers, strings text, and objects with
    /// `year`/`month`/`day`/`hour`/`minute` keys timestamps.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .ok_or_else(|| ZuidError::UnsupportedType(format!("number {n}"))),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Object(ref map) => {
                let field = |name: &str| -> Result<u32, ZuidError> {
                    map.get(name)
                        .and_then(Value::as_u64)
                        .and_then(|v| u32::try_from(v).ok())
                        .ok_or_else(|| {
                            ZuidError::UnsupportedType(format!("object without numeric `{name}`"))
                        })
                };
                let year = i32::try_from(field("year")?)
                    .map_err(|_| ZuidError::UnsupportedType("year out of range".to_string()))?;
                NaiveDate::from_ymd_opt(year, field("month")?, field("day")?)
                    .and_then(|d| d.and_hms_opt(field("hour").ok()?, field("minute").ok()?, 0))
                    .map(Self::Timestamp)
                    .ok_or_else(|| ZuidError::UnsupportedType(format!("timestamp {value}")))
            }
            other => Err(ZuidError::UnsupportedType(other.to_string())),
        }
    }
}
