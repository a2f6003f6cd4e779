//! Splitting zUID-shaped values into year, month, day, hour and minute.
//!
//! Integers and text are cut at fixed offsets `[0:4]`, `[4:6]`, `[6:8]`,
//! `[8:10]`, `[10:12]` of their decimal rendering. Nothing is zero-padded, so
//! an integer shorter than 12 digits leaves empty fields and is rejected.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

use crate::input::Input;
use crate::zuid::ZuidError;

const FIELDS: [(&str, Range<usize>); 5] = [
    ("year", 0..4),
    ("month", 4..6),
    ("day", 6..8),
    ("hour", 8..10),
    ("minute", 10..12),
];

static INTEGER_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9](?:_?[0-9])*)\s*$").unwrap());

/// Decomposed zUID fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Components {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl Components {
    pub fn as_tuple(self) -> (i32, i32, i32, i32, i32) {
        (self.year, self.month, self.day, self.hour, self.minute)
    }

    /// Calendar timestamp with exactly these fields.
    ///
    /// Fails when the fields do not name a real date and time, such as
    /// February 30 or hour 24.
    pub fn to_datetime(self) -> Result<NaiveDateTime, ZuidError> {
        self.naive_datetime()
            .ok_or(ZuidError::CalendarConstruction(self))
    }

    fn naive_datetime(self) -> Option<NaiveDateTime> {
        let field = |v: i32| u32::try_from(v).ok();
        NaiveDate::from_ymd_opt(self.year, field(self.month)?, field(self.day)?)?.and_hms_opt(
            field(self.hour)?,
            field(self.minute)?,
            0,
        )
    }
}

impl From<(i32, i32, i32, i32, i32)> for Components {
    fn from((year, month, day, hour, minute): (i32, i32, i32, i32, i32)) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Parse an integer literal: optional surrounding whitespace, optional sign,
/// digits with single underscores between them.
pub(crate) fn parse_int_literal(s: &str) -> Option<i64> {
    let caps = INTEGER_LITERAL.captures(s)?;
    let magnitude: i64 = caps[2].replace('_', "").parse().ok()?;
    Some(if &caps[1] == "-" {
        -magnitude
    } else {
        magnitude
    })
}

/// Substring by character positions; positions past the end clamp to it.
fn char_slice(s: &str, range: Range<usize>) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[byte_at(range.start)..byte_at(range.end)]
}

fn decompose_text(s: &str) -> Result<Components, ZuidError> {
    let mut values = [0i32; 5];
    for (slot, (name, range)) in values.iter_mut().zip(FIELDS) {
        let part = char_slice(s, range);
        *slot = parse_int_literal(part)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| {
                ZuidError::MalformedInput(format!(
                    "{name} field {part:?} of {s:?} is not an integer"
                ))
            })?;
    }
    let [year, month, day, hour, minute] = values;
    Ok(Components {
        year,
        month,
        day,
        hour,
        minute,
    })
}

fn decompose_timestamp(ts: &NaiveDateTime) -> Components {
    Components {
        year: ts.year(),
        month: ts.month() as i32,
        day: ts.day() as i32,
        hour: ts.hour() as i32,
        minute: ts.minute() as i32,
    }
}

/// Decompose a zUID-shaped value into its five fields.
pub fn decompose(input: impl Into<Input>) -> Result<Components, ZuidError> {
    match input.into() {
        Input::Integer(v) => decompose_text(&v.to_string()),
        Input::Text(s) => decompose_text(&s),
        Input::Timestamp(ts) => Ok(decompose_timestamp(&ts)),
        Input::Wrapped(z) => decompose_text(&z.value().to_string()),
    }
}
