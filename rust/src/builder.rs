//! Building validated zUIDs from integers, text and timestamps.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::decomposer::parse_int_literal;
use crate::input::Input;
use crate::validator::{find_error, validate};
use crate::zuid::{ZUID_DIGITS, Zuid, ZuidError};

/// Characters in the decimal rendering, sign included.
fn rendered_len(value: i64) -> usize {
    value.to_string().len()
}

fn from_integer(value: i64) -> Result<Zuid, ZuidError> {
    let len = rendered_len(value);
    if len > ZUID_DIGITS {
        return Err(ZuidError::Validation(vec![format!(
            "{value} has {len} digits, expected {ZUID_DIGITS}."
        )]));
    }
    if !validate(value) {
        return Err(ZuidError::Validation(find_error(value).messages));
    }
    // Short values can still slice into in-range fields, e.g. 19950714143.
    if len != ZUID_DIGITS {
        return Err(ZuidError::Validation(vec![format!(
            "{value} has {len} digits, expected {ZUID_DIGITS}."
        )]));
    }
    u64::try_from(value)
        .map(Zuid::from_canonical)
        .map_err(|_| ZuidError::MalformedInput(format!("{value} is negative")))
}

/// Text shorter than 12 digits is shifted left, so "2025" means 202500000000.
fn from_text(text: &str) -> Result<Zuid, ZuidError> {
    let value = parse_int_literal(text)
        .ok_or_else(|| ZuidError::MalformedInput(format!("{text:?} is not an integer")))?;
    let len = rendered_len(value);
    let value = if len < ZUID_DIGITS {
        value * 10_i64.pow((ZUID_DIGITS - len) as u32)
    } else {
        value
    };
    from_integer(value)
}

fn from_timestamp(ts: &NaiveDateTime) -> Result<Zuid, ZuidError> {
    let value = i64::from(ts.year()) * 100_000_000
        + i64::from(ts.month()) * 1_000_000
        + i64::from(ts.day()) * 10_000
        + i64::from(ts.hour()) * 100
        + i64::from(ts.minute());
    from_integer(value)
}

/// Build a validated zUID.
///
/// Integers must already be in canonical 12-digit form. Text is parsed and
/// right-padded with zeros. Timestamps are truncated to the minute.
pub fn build(input: impl Into<Input>) -> Result<Zuid, ZuidError> {
    build_from(&input.into())
}

pub(crate) fn build_from(input: &Input) -> Result<Zuid, ZuidError> {
    match input {
        Input::Integer(v) => from_integer(*v),
        Input::Text(s) => from_text(s),
        Input::Timestamp(ts) => from_timestamp(ts),
        Input::Wrapped(z) => Ok(*z),
    }
}
