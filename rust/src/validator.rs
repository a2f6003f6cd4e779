//! zUID well-formedness checks.
//!
//! Each field is checked against a flat range on its own; the day is not
//! cross-checked against the length of the month.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::decomposer::{Components, decompose};
use crate::input::Input;

const YEARS: RangeInclusive<i32> = 1970..=2170;
const MONTHS: RangeInclusive<i32> = 1..=12;
const DAYS: RangeInclusive<i32> = 1..=31;
const HOURS: RangeInclusive<i32> = 0..=23;
const MINUTES: RangeInclusive<i32> = 0..=59;

const VALID_MESSAGE: &str = "The given argument is a valid Zettelkasten Unique Identifier (zUID).";
const MALFORMED_MESSAGE: &str =
    "The given argument is not a well-formed Zettelkasten Unique Identifier (zUID).";

/// Outcome of [`find_error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,
    pub messages: Vec<String>,
}

fn range_errors(c: &Components) -> Vec<String> {
    let checks = [
        ("Year", c.year, YEARS),
        ("Month", c.month, MONTHS),
        ("Day", c.day, DAYS),
        ("Hour", c.hour, HOURS),
        ("Minute", c.minute, MINUTES),
    ];
    checks
        .into_iter()
        .filter(|(_, value, range)| !range.contains(value))
        .map(|(name, value, range)| {
            format!(
                "{name} {value} is not between {} and {}.",
                range.start(),
                range.end()
            )
        })
        .collect()
}

/// Whether the value decomposes and every field is in range.
pub fn validate(input: impl Into<Input>) -> bool {
    decompose(input).is_ok_and(|c| range_errors(&c).is_empty())
}

/// Describe what, if anything, is wrong with the value.
///
/// Out-of-range fields produce one message each, ordered year, month, day,
/// hour, minute. A value that cannot be decomposed produces a generic message
/// followed by the error kind and text.
pub fn find_error(input: impl Into<Input>) -> Report {
    match decompose(input) {
        Ok(c) => {
            let messages = range_errors(&c);
            if messages.is_empty() {
                Report {
                    valid: true,
                    messages: vec![VALID_MESSAGE.to_string()],
                }
            } else {
                Report {
                    valid: false,
                    messages,
                }
            }
        }
        Err(err) => Report {
            valid: false,
            messages: vec![
                MALFORMED_MESSAGE.to_string(),
                format!("{}: {}", err.kind(), err),
            ],
        },
    }
}
