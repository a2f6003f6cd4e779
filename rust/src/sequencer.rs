//! Stepping zUIDs forward and backward by one minute.
//!
//! Steps go through calendar arithmetic, so minute, hour, day, month and year
//! boundaries roll over correctly, leap days included. The result is rebuilt
//! through the builder and therefore always re-validated.

use chrono::TimeDelta;
use tracing::trace;

use crate::builder::build;
use crate::decomposer::decompose;
use crate::input::Input;
use crate::zuid::{Zuid, ZuidError};

/// Direction of a one-minute step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

fn step(input: Input, direction: Direction) -> Result<Option<Zuid>, ZuidError> {
    if input.is_empty() {
        return Ok(None);
    }
    let components = decompose(input)?;
    let current = components.to_datetime()?;
    let one_minute = TimeDelta::minutes(1);
    let stepped = match direction {
        Direction::Forward => current.checked_add_signed(one_minute),
        Direction::Backward => current.checked_sub_signed(one_minute),
    }
    .ok_or(ZuidError::CalendarConstruction(components))?;
    build(stepped).map(Some)
}

/// The zUID one minute after `input`, or `None` for empty input.
pub fn get_next(input: impl Into<Input>) -> Result<Option<Zuid>, ZuidError> {
    step(input.into(), Direction::Forward)
}

/// The zUID one minute before `input`, or `None` for empty input.
pub fn get_previous(input: impl Into<Input>) -> Result<Option<Zuid>, ZuidError> {
    step(input.into(), Direction::Backward)
}

/// Iterator over consecutive zUIDs, starting after `start`.
///
/// Ends at the edge of the valid range.
pub fn walk(start: Zuid, direction: Direction) -> Walk {
    Walk {
        cursor: Some(start),
        direction,
    }
}

/// See [`walk`].
#[derive(Debug, Clone)]
pub struct Walk {
    cursor: Option<Zuid>,
    direction: Direction,
}

impl Walk {
    /// Take up to n zUIDs.
    pub fn next_n(&mut self, n: usize) -> Vec<Zuid> {
        self.take(n).collect()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Iterator for Walk {
    type Item = Zuid;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        match step(Input::Wrapped(current), self.direction) {
            Ok(next) => {
                self.cursor = next;
                next
            }
            Err(err) => {
                trace!(zuid = %current, error = %err, "walk reached the end of the zUID range");
                self.cursor = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zuid::{ZUID_MAX, ZUID_MIN};

    fn next_value(v: i64) -> u64 {
        get_next(v).unwrap().unwrap().value()
    }

    fn previous_value(v: i64) -> u64 {
        get_previous(v).unwrap().unwrap().value()
    }

    #[test]
    fn test_next_minute_and_hour() {
        assert_eq!(next_value(202502141151), 202502141152);
        assert_eq!(next_value(202502141159), 202502141200);
        assert_eq!(next_value(202502142359), 202502150000);
    }

    #[test]
    fn test_next_month_rollover() {
        assert_eq!(next_value(202502282359), 202503010000);
        assert_eq!(next_value(202002282359), 202002290000);
        assert_eq!(next_value(202002292359), 202003010000);
        assert_eq!(next_value(202504302359), 202505010000);
    }

    #[test]
    fn test_next_year_rollover() {
        assert_eq!(next_value(202412312359), 202501010000);
        assert_eq!(previous_value(202501010000), 202412312359);
    }

    #[test]
    fn test_previous_rollover() {
        assert_eq!(previous_value(202503010000), 202502282359);
        assert_eq!(previous_value(202003010000), 202002292359);
        assert_eq!(previous_value(202502141200), 202502141159);
    }

    #[test]
    fn test_accepts_every_input_shape() {
        assert_eq!(
            get_next("202502141151").unwrap().unwrap().value(),
            202502141152
        );
        let z = build(202502141151_i64).unwrap();
        assert_eq!(get_next(z).unwrap().unwrap().value(), 202502141152);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(get_next(0_i64), Ok(None));
        assert_eq!(get_previous(""), Ok(None));
    }

    #[test]
    fn test_impossible_calendar_date_propagates() {
        assert!(matches!(
            get_next(202502301200_i64),
            Err(ZuidError::CalendarConstruction(_))
        ));
        assert!(matches!(
            get_previous(202504311200_i64),
            Err(ZuidError::CalendarConstruction(_))
        ));
    }

    #[test]
    fn test_malformed_input_propagates() {
        assert!(matches!(
            get_next(2025_i64),
            Err(ZuidError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_stepping_past_the_window_fails_validation() {
        assert!(matches!(
            get_next(ZUID_MAX as i64),
            Err(ZuidError::Validation(_))
        ));
        assert!(matches!(
            get_previous(ZUID_MIN as i64),
            Err(ZuidError::Validation(_))
        ));
    }

    #[test]
    fn test_walk_forward() {
        let start = build(202502142330_i64).unwrap();
        let mut w = walk(start, Direction::Forward);
        let v = w.next_n(50);
        assert_eq!(v.len(), 50);
        assert_eq!(v[0].value(), 202502142331);
        assert_eq!(v[29].value(), 202502150000);
        assert!(v.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_walk_stops_at_range_edge() {
        let start = build(ZUID_MAX as i64 - 2).unwrap();
        let v: Vec<Zuid> = walk(start, Direction::Forward).take(10).collect();
        assert_eq!(v.len(), 2);
        assert_eq!(v[1].value(), ZUID_MAX);

        let start = build(ZUID_MIN as i64 + 1).unwrap();
        let mut w = walk(start, Direction::Backward);
        assert_eq!(w.direction(), Direction::Backward);
        assert_eq!(w.next().map(Zuid::value), Some(ZUID_MIN));
        assert_eq!(w.next(), None);
        assert_eq!(w.next(), None);
    }
}
