//! Async convenience API built on top of the sync engine.

use chrono::Local;

use crate::builder::build;
use crate::sequencer::{Direction, walk};
use crate::zuid::{Zuid, ZuidError};

/// Get the zUID for the current minute in async contexts.
pub async fn async_now() -> Result<Zuid, ZuidError> {
    build(Local::now().naive_local())
}

/// Collect `count` consecutive zUIDs after `start` as a vector.
///
/// Fails if the valid range ends before `count` zUIDs were produced.
pub async fn async_walk(
    start: Zuid,
    count: usize,
    direction: Direction,
) -> Result<Vec<Zuid>, ZuidError> {
    let values = walk(start, direction).next_n(count);
    if values.len() < count {
        return Err(ZuidError::RangeExhausted {
            last: values.last().copied().unwrap_or(start),
            requested: count,
            available: values.len(),
        });
    }
    Ok(values)
}
