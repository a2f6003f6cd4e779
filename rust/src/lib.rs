//! zuid: Zettelkasten Unique Identifier (zUID) construction, decomposition,
//! validation and sequencing.
//!
//! A zUID is a minute-resolution timestamp written as a 12-digit integer.
//!
//! # Format
//!
//! ```text
//! ZUID ::= YYYY MM DD HH mm        (4+2+2+2+2 digits)
//! year ∈ [1970, 2170], month ∈ [1, 12], day ∈ [1, 31], hour ∈ [0, 23], minute ∈ [0, 59]
//! ```
//!
//! # Example
//!
//! ```
//! use zuid::{Generator, build, decompose, get_next};
//!
//! let z = build("199507141431").expect("valid zUID");
//! assert_eq!(decompose(z).unwrap().as_tuple(), (1995, 7, 14, 14, 31));
//! assert_eq!(get_next(z).unwrap().unwrap().value(), 199507141432);
//!
//! let mut zgen = Generator::new();
//! assert!(zgen.create(z).is_created());
//! assert!(!zgen.create(z).is_created()); // duplicates are suppressed
//! ```

mod async_api;
mod builder;
mod decomposer;
mod generator;
mod input;
mod sequencer;
mod validator;
mod zuid;

pub use async_api::{async_now, async_walk};
pub use builder::build;
pub use decomposer::{Components, decompose};
pub use generator::{Generator, Outcome, SharedGenerator};
pub use input::Input;
pub use sequencer::{Direction, Walk, get_next, get_previous, walk};
pub use validator::{Report, find_error, validate};
pub use zuid::{ZUID_DIGITS, ZUID_MAX, ZUID_MIN, Zuid, ZuidError};
