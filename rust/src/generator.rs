//! Session-level zUID generation with de-duplication.
//!
//! [`Generator`] remembers every zUID it has produced and refuses to hand out
//! the same one twice. History grows for the lifetime of the generator.

use chrono::Local;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::builder::build_from;
use crate::decomposer::{Components, decompose};
use crate::input::Input;
use crate::sequencer::{get_next, get_previous};
use crate::validator::{Report, find_error, validate};
use crate::zuid::{Zuid, ZuidError};

/// Result of [`Generator::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New zUID, now recorded in the session.
    Created(Zuid),
    /// Already produced earlier in this session.
    Duplicate(Zuid),
    /// Input could not be built into a zUID; nothing was recorded.
    Invalid(ZuidError),
}

impl Outcome {
    /// The created zUID, if any.
    pub fn created(&self) -> Option<Zuid> {
        match self {
            Self::Created(z) => Some(*z),
            Self::Duplicate(_) | Self::Invalid(_) => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Duplicate(_) => "duplicate",
            Self::Invalid(_) => "invalid",
        }
    }
}

/// zUID generator with creation history.
#[derive(Debug, Default)]
pub struct Generator {
    current: Option<Zuid>,
    history: Vec<Zuid>,
    identifiers: HashSet<Zuid>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// zUID for the current local wall-clock minute.
    pub fn now(&mut self) -> Outcome {
        self.create(Local::now().naive_local())
    }

    /// Build a zUID and record it unless it was produced before.
    pub fn create(&mut self, input: impl Into<Input>) -> Outcome {
        let input = input.into();
        let zuid = match build_from(&input) {
            Ok(zuid) => zuid,
            Err(err) => {
                warn!(input = %input, kind = err.kind(), error = %err, "rejected zUID input");
                return Outcome::Invalid(err);
            }
        };
        if !self.identifiers.insert(zuid) {
            debug!(zuid = %zuid, "duplicate zUID suppressed");
            return Outcome::Duplicate(zuid);
        }
        self.history.push(zuid);
        self.current = Some(zuid);
        debug!(zuid = %zuid, total = self.history.len(), "created zUID");
        Outcome::Created(zuid)
    }

    /// Last created zUID.
    pub fn current(&self) -> Option<Zuid> {
        self.current
    }

    /// Every created zUID, oldest first.
    pub fn history(&self) -> &[Zuid] {
        &self.history
    }

    pub fn contains(&self, zuid: &Zuid) -> bool {
        self.identifiers.contains(zuid)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn decompose(&self, input: impl Into<Input>) -> Result<Components, ZuidError> {
        decompose(input)
    }

    pub fn validate(&self, input: impl Into<Input>) -> bool {
        validate(input)
    }

    pub fn find_error(&self, input: impl Into<Input>) -> Report {
        find_error(input)
    }

    pub fn get_previous(&self, input: impl Into<Input>) -> Result<Option<Zuid>, ZuidError> {
        get_previous(input)
    }

    pub fn get_next(&self, input: impl Into<Input>) -> Result<Option<Zuid>, ZuidError> {
        get_next(input)
    }
}

/// Cloneable, thread-safe handle to one [`Generator`].
///
/// The duplicate check and the insert happen under a single lock.
#[derive(Debug, Clone, Default)]
pub struct SharedGenerator {
    inner: Arc<Mutex<Generator>>,
}

impl SharedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, input: impl Into<Input>) -> Outcome {
        self.inner.lock().create(input)
    }

    pub fn now(&self) -> Outcome {
        self.inner.lock().now()
    }

    pub fn current(&self) -> Option<Zuid> {
        self.inner.lock().current()
    }

    /// Snapshot of the creation history.
    pub fn history(&self) -> Vec<Zuid> {
        self.inner.lock().history().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl From<Generator> for SharedGenerator {
    fn from(generator: Generator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }
}
