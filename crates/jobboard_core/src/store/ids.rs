//! Id assignment policies for new records.
//!
//! # Invariants
//! - `SequentialIds` never hands out the same value twice.
//! - After observing existing ids, `SequentialIds` starts above the largest
//!   numeric one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of fresh record ids.
///
/// The store retries while a generated id is already taken, so generators
/// only need to be unlikely to collide, not collision-free.
pub trait IdGenerator: Send {
    /// Returns the next candidate id.
    fn next_id(&mut self) -> String;

    /// Informs the generator of an id already present in the store.
    fn observe(&mut self, _existing_id: &str) {}
}

/// Monotonically increasing decimal counter (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting after `last`.
    pub fn starting_after(last: u128) -> Self {
        Self { last }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.last = self.last.saturating_add(1);
        self.last.to_string()
    }

    fn observe(&mut self, existing_id: &str) {
        if let Ok(value) = existing_id.trim().parse::<u128>() {
            self.last = self.last.max(value);
        }
    }
}

/// Random UUID v4 ids in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Configurable id strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    #[default]
    Sequential,
    Uuid,
}

impl IdPolicy {
    /// Stable string id used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Uuid => "uuid",
        }
    }

    /// Builds a fresh generator for this policy.
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Sequential => Box::new(SequentialIds::new()),
            Self::Uuid => Box::new(UuidIds),
        }
    }
}
