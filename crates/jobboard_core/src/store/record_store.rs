//! Generic ordered record store.
//!
//! # Responsibility
//! - Keep one entity type's records in insertion order.
//! - Assign fresh ids on add through an injected `IdGenerator`.
//!
//! # Invariants
//! - No two stored records share an id.
//! - `edit` replaces in place and never moves a record.
//! - `edit`/`delete` of an unknown id leave the collection untouched.

use crate::model::record::Record;
use crate::store::ids::{IdGenerator, SequentialIds, UuidIds};
use log::{debug, warn};
use std::fmt::{Debug, Formatter};

/// Taken ids tolerated from the configured generator before falling back to
/// random UUIDs.
const MAX_GENERATED_COLLISIONS: usize = 16;

/// Authoritative in-memory collection for one record type.
///
/// Single writer: mutations take `&mut self`, so call order is the mutation
/// order. Share across threads through `SharedPanel`, not by cloning.
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    ids: Box<dyn IdGenerator>,
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store with sequential ids.
    pub fn new() -> Self {
        Self::with_generator(Box::new(SequentialIds::new()))
    }

    /// Creates an empty store using the given id generator.
    pub fn with_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    /// Creates a store pre-populated with `records`.
    ///
    /// # Invariants
    /// - Records keep their given order.
    /// - A record whose id repeats an earlier one is dropped, so the store
    ///   starts with unique ids.
    /// - Every kept id is reported to the generator before the first add.
    pub fn with_records(records: Vec<R>, mut ids: Box<dyn IdGenerator>) -> Self {
        let mut kept: Vec<R> = Vec::with_capacity(records.len());
        for record in records {
            if kept.iter().any(|existing| existing.id() == record.id()) {
                warn!(
                    "event=seed_duplicate module=store status=skipped kind={} id={}",
                    R::KIND,
                    record.id()
                );
                continue;
            }
            ids.observe(record.id());
            kept.push(record);
        }

        Self { records: kept, ids }
    }

    /// Returns every record in store order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Looks up one record by id.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns whether a record with `id` is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Creates a record from `input` and appends it.
    ///
    /// # Contract
    /// - The assigned id is not used by any stored record.
    /// - Never fails; input validation happens before this call.
    /// - Returns a copy of the stored record.
    pub fn add(&mut self, input: R::Input) -> R {
        let id = self.fresh_id();
        let record = R::from_input(id, input);
        self.records.push(record.clone());
        debug!(
            "event=record_add module=store status=ok kind={} id={} len={}",
            R::KIND,
            record.id(),
            self.records.len()
        );
        record
    }

    /// Replaces the stored record that has the same id as `record`.
    ///
    /// Returns `false` and changes nothing when no such record exists.
    pub fn edit(&mut self, record: R) -> bool {
        match self.position(record.id()) {
            Some(index) => {
                debug!(
                    "event=record_edit module=store status=ok kind={} id={}",
                    R::KIND,
                    record.id()
                );
                self.records[index] = record;
                true
            }
            None => {
                debug!(
                    "event=record_edit module=store status=noop kind={} id={}",
                    R::KIND,
                    record.id()
                );
                false
            }
        }
    }

    /// Removes the record with `id`, keeping the order of the rest.
    ///
    /// Returns `false` and changes nothing when no such record exists, so
    /// repeated deletes are harmless.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                debug!(
                    "event=record_delete module=store status=ok kind={} id={} len={}",
                    R::KIND,
                    id,
                    self.records.len()
                );
                true
            }
            None => {
                debug!(
                    "event=record_delete module=store status=noop kind={} id={}",
                    R::KIND,
                    id
                );
                false
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn fresh_id(&mut self) -> String {
        for _ in 0..MAX_GENERATED_COLLISIONS {
            let candidate = self.ids.next_id();
            if !self.contains(&candidate) {
                return candidate;
            }
            // Caller-supplied seed ids can sit ahead of the generator.
            self.ids.observe(&candidate);
        }

        // The generator is stuck on taken ids (e.g. a saturated counter).
        warn!(
            "event=id_fallback module=store status=degraded kind={} attempts={}",
            R::KIND,
            MAX_GENERATED_COLLISIONS
        );
        let mut fallback = UuidIds;
        loop {
            let candidate = fallback.next_id();
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + Debug> Debug for RecordStore<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
