//! In-memory record stores.
//!
//! # Responsibility
//! - Own the authoritative ordered collection for one entity type.
//! - Apply add/edit/delete transitions synchronously on the caller's thread.
//!
//! # Invariants
//! - Ids are unique within a store.
//! - Insertion order is preserved; edit keeps the record's position.
//! - Edit and delete of a missing id are silent no-ops.
//! - A store never depends on another store.

pub mod ids;
pub mod record_store;

use crate::model::company::Company;
use crate::model::job::Job;

pub use ids::{IdGenerator, IdPolicy, SequentialIds, UuidIds};
pub use record_store::RecordStore;

/// Store owning company records.
pub type CompanyStore = RecordStore<Company>;

/// Store owning job records. Leaf store: knows nothing about companies.
pub type JobStore = RecordStore<Job>;
