//! Record models for the admin stores.
//!
//! # Responsibility
//! - Define the Company and Job records plus their id-less input shapes.
//! - Provide the `Record` contract shared by the generic store and table.
//!
//! # Invariants
//! - Every record is identified by a string id that never changes.
//! - Inputs carry every field except `id`.

pub mod company;
pub mod job;
pub mod record;
