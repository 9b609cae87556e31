//! # Storage Layer
//!
//! The [`RecordStore`] trait is the keyed mapping from student ID to [`Student`].
//!
//! ## Contract
//!
//! - **Seed**: built once from an ordered list of records, keyed by each record's own
//!   `id`. Two records with the same `id` are rejected with
//!   [`RollbookError::DuplicateId`](crate::error::RollbookError::DuplicateId).
//! - **Insert**: upsert. The entry at `id` is added or replaced and the replaced
//!   record, if any, is returned. The store does not check that `student.id == id`;
//!   the command layer always passes matching values.
//! - **Lookup**: exact, case-sensitive match. No trimming happens here. A miss is
//!   `None`, never an error.
//! - No deletion, no update in place, no prefix or range queries.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `HashMap`-backed, process-lifetime only.

use crate::error::Result;
use crate::model::Student;

pub mod memory;

pub trait RecordStore {
    /// Builds a store from seed records, rejecting duplicate identifiers.
    fn seed(records: Vec<Student>) -> Result<Self>
    where
        Self: Sized;

    /// Adds or replaces the entry at `id`, returning the previous record.
    fn insert(&mut self, id: &str, student: Student) -> Option<Student>;

    /// Exact-match lookup.
    fn lookup(&self, id: &str) -> Option<&Student>;

    /// Number of entries.
    fn count(&self) -> usize;

    /// All keys, in no particular order.
    fn keys(&self) -> Vec<&str>;

    /// All records, in no particular order.
    fn list(&self) -> Vec<&Student>;
}
