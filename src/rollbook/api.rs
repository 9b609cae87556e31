//! # API Facade
//!
//! [`RollbookApi`] is the single entry point for UI clients. It owns the two pieces
//! of mutable state, the record store and the identifier allocator, and enforces
//! the order they come to life in:
//!
//! 1. The store is seeded (duplicates rejected).
//! 2. The allocator is initialized once from the seeded keys.
//! 3. Only then are insertions accepted.
//!
//! Because both live behind `&mut self`, an insertion's "allocate then insert" pair
//! cannot interleave with another caller's. Anyone sharing a `RollbookApi` across
//! threads wraps the whole value in a lock.
//!
//! The facade holds no business logic of its own; each method dispatches to a
//! command module and returns its `CmdResult`.
//!
//! ## Generic Over RecordStore
//!
//! - `RollbookApi<InMemoryStore>` is what the binary and the tests use.
//! - Any other `RecordStore` works the same way.

use crate::commands;
use crate::error::Result;
use crate::ids::IdAllocator;
use crate::model::{NewStudent, Student};
use crate::store::memory::InMemoryStore;
use crate::store::RecordStore;

pub struct RollbookApi<S: RecordStore> {
    store: S,
    ids: IdAllocator,
    startup_messages: Vec<commands::CmdMessage>,
}

impl<S: RecordStore> RollbookApi<S> {
    /// Wraps an already seeded store, initializing the allocator from its keys.
    pub fn new(store: S, prefix: impl Into<String>) -> Result<Self> {
        let (ids, malformed) = IdAllocator::initialize(prefix, store.keys())?;

        let mut startup_messages: Vec<_> = malformed
            .iter()
            .map(|id| {
                commands::CmdMessage::warning(format!("Found invalid student ID format: {}", id))
            })
            .collect();
        if let Some(next_suffix) = ids.next_suffix() {
            startup_messages.push(commands::CmdMessage::info(format!(
                "ID counter initialized. Next new ID suffix will be: {}",
                next_suffix
            )));
        }

        Ok(Self {
            store,
            ids,
            startup_messages,
        })
    }

    /// Diagnostics produced while initializing the allocator.
    pub fn startup_messages(&self) -> &[commands::CmdMessage] {
        &self.startup_messages
    }

    pub fn add_student(&mut self, fields: NewStudent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.ids, fields)
    }

    pub fn find_students<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, ids)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.ids.prefix())
    }

    /// Raw exact-match lookup; `None` is the absent signal.
    pub fn lookup(&self, id: &str) -> Option<&Student> {
        self.store.lookup(id)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// The identifier the next `add_student` will assign, `None` once IDs have run out.
    pub fn next_id(&self) -> Option<String> {
        self.ids.peek()
    }
}

impl RollbookApi<InMemoryStore> {
    /// Seeds an in-memory store from `records` and wraps it.
    pub fn from_seed(records: Vec<Student>, prefix: impl Into<String>) -> Result<Self> {
        let store = InMemoryStore::seed(records)?;
        Self::new(store, prefix)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
